//! Button configuration, style resolution and presentation.

mod config;
mod presentation;
mod resolver;

pub use config::{ButtonConfiguration, ButtonSize, ButtonVariant, Decoration, Rounding};
pub use presentation::{
    AccessibilityDescription, AccessibilityRole, ButtonContent, ButtonPresentation, IndicatorSize,
    LoadingIndicator, display_label,
};
pub use resolver::{ResolvedStyle, StyleLayer, StyleResolver};
