//! Styling system for Tactile controls.
//!
//! This crate provides the style vocabulary the control crates resolve into:
//!
//! - **Patches**: [`StyleProperties`](style::StyleProperties), partial styles
//!   that overlay one another property by property
//! - **Computed styles**: [`ComputedStyle`](style::ComputedStyle), the
//!   flattened description handed to the renderer
//! - **Type-safe DSL**: build patches with [`Style`](style::Style)
//! - **Design tokens**: [`Theme`](theme::Theme) palettes, size tiers and
//!   shape tokens, loadable from TOML
//! - **Platforms**: shadow profiles per [`Platform`](platform::Platform)
//!
//! # Example
//!
//! ```
//! use tactile_style::prelude::*;
//! use tactile_core::Color;
//!
//! let mut patch = Style::new()
//!     .background_color(Color::WHITE)
//!     .border_radius_all(8.0)
//!     .build();
//!
//! // A later layer only replaces what it sets.
//! patch.merge(&Style::new().background_color(Color::BLACK).build());
//!
//! let computed = ComputedStyle::from_properties(&patch);
//! assert_eq!(computed.background_color, Color::BLACK);
//! assert_eq!(computed.border_radius.max(), 8.0);
//! ```

pub mod platform;
pub mod style;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::platform::{FixedPlatform, Platform, PlatformProvider};
    pub use crate::style::{ComputedStyle, Style, StyleProperties};
    pub use crate::theme::{ColorPalette, ShapeTokens, SizeMetrics, SizeScale, Theme, ThemeMode};
    pub use crate::types::{
        Alignment, BorderStyle, EdgeValues, FlexDirection, FontWeight, Justify, StyleValue,
        TextAlign, TextOverflow,
    };
}
