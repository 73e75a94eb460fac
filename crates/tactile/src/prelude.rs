//! Prelude module for Tactile.
//!
//! ```ignore
//! use tactile::prelude::*;
//! ```
//!
//! This provides access to:
//! - The button control (`PressableButton`, `PointerEvent`)
//! - Configuration (`ButtonConfiguration`, `ButtonVariant`, `ButtonSize`, `Rounding`)
//! - Style resolution (`StyleResolver`, `ButtonPresentation`)
//! - Press animation (`PressAnimationController`, `FrameTweener`, `Easing`)
//! - Themes, styles and colors

// ============================================================================
// Core
// ============================================================================

pub use tactile_core::{BoxShadow, Color, ConnectionId, CornerRadii, ShadowProfile, Signal};

// ============================================================================
// Styling
// ============================================================================

pub use tactile_style::prelude::*;

// ============================================================================
// Button
// ============================================================================

pub use crate::button::{
    AccessibilityDescription, AccessibilityRole, ButtonConfiguration, ButtonContent,
    ButtonPresentation, ButtonSize, ButtonVariant, Decoration, IndicatorSize, LoadingIndicator,
    ResolvedStyle, Rounding, StyleLayer, StyleResolver,
};

// ============================================================================
// Animation
// ============================================================================

pub use crate::animation::{
    AnimatedScale, AnimationState, Easing, FrameTweener, PressAnimationController, PressGate,
    PressPhase, PressTiming, TweenHandle, TweenRequest, Tweener,
};

// ============================================================================
// Widget
// ============================================================================

pub use crate::widget::{PointerEvent, PressableButton};
