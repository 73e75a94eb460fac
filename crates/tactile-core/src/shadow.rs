//! Shadow descriptions.
//!
//! Hosts draw shadows in one of two ways: a blurred, offset copy of the
//! container ([`BoxShadow`]), or a platform elevation level that the
//! compositor turns into a shadow on its own. [`ShadowProfile`] carries
//! whichever one applies.

use crate::Color;

/// A blurred, offset drop shadow.
///
/// # Example
///
/// ```
/// use tactile_core::{BoxShadow, Color};
///
/// let shadow = BoxShadow::new(Color::BLACK.with_alpha(0.25))
///     .with_offset(0.0, 2.0)
///     .with_blur(3.84);
/// assert!(shadow.is_visible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    /// Shadow color (alpha controls the shadow's opacity).
    pub color: Color,
    /// Horizontal offset. Positive moves the shadow right.
    pub offset_x: f32,
    /// Vertical offset. Positive moves the shadow down.
    pub offset_y: f32,
    /// Blur radius. Larger values create softer shadows.
    pub blur_radius: f32,
}

impl BoxShadow {
    /// Create a shadow with the given color, no offset and no blur.
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            offset_x: 0.0,
            offset_y: 0.0,
            blur_radius: 0.0,
        }
    }

    /// Set the shadow offset.
    #[inline]
    pub const fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the blur radius. Negative values are treated as zero.
    #[inline]
    pub fn with_blur(mut self, radius: f32) -> Self {
        self.blur_radius = radius.max(0.0);
        self
    }

    /// Whether drawing this shadow would produce anything.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.color.is_transparent()
    }
}

/// A complete shadow description for a container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ShadowProfile {
    /// No shadow.
    #[default]
    None,
    /// Blur + offset drop shadow.
    Drop(BoxShadow),
    /// Platform elevation level, rendered by the compositor.
    Elevation(f32),
}

impl ShadowProfile {
    /// Check whether this profile draws anything.
    pub fn is_none(&self) -> bool {
        match self {
            ShadowProfile::None => true,
            ShadowProfile::Drop(shadow) => !shadow.is_visible(),
            ShadowProfile::Elevation(level) => *level <= 0.0,
        }
    }

    /// The drop shadow, if this is a blur + offset profile.
    pub fn drop_shadow(&self) -> Option<&BoxShadow> {
        match self {
            ShadowProfile::Drop(shadow) => Some(shadow),
            _ => None,
        }
    }

    /// The elevation level, if this is an elevation profile.
    pub fn elevation(&self) -> Option<f32> {
        match self {
            ShadowProfile::Elevation(level) => Some(*level),
            _ => None,
        }
    }
}
