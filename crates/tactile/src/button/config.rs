//! Button configuration: the inputs to style resolution and press feedback.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use tactile_core::Color;
use tactile_style::style::StyleProperties;
use tactile_style::types::BorderStyle;

use crate::animation::PressGate;

/// The semantic flavor of a button.
///
/// Written in lowercase in configuration files (`"outline"`, `"ghost"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled with the primary color.
    #[default]
    Primary,
    /// Filled with the secondary color.
    Secondary,
    /// Transparent fill with an accent border.
    Outline,
    /// Filled with the danger color.
    Danger,
    /// Filled with the success color.
    Success,
    /// Transparent fill, no border, no shadow.
    Ghost,
}

impl ButtonVariant {
    /// All variants.
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Danger,
        ButtonVariant::Success,
        ButtonVariant::Ghost,
    ];

    /// Variants drawn without a background fill. Their text uses the accent
    /// color instead of the on-filled color.
    pub fn is_transparent(self) -> bool {
        matches!(self, ButtonVariant::Outline | ButtonVariant::Ghost)
    }

    /// Whether this variant may cast a shadow at all.
    pub fn casts_shadow(self) -> bool {
        self != ButtonVariant::Ghost
    }
}

/// One of three size tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// All tiers, smallest first.
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];
}

/// Corner rounding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Rounding {
    /// The theme's standard corner radius.
    #[default]
    Default,
    /// Fully rounded ends.
    Pill,
    /// An explicit radius.
    Radius(f32),
}

impl From<bool> for Rounding {
    /// `true` means pill, `false` means the theme default.
    fn from(pill: bool) -> Self {
        if pill { Rounding::Pill } else { Rounding::Default }
    }
}

impl From<f32> for Rounding {
    fn from(radius: f32) -> Self {
        Rounding::Radius(radius)
    }
}

/// An opaque renderable shown next to the label, such as an icon.
///
/// The control never inspects a decoration; it only decides whether to
/// show it. Hosts recover their own type with
/// [`downcast_ref`](Self::downcast_ref).
#[derive(Clone)]
pub struct Decoration(Arc<dyn Any + Send + Sync>);

impl Decoration {
    /// Wrap a host renderable.
    pub fn new<T: Any + Send + Sync>(content: T) -> Self {
        Self(Arc::new(content))
    }

    /// Borrow the wrapped renderable as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Check whether two decorations wrap the same renderable.
    pub fn ptr_eq(&self, other: &Decoration) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Decoration(..)")
    }
}

/// The full set of caller inputs for one button.
///
/// All fields are public; the `with_*` methods exist for fluent
/// construction.
///
/// # Example
///
/// ```
/// use tactile::prelude::*;
///
/// let config = ButtonConfiguration::new("Save")
///     .with_variant(ButtonVariant::Outline)
///     .with_size(ButtonSize::Large)
///     .with_rounded(true);
///
/// assert_eq!(config.rounded, Rounding::Pill);
/// assert!(config.is_interactive());
/// ```
#[derive(Debug, Clone)]
pub struct ButtonConfiguration {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub loading: bool,
    pub disabled: bool,
    pub left_decoration: Option<Decoration>,
    pub right_decoration: Option<Decoration>,
    pub uppercase: bool,
    pub rounded: Rounding,
    pub full_width: bool,
    pub shadow_disabled: bool,
    pub background_color_override: Option<Color>,
    pub text_color_override: Option<Color>,
    pub border_color_override: Option<Color>,
    pub border_width_override: Option<f32>,
    /// Always applied; it has a value even when the caller never sets one.
    pub border_style: BorderStyle,
    pub loading_indicator_color_override: Option<Color>,
    /// Press feedback is opt-in.
    pub animation_enabled: bool,
    /// Scale while pressed. Values outside `(0, 1]` are passed through.
    pub animation_scale: f32,
    /// Merged last onto the container, beating every other layer.
    pub container_style_override: Option<StyleProperties>,
    /// Merged last onto the label, beating every other layer.
    pub label_style_override: Option<StyleProperties>,
}

impl Default for ButtonConfiguration {
    fn default() -> Self {
        Self {
            label: String::new(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            loading: false,
            disabled: false,
            left_decoration: None,
            right_decoration: None,
            uppercase: false,
            rounded: Rounding::Default,
            full_width: false,
            shadow_disabled: false,
            background_color_override: None,
            text_color_override: None,
            border_color_override: None,
            border_width_override: None,
            border_style: BorderStyle::Solid,
            loading_indicator_color_override: None,
            animation_enabled: false,
            animation_scale: 0.95,
            container_style_override: None,
            label_style_override: None,
        }
    }
}

impl ButtonConfiguration {
    /// Create a configuration with the given label and every other input at
    /// its default.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_left_decoration(mut self, decoration: Decoration) -> Self {
        self.left_decoration = Some(decoration);
        self
    }

    pub fn with_right_decoration(mut self, decoration: Decoration) -> Self {
        self.right_decoration = Some(decoration);
        self
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Set corner rounding. Accepts a [`Rounding`], a `bool` (pill or not)
    /// or an `f32` radius.
    pub fn with_rounded(mut self, rounded: impl Into<Rounding>) -> Self {
        self.rounded = rounded.into();
        self
    }

    pub fn with_full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn with_shadow_disabled(mut self, shadow_disabled: bool) -> Self {
        self.shadow_disabled = shadow_disabled;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color_override = Some(color);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color_override = Some(color);
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color_override = Some(color);
        self
    }

    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width_override = Some(width);
        self
    }

    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    pub fn with_loading_indicator_color(mut self, color: Color) -> Self {
        self.loading_indicator_color_override = Some(color);
        self
    }

    pub fn with_animation(mut self, enabled: bool) -> Self {
        self.animation_enabled = enabled;
        self
    }

    pub fn with_animation_scale(mut self, scale: f32) -> Self {
        self.animation_scale = scale;
        self
    }

    pub fn with_container_style(mut self, style: impl Into<StyleProperties>) -> Self {
        self.container_style_override = Some(style.into());
        self
    }

    pub fn with_label_style(mut self, style: impl Into<StyleProperties>) -> Self {
        self.label_style_override = Some(style.into());
        self
    }

    /// Whether the button renders in the disabled look. Loading buttons look
    /// disabled too.
    pub fn appears_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Whether taps activate the button.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// The flags that gate press feedback.
    pub fn press_gate(&self) -> PressGate {
        PressGate {
            animation_enabled: self.animation_enabled,
            disabled: self.disabled,
            loading: self.loading,
        }
    }
}
