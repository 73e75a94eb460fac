//! What the host renderer draws for a button.

use std::borrow::Cow;

use tactile_core::Color;
use tactile_style::style::ComputedStyle;

use super::config::{ButtonConfiguration, ButtonSize, Decoration};
use super::resolver::ResolvedStyle;

/// Size class of the busy indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorSize {
    Small,
    Large,
}

impl From<ButtonSize> for IndicatorSize {
    fn from(size: ButtonSize) -> Self {
        match size {
            ButtonSize::Large => IndicatorSize::Large,
            ButtonSize::Small | ButtonSize::Medium => IndicatorSize::Small,
        }
    }
}

/// The busy indicator shown in place of the label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingIndicator {
    pub size: IndicatorSize,
    pub color: Color,
}

/// The inside of the button.
#[derive(Debug, Clone)]
pub enum ButtonContent {
    /// Loading: only the indicator is shown.
    Loading(LoadingIndicator),
    /// The label with its optional decorations.
    Label {
        left: Option<Decoration>,
        text: String,
        right: Option<Decoration>,
    },
}

impl ButtonContent {
    pub fn is_loading(&self) -> bool {
        matches!(self, ButtonContent::Loading(_))
    }

    /// The label text, if the label is shown.
    pub fn text(&self) -> Option<&str> {
        match self {
            ButtonContent::Label { text, .. } => Some(text.as_str()),
            ButtonContent::Loading(_) => None,
        }
    }
}

/// Accessibility role exposed to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessibilityRole {
    #[default]
    Button,
}

/// What assistive technology is told about the button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityDescription {
    pub role: AccessibilityRole,
    pub label: String,
    pub disabled: bool,
    pub busy: bool,
}

impl AccessibilityDescription {
    /// Describe a configuration.
    pub fn for_config(config: &ButtonConfiguration) -> Self {
        Self {
            role: AccessibilityRole::Button,
            label: config.label.clone(),
            disabled: config.appears_disabled(),
            busy: config.loading,
        }
    }
}

/// The complete, render-ready description of one button frame.
#[derive(Debug, Clone)]
pub struct ButtonPresentation {
    pub container: ComputedStyle,
    pub label: ComputedStyle,
    pub content: ButtonContent,
    /// Scale to apply to the container, from the press animation.
    pub scale: f32,
    pub accessibility: AccessibilityDescription,
}

impl ButtonPresentation {
    /// Assemble a presentation from resolved styles and the current scale.
    pub fn new(config: &ButtonConfiguration, style: ResolvedStyle, scale: f32) -> Self {
        let content = if config.loading {
            ButtonContent::Loading(LoadingIndicator {
                size: IndicatorSize::from(config.size),
                color: style.loading_indicator_color,
            })
        } else {
            ButtonContent::Label {
                left: config.left_decoration.clone(),
                text: display_label(config).into_owned(),
                right: config.right_decoration.clone(),
            }
        };

        Self {
            container: style.container,
            label: style.label,
            content,
            scale,
            accessibility: AccessibilityDescription::for_config(config),
        }
    }
}

/// The label as displayed: upper-cased when requested, otherwise unchanged.
pub fn display_label(config: &ButtonConfiguration) -> Cow<'_, str> {
    if config.uppercase {
        Cow::Owned(config.label.to_uppercase())
    } else {
        Cow::Borrowed(config.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::StyleResolver;
    use tactile_style::platform::Platform;
    use tactile_style::theme::Theme;

    fn present(config: &ButtonConfiguration) -> ButtonPresentation {
        let resolver = StyleResolver::new(Theme::light()).with_platform(Platform::Other);
        ButtonPresentation::new(config, resolver.resolve(config), 1.0)
    }

    #[test]
    fn uppercase_label() {
        let config = ButtonConfiguration::new("Continue straße").with_uppercase(true);
        assert_eq!(display_label(&config), "CONTINUE STRASSE");
        assert_eq!(present(&config).content.text(), Some("CONTINUE STRASSE"));

        let plain = ButtonConfiguration::new("Continue");
        assert!(matches!(display_label(&plain), Cow::Borrowed("Continue")));
    }

    #[test]
    fn loading_replaces_label_and_decorations() {
        let config = ButtonConfiguration::new("Upload")
            .with_left_decoration(Decoration::new("icon"))
            .with_loading(true)
            .with_size(ButtonSize::Large);

        let presentation = present(&config);
        match presentation.content {
            ButtonContent::Loading(indicator) => {
                assert_eq!(indicator.size, IndicatorSize::Large);
                assert_eq!(indicator.color, Theme::light().palette.on_filled);
            }
            other => panic!("expected loading content, got {other:?}"),
        }
        assert!(presentation.accessibility.busy);
        assert!(presentation.accessibility.disabled);
    }

    #[test]
    fn decorations_surround_label() {
        let config = ButtonConfiguration::new("Next")
            .with_left_decoration(Decoration::new(1_u8))
            .with_right_decoration(Decoration::new(2_u8));

        let ButtonContent::Label { left, text, right } = present(&config).content else {
            panic!("expected label content");
        };
        assert_eq!(left.unwrap().downcast_ref::<u8>(), Some(&1));
        assert_eq!(text, "Next");
        assert_eq!(right.unwrap().downcast_ref::<u8>(), Some(&2));
    }

    #[test]
    fn indicator_size_mapping() {
        assert_eq!(IndicatorSize::from(ButtonSize::Small), IndicatorSize::Small);
        assert_eq!(IndicatorSize::from(ButtonSize::Medium), IndicatorSize::Small);
        assert_eq!(IndicatorSize::from(ButtonSize::Large), IndicatorSize::Large);
    }

    #[test]
    fn accessibility_reflects_state() {
        let a11y = present(&ButtonConfiguration::new("Pay").with_disabled(true)).accessibility;
        assert_eq!(a11y.role, AccessibilityRole::Button);
        assert_eq!(a11y.label, "Pay");
        assert!(a11y.disabled);
        assert!(!a11y.busy);
    }
}
