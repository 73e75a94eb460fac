//! Layered style resolution for buttons.
//!
//! A button's container and label styles are produced by folding a fixed
//! sequence of patches, lowest precedence first:
//!
//! | Layer       | Container                               | Label                 |
//! |-------------|-----------------------------------------|-----------------------|
//! | Base        | row layout, centering, radius, padding  | bold, centered, 1 line|
//! | Variant     | fill, border                            | on-filled or accent   |
//! | Size        | padding, minimum size                   | font size             |
//! | Rounding    | pill or explicit radius                 |                       |
//! | FullWidth   | stretch across the parent               |                       |
//! | Shadow      | platform shadow profile                 |                       |
//! | Disabled    | neutral colors, reduced opacity         | neutral text          |
//! | Overrides   | caller colors, border width and style   | caller text color     |
//! | Caller      | caller container patch                  | caller label patch    |
//!
//! Each later layer replaces only the properties it sets. Resolution is a
//! pure function of the configuration, the theme and the platform.

use tactile_core::Color;
use tactile_core::logging::{span_names, targets};
use tactile_style::platform::{Platform, PlatformProvider};
use tactile_style::style::{ComputedStyle, Style, StyleProperties};
use tactile_style::theme::{SizeMetrics, Theme};
use tactile_style::types::{Alignment, EdgeValues, FlexDirection, FontWeight, Justify, TextAlign};

use super::config::{ButtonConfiguration, ButtonSize, ButtonVariant, Rounding};

/// One step of the resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleLayer {
    Base,
    Variant,
    Size,
    Rounding,
    FullWidth,
    Shadow,
    Disabled,
    Overrides,
    Caller,
}

impl StyleLayer {
    /// Every layer in application order.
    pub const ORDER: [StyleLayer; 9] = [
        StyleLayer::Base,
        StyleLayer::Variant,
        StyleLayer::Size,
        StyleLayer::Rounding,
        StyleLayer::FullWidth,
        StyleLayer::Shadow,
        StyleLayer::Disabled,
        StyleLayer::Overrides,
        StyleLayer::Caller,
    ];

    /// A short lowercase name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            StyleLayer::Base => "base",
            StyleLayer::Variant => "variant",
            StyleLayer::Size => "size",
            StyleLayer::Rounding => "rounding",
            StyleLayer::FullWidth => "full-width",
            StyleLayer::Shadow => "shadow",
            StyleLayer::Disabled => "disabled",
            StyleLayer::Overrides => "overrides",
            StyleLayer::Caller => "caller",
        }
    }
}

/// Everything resolution produces for one configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub container: ComputedStyle,
    pub label: ComputedStyle,
    pub loading_indicator_color: Color,
}

/// Turns a [`ButtonConfiguration`] into concrete styles.
///
/// # Example
///
/// ```
/// use tactile::prelude::*;
///
/// let resolver = StyleResolver::new(Theme::light()).with_platform(Platform::Other);
/// let style = resolver.resolve(&ButtonConfiguration::new("OK").with_rounded(true));
///
/// assert!(style.container.is_pill());
/// assert_eq!(style.label.font_weight, FontWeight::BOLD);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleResolver {
    theme: Theme,
    platform: Platform,
}

impl Default for StyleResolver {
    /// The light theme on the compile-time target platform.
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl StyleResolver {
    /// Create a resolver for `theme` on the compile-time target platform.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            platform: Platform::current(),
        }
    }

    /// Use the shadow profile of another platform.
    pub fn with_platform(mut self, provider: impl PlatformProvider) -> Self {
        self.platform = provider.platform();
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Resolve container, label and loading indicator color in one pass.
    pub fn resolve(&self, config: &ButtonConfiguration) -> ResolvedStyle {
        let _span = tracing::trace_span!(
            target: targets::STYLE,
            span_names::RESOLVE,
            variant = ?config.variant,
            size = ?config.size
        )
        .entered();

        ResolvedStyle {
            container: self.resolve_container(config),
            label: self.resolve_label(config),
            loading_indicator_color: self.loading_indicator_color(config),
        }
    }

    /// Resolve the container style.
    pub fn resolve_container(&self, config: &ButtonConfiguration) -> ComputedStyle {
        ComputedStyle::from_properties(&fold_layers("container", self.container_layers(config)))
    }

    /// Resolve the label style.
    pub fn resolve_label(&self, config: &ButtonConfiguration) -> ComputedStyle {
        ComputedStyle::from_properties(&fold_layers("label", self.label_layers(config)))
    }

    /// The color of the busy indicator: the caller's override, else the
    /// label color a non-disabled button of this variant would use.
    pub fn loading_indicator_color(&self, config: &ButtonConfiguration) -> Color {
        config
            .loading_indicator_color_override
            .unwrap_or_else(|| self.variant_text_color(config.variant))
    }

    /// The container patches in application order.
    pub fn container_layers(&self, config: &ButtonConfiguration) -> Vec<(StyleLayer, StyleProperties)> {
        let palette = &self.theme.palette;
        let shape = &self.theme.shape;
        let medium = &self.theme.sizes.medium;

        let base = Style::new()
            .flex_direction(FlexDirection::Row)
            .align_items(Alignment::Center)
            .justify_content(Justify::Center)
            .align_self(Alignment::Center)
            .border_radius_all(shape.corner_radius)
            .padding(padding_for(medium))
            .min_width(medium.min_width)
            .min_height(medium.min_height)
            .border_width(0.0)
            .build();

        let variant = match config.variant {
            ButtonVariant::Primary => filled(palette.primary),
            ButtonVariant::Secondary => filled(palette.secondary),
            ButtonVariant::Danger => filled(palette.danger),
            ButtonVariant::Success => filled(palette.success),
            ButtonVariant::Outline => Style::new()
                .background_color(Color::TRANSPARENT)
                .border_width(shape.outline_border_width)
                .border_color(palette.accent)
                .build(),
            ButtonVariant::Ghost => Style::new()
                .background_color(Color::TRANSPARENT)
                .border_width(0.0)
                .no_shadow()
                .build(),
        };

        let metrics = self.metrics(config.size);
        let size = Style::new()
            .padding(padding_for(metrics))
            .min_width(metrics.min_width)
            .min_height(metrics.min_height)
            .build();

        let rounding = match config.rounded {
            Rounding::Default => StyleProperties::new(),
            // A pill needs at least half the tier's height, whatever the theme says.
            Rounding::Pill => Style::new()
                .border_radius_all(shape.pill_radius.max(metrics.min_height / 2.0))
                .build(),
            Rounding::Radius(radius) => Style::new().border_radius_all(radius).build(),
        };

        let full_width = if config.full_width {
            Style::new().align_self(Alignment::Stretch).build()
        } else {
            StyleProperties::new()
        };

        let shadow = if config.variant.casts_shadow() && !config.shadow_disabled {
            Style::new()
                .shadow(self.platform.shadow_profile(palette.shadow))
                .build()
        } else {
            StyleProperties::new()
        };

        let disabled = if config.appears_disabled() {
            Style::new()
                .background_color(palette.disabled_background)
                .border_color(palette.disabled_border)
                .opacity(shape.disabled_opacity)
                .build()
        } else {
            StyleProperties::new()
        };

        let mut overrides = Style::new().border_style(config.border_style);
        if let Some(color) = config.background_color_override {
            overrides = overrides.background_color(color);
        }
        if let Some(color) = config.border_color_override {
            overrides = overrides.border_color(color);
        }
        if let Some(width) = config.border_width_override {
            overrides = overrides.border_width(width);
        }

        let caller = config.container_style_override.clone().unwrap_or_default();

        vec![
            (StyleLayer::Base, base),
            (StyleLayer::Variant, variant),
            (StyleLayer::Size, size),
            (StyleLayer::Rounding, rounding),
            (StyleLayer::FullWidth, full_width),
            (StyleLayer::Shadow, shadow),
            (StyleLayer::Disabled, disabled),
            (StyleLayer::Overrides, overrides.build()),
            (StyleLayer::Caller, caller),
        ]
    }

    /// The label patches in application order. Layers with no label
    /// counterpart are omitted.
    pub fn label_layers(&self, config: &ButtonConfiguration) -> Vec<(StyleLayer, StyleProperties)> {
        let base = Style::new()
            .font_weight(FontWeight::BOLD)
            .text_align(TextAlign::Center)
            .single_line()
            .build();

        let variant = Style::new()
            .color(self.variant_text_color(config.variant))
            .build();

        let size = Style::new()
            .font_size(self.metrics(config.size).font_size)
            .build();

        let disabled = if config.appears_disabled() {
            Style::new().color(self.theme.palette.disabled_text).build()
        } else {
            StyleProperties::new()
        };

        let overrides = match config.text_color_override {
            Some(color) => Style::new().color(color).build(),
            None => StyleProperties::new(),
        };

        let caller = config.label_style_override.clone().unwrap_or_default();

        vec![
            (StyleLayer::Base, base),
            (StyleLayer::Variant, variant),
            (StyleLayer::Size, size),
            (StyleLayer::Disabled, disabled),
            (StyleLayer::Overrides, overrides),
            (StyleLayer::Caller, caller),
        ]
    }

    fn metrics(&self, size: ButtonSize) -> &SizeMetrics {
        match size {
            ButtonSize::Small => &self.theme.sizes.small,
            ButtonSize::Medium => &self.theme.sizes.medium,
            ButtonSize::Large => &self.theme.sizes.large,
        }
    }

    fn variant_text_color(&self, variant: ButtonVariant) -> Color {
        if variant.is_transparent() {
            self.theme.palette.accent
        } else {
            self.theme.palette.on_filled
        }
    }
}

static_assertions::assert_impl_all!(StyleResolver: Send, Sync);

fn filled(color: Color) -> StyleProperties {
    Style::new().background_color(color).border_width(0.0).build()
}

fn padding_for(metrics: &SizeMetrics) -> EdgeValues {
    EdgeValues::symmetric(metrics.padding_vertical, metrics.padding_horizontal)
}

fn fold_layers(part: &str, layers: Vec<(StyleLayer, StyleProperties)>) -> StyleProperties {
    let mut result = StyleProperties::new();
    for (layer, patch) in &layers {
        if patch.is_empty() {
            continue;
        }
        tracing::trace!(
            target: targets::STYLE,
            part,
            layer = layer.name(),
            properties = patch.set_count(),
            "applying style layer"
        );
        result.merge(patch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactile_core::ShadowProfile;
    use tactile_style::types::TextOverflow;

    fn resolver() -> StyleResolver {
        StyleResolver::new(Theme::light()).with_platform(Platform::Other)
    }

    #[test]
    fn defaults_resolve_to_medium_primary() {
        let r = resolver();
        let style = r.resolve(&ButtonConfiguration::new("OK"));
        let theme = Theme::light();

        assert_eq!(style.container.background_color, theme.palette.primary);
        assert_eq!(style.container.flex_direction, FlexDirection::Row);
        assert_eq!(style.container.align_self, Alignment::Center);
        assert_eq!(style.container.min_height, Some(theme.sizes.medium.min_height));
        assert_eq!(style.container.border_radius.max(), theme.shape.corner_radius);
        assert_eq!(style.label.color, theme.palette.on_filled);
        assert_eq!(style.label.font_size, theme.sizes.medium.font_size);
        assert_eq!(style.label.text_overflow, TextOverflow::EllipsisTail);
        assert_eq!(style.loading_indicator_color, theme.palette.on_filled);
    }

    #[test]
    fn layers_come_in_order() {
        let layers = resolver().container_layers(&ButtonConfiguration::new("OK"));
        let order: Vec<_> = layers.iter().map(|(layer, _)| *layer).collect();
        assert_eq!(order, StyleLayer::ORDER.to_vec());

        let label: Vec<_> = resolver()
            .label_layers(&ButtonConfiguration::new("OK"))
            .into_iter()
            .map(|(layer, _)| layer)
            .collect();
        assert!(label.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ghost_never_has_shadow() {
        let r = resolver();
        let style = r.resolve_container(&ButtonConfiguration::new("x").with_variant(ButtonVariant::Ghost));
        assert_eq!(style.shadow, ShadowProfile::None);
        assert!(!style.has_border());
    }

    #[test]
    fn shadow_follows_platform() {
        let config = ButtonConfiguration::new("x");
        let android = resolver().with_platform(Platform::Android).resolve_container(&config);
        assert_eq!(android.shadow.elevation(), Some(5.0));

        let ios = resolver().with_platform(Platform::Ios).resolve_container(&config);
        assert!(ios.shadow.drop_shadow().is_some());
    }

    #[test]
    fn explicit_radius_replaces_default() {
        let style = resolver().resolve_container(&ButtonConfiguration::new("x").with_rounded(3.0));
        assert_eq!(style.border_radius.max(), 3.0);
    }

    #[test]
    fn full_width_stretches() {
        let style = resolver().resolve_container(&ButtonConfiguration::new("x").with_full_width(true));
        assert_eq!(style.align_self, Alignment::Stretch);
    }

    #[test]
    fn caller_patch_wins_over_everything() {
        let config = ButtonConfiguration::new("x")
            .with_disabled(true)
            .with_background_color(Color::WHITE)
            .with_container_style(Style::new().background_color(Color::BLACK).opacity(0.3));

        let style = resolver().resolve_container(&config);
        assert_eq!(style.background_color, Color::BLACK);
        assert_eq!(style.opacity, 0.3);
    }

    #[test]
    fn dark_theme_changes_fills() {
        let style = StyleResolver::new(Theme::dark())
            .with_platform(Platform::Other)
            .resolve_container(&ButtonConfiguration::new("x").with_variant(ButtonVariant::Danger));
        assert_eq!(style.background_color, Theme::dark().palette.danger);
    }
}
