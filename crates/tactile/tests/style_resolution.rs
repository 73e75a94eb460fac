//! Integration tests for layered button style resolution.

use tactile::prelude::*;

fn resolver() -> StyleResolver {
    StyleResolver::new(Theme::light()).with_platform(Platform::Ios)
}

/// Every combination of variant, size and the boolean flags that feed the
/// disabled and shadow layers.
fn all_configs() -> Vec<ButtonConfiguration> {
    let mut configs = Vec::new();
    for variant in ButtonVariant::ALL {
        for size in ButtonSize::ALL {
            for disabled in [false, true] {
                for loading in [false, true] {
                    for shadow_disabled in [false, true] {
                        configs.push(
                            ButtonConfiguration::new("Label")
                                .with_variant(variant)
                                .with_size(size)
                                .with_disabled(disabled)
                                .with_loading(loading)
                                .with_shadow_disabled(shadow_disabled),
                        );
                    }
                }
            }
        }
    }
    configs
}

#[test]
fn disabled_or_loading_uses_disabled_colors() {
    let r = resolver();
    let palette = Theme::light().palette;

    for config in all_configs().into_iter().filter(|c| c.disabled || c.loading) {
        let style = r.resolve_container(&config);
        assert_eq!(style.background_color, palette.disabled_background, "{config:?}");
        assert_eq!(style.border_color, palette.disabled_border, "{config:?}");

        let label = r.resolve_label(&config);
        assert_eq!(label.color, palette.disabled_text, "{config:?}");
    }
}

#[test]
fn explicit_overrides_beat_disabled_layer() {
    let r = resolver();
    let fill = Color::from_hex("#FF00FF").unwrap();
    let border = Color::from_hex("#00FF00").unwrap();
    let text = Color::from_hex("#123456").unwrap();

    for variant in ButtonVariant::ALL {
        let config = ButtonConfiguration::new("Forced")
            .with_variant(variant)
            .with_disabled(true)
            .with_background_color(fill)
            .with_border_color(border)
            .with_text_color(text);

        let style = r.resolve(&config);
        assert_eq!(style.container.background_color, fill);
        assert_eq!(style.container.border_color, border);
        assert_eq!(style.label.color, text);
    }
}

#[test]
fn shadow_present_unless_ghost_or_disabled_shadow() {
    let r = resolver();

    for config in all_configs() {
        let style = r.resolve_container(&config);
        let expect_shadow = config.variant != ButtonVariant::Ghost && !config.shadow_disabled;
        assert_eq!(style.has_shadow(), expect_shadow, "{config:?}");
    }
}

#[test]
fn shadow_profile_per_platform() {
    let config = ButtonConfiguration::new("Raised");
    for platform in [Platform::Ios, Platform::Android, Platform::Other] {
        let style = StyleResolver::new(Theme::light())
            .with_platform(FixedPlatform(platform))
            .resolve_container(&config);
        assert_eq!(style.shadow, platform.shadow_profile(Theme::light().palette.shadow));
    }
}

#[test]
fn pill_rounding_is_at_least_half_min_height() {
    let r = resolver();
    for config in all_configs() {
        let style = r.resolve_container(&config.with_rounded(true));
        let min_height = style.min_height.expect("buttons always have a minimum height");
        assert!(style.border_radius.min() >= min_height / 2.0);
        assert!(style.is_pill());
    }
}

#[test]
fn small_theme_pill_radius_still_makes_a_pill() {
    let theme = Theme::from_toml_str("[shape]\npill_radius = 10.0\n").unwrap();
    let r = StyleResolver::new(theme).with_platform(Platform::Other);

    for size in ButtonSize::ALL {
        let config = ButtonConfiguration::new("x").with_size(size).with_rounded(true);
        let style = r.resolve_container(&config);
        let min_height = style.min_height.expect("buttons always have a minimum height");
        assert!(
            style.border_radius.min() >= min_height / 2.0,
            "{size:?}: radius {:?} below half of {min_height}",
            style.border_radius
        );
        assert!(style.is_pill());
    }
}

#[test]
fn explicit_radius_is_exact() {
    let r = resolver();
    for radius in [0.0, 3.5, 12.0, 40.0] {
        for config in all_configs() {
            let style = r.resolve_container(&config.with_rounded(radius));
            assert_eq!(style.border_radius, CornerRadii::uniform(radius));
        }
    }
}

#[test]
fn default_rounding_is_theme_radius() {
    let r = resolver();
    for config in all_configs() {
        let style = r.resolve_container(&config.with_rounded(false));
        assert_eq!(style.border_radius, CornerRadii::uniform(8.0));
    }
}

#[test]
fn size_tiers_increase() {
    let r = resolver();
    let metrics: Vec<_> = ButtonSize::ALL
        .iter()
        .map(|&size| {
            let config = ButtonConfiguration::new("x").with_size(size);
            (r.resolve_container(&config), r.resolve_label(&config))
        })
        .collect();

    for pair in metrics.windows(2) {
        let (small_box, small_text) = &pair[0];
        let (large_box, large_text) = &pair[1];
        assert!(small_box.min_height < large_box.min_height);
        assert!(small_box.padding.horizontal() < large_box.padding.horizontal());
        assert!(small_text.font_size < large_text.font_size);
    }
}

#[test]
fn outline_has_accent_border() {
    let r = resolver();
    let theme = Theme::light();
    let style = r.resolve_container(&ButtonConfiguration::new("x").with_variant(ButtonVariant::Outline));

    assert_eq!(style.background_color, Color::TRANSPARENT);
    assert_eq!(style.border_width, theme.shape.outline_border_width);
    assert_eq!(style.border_color, theme.palette.accent);
}

#[test]
fn border_style_always_applied() {
    let r = resolver();
    let dashed = ButtonConfiguration::new("x").with_border_style(BorderStyle::Dashed);
    assert_eq!(r.resolve_container(&dashed).border_style, BorderStyle::Dashed);

    let layers = r.container_layers(&ButtonConfiguration::new("x"));
    let (_, overrides) = layers
        .iter()
        .find(|(layer, _)| *layer == StyleLayer::Overrides)
        .unwrap();
    assert_eq!(overrides.border_style.as_set(), Some(&BorderStyle::Solid));
}

#[test]
fn uppercase_label_text() {
    let cases = ["", "save", "SAVE", "Mixed Case 123", "ß", "ÉCOLE", "naïve"];
    for label in cases {
        let upper = ButtonConfiguration::new(label).with_uppercase(true);
        assert_eq!(tactile::button::display_label(&upper), label.to_uppercase());

        let plain = ButtonConfiguration::new(label);
        assert_eq!(tactile::button::display_label(&plain), label);
    }
}

#[test]
fn loading_indicator_color() {
    let r = resolver();
    let theme = Theme::light();
    let override_color = Color::from_hex("#ABCDEF").unwrap();

    let outline = ButtonConfiguration::new("x").with_variant(ButtonVariant::Outline);
    assert_eq!(r.loading_indicator_color(&outline), theme.palette.accent);

    let primary = ButtonConfiguration::new("x").with_variant(ButtonVariant::Primary);
    assert_eq!(r.loading_indicator_color(&primary), Color::WHITE);

    for variant in ButtonVariant::ALL {
        let config = ButtonConfiguration::new("x")
            .with_variant(variant)
            .with_loading_indicator_color(override_color);
        assert_eq!(r.loading_indicator_color(&config), override_color);
    }
}

#[test]
fn resolution_is_idempotent() {
    let r = resolver();
    for config in all_configs() {
        let config = config
            .with_rounded(true)
            .with_full_width(true)
            .with_label_style(Style::new().letter_spacing(0.5));
        assert_eq!(r.resolve(&config), r.resolve(&config));
    }
}

#[test]
fn caller_patches_apply_last() {
    let r = resolver();
    let config = ButtonConfiguration::new("x")
        .with_variant(ButtonVariant::Outline)
        .with_border_width(4.0)
        .with_container_style(Style::new().border_width(2.0).width(200.0))
        .with_label_style(Style::new().font_size(30.0).max_lines(2));

    let style = r.resolve(&config);
    assert_eq!(style.container.border_width, 2.0);
    assert_eq!(style.container.width, Some(200.0));
    assert_eq!(style.label.font_size, 30.0);
    assert_eq!(style.label.max_lines, Some(2));
}

#[test]
fn theme_from_toml_flows_into_resolution() {
    let theme = Theme::from_toml_str(
        r##"
        mode = "dark"

        [palette]
        primary = "#112233"

        [shape]
        corner_radius = 4.0
        "##,
    )
    .unwrap();

    let style = StyleResolver::new(theme)
        .with_platform(Platform::Other)
        .resolve_container(&ButtonConfiguration::new("x"));
    assert_eq!(style.background_color, Color::from_hex("#112233").unwrap());
    assert_eq!(style.border_radius, CornerRadii::uniform(4.0));
}
