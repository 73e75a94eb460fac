//! Loading themes from TOML.
//!
//! A theme file starts from a built-in theme (`mode`, default `light`) and
//! overrides only the keys it names:
//!
//! ```toml
//! mode = "dark"
//!
//! [palette]
//! accent = "#5E5CE6"
//!
//! [sizes.small]
//! min_height = 30
//!
//! [shape]
//! corner_radius = 6
//! ```

use std::path::Path;

use serde::Deserialize;
use tactile_core::Color;
use tactile_core::logging::targets;

use super::{SizeMetrics, Theme, ThemeMode};
use crate::{Error, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    mode: Option<ThemeMode>,
    palette: PaletteFile,
    sizes: SizesFile,
    shape: ShapeFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PaletteFile {
    accent: Option<String>,
    primary: Option<String>,
    secondary: Option<String>,
    danger: Option<String>,
    success: Option<String>,
    on_filled: Option<String>,
    disabled_background: Option<String>,
    disabled_border: Option<String>,
    disabled_text: Option<String>,
    shadow: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SizesFile {
    small: SizeFile,
    medium: SizeFile,
    large: SizeFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SizeFile {
    padding_vertical: Option<f32>,
    padding_horizontal: Option<f32>,
    min_height: Option<f32>,
    min_width: Option<f32>,
    font_size: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ShapeFile {
    corner_radius: Option<f32>,
    pill_radius: Option<f32>,
    outline_border_width: Option<f32>,
    disabled_opacity: Option<f32>,
}

impl SizeFile {
    fn apply(&self, metrics: &mut SizeMetrics) {
        macro_rules! apply_if_some {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = self.$field {
                        metrics.$field = value;
                    }
                )+
            };
        }

        apply_if_some!(padding_vertical, padding_horizontal, min_height, min_width, font_size);
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color> {
    Color::from_hex(value).ok_or_else(|| Error::invalid_color(field, value))
}

impl ThemeFile {
    fn into_theme(self) -> Result<Theme> {
        let mut theme = Theme::for_mode(self.mode.unwrap_or_default());

        macro_rules! apply_colors {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = self.palette.$field.as_deref() {
                        theme.palette.$field =
                            parse_color(concat!("palette.", stringify!($field)), value)?;
                    }
                )+
            };
        }

        apply_colors!(
            accent,
            primary,
            secondary,
            danger,
            success,
            on_filled,
            disabled_background,
            disabled_border,
            disabled_text,
            shadow,
        );

        self.sizes.small.apply(&mut theme.sizes.small);
        self.sizes.medium.apply(&mut theme.sizes.medium);
        self.sizes.large.apply(&mut theme.sizes.large);

        macro_rules! apply_shape {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = self.shape.$field {
                        theme.shape.$field = value;
                    }
                )+
            };
        }

        apply_shape!(corner_radius, pill_radius, outline_border_width, disabled_opacity);

        Ok(theme)
    }
}

impl Theme {
    /// Parse a theme from TOML text.
    ///
    /// Keys that are absent keep the value from the built-in theme selected
    /// by `mode`.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(source)?;
        let theme = file.into_theme()?;

        if !theme.sizes.is_strictly_increasing() {
            tracing::warn!(
                target: targets::THEME,
                "theme size tiers do not grow strictly from small to large"
            );
        }
        let largest = theme.sizes.large.min_height;
        if theme.shape.pill_radius < largest / 2.0 {
            tracing::warn!(
                target: targets::THEME,
                pill_radius = theme.shape.pill_radius,
                "pill radius is smaller than half the large minimum height, pills will use the larger value"
            );
        }

        Ok(theme)
    }

    /// Load a theme from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::THEME, "Loading theme: {}", path.display());
        Self::from_toml_str(&source)
    }
}
