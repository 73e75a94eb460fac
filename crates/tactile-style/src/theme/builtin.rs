//! Built-in themes.

use serde::Deserialize;

use super::{ColorPalette, ShapeTokens, SizeScale};

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// A complete set of design tokens for pressable controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme mode.
    pub mode: ThemeMode,
    /// Color palette.
    pub palette: ColorPalette,
    /// Size tier metrics.
    pub sizes: SizeScale,
    /// Shape and state tokens.
    pub shape: ShapeTokens,
}

impl Theme {
    /// Create a light theme.
    pub fn light() -> Self {
        Self::custom(ThemeMode::Light, ColorPalette::light())
    }

    /// Create a dark theme.
    pub fn dark() -> Self {
        Self::custom(ThemeMode::Dark, ColorPalette::dark())
    }

    /// Create the built-in theme for a mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Create a custom theme from a palette, with default sizes and shape.
    pub fn custom(mode: ThemeMode, palette: ColorPalette) -> Self {
        Self {
            mode,
            palette,
            sizes: SizeScale::default(),
            shape: ShapeTokens::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
