//! Color palette definitions.

use tactile_core::Color;

/// The colors a pressable control draws with.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    /// Accent color: outline borders, outline/ghost text, spinner on
    /// transparent variants.
    pub accent: Color,

    // Filled variant backgrounds
    /// Primary fill.
    pub primary: Color,
    /// Secondary fill.
    pub secondary: Color,
    /// Destructive action fill.
    pub danger: Color,
    /// Confirming action fill.
    pub success: Color,
    /// Text/spinner color drawn on top of a filled background.
    pub on_filled: Color,

    // Disabled state
    /// Background of a disabled control.
    pub disabled_background: Color,
    /// Border of a disabled control.
    pub disabled_border: Color,
    /// Text of a disabled control.
    pub disabled_text: Color,

    /// Base color of drop shadows (alpha comes from the platform profile).
    pub shadow: Color,
}

impl ColorPalette {
    /// Create a light theme palette.
    pub const fn light() -> Self {
        Self {
            accent: Color::from_hex_u32(0x007AFF),

            primary: Color::from_hex_u32(0x007AFF),
            secondary: Color::from_hex_u32(0x6C757D),
            danger: Color::from_hex_u32(0xDC3545),
            success: Color::from_hex_u32(0x28A745),
            on_filled: Color::WHITE,

            disabled_background: Color::from_hex_u32(0xCCCCCC),
            disabled_border: Color::from_hex_u32(0xCCCCCC),
            disabled_text: Color::from_hex_u32(0x666666),

            shadow: Color::BLACK,
        }
    }

    /// Create a dark theme palette.
    pub const fn dark() -> Self {
        Self {
            // Slightly brighter accent for dark backgrounds
            accent: Color::from_hex_u32(0x0A84FF),

            primary: Color::from_hex_u32(0x0A84FF),
            secondary: Color::from_hex_u32(0x8E8E93),
            danger: Color::from_hex_u32(0xFF453A),
            success: Color::from_hex_u32(0x32D74B),
            on_filled: Color::WHITE,

            disabled_background: Color::from_hex_u32(0x3A3A3C),
            disabled_border: Color::from_hex_u32(0x48484A),
            disabled_text: Color::from_hex_u32(0x8E8E93),

            shadow: Color::BLACK,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::light()
    }
}
