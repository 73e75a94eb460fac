//! Design tokens with built-in light and dark themes.

mod builtin;
mod loader;
mod palette;
mod tokens;

pub use builtin::{Theme, ThemeMode};
pub use palette::ColorPalette;
pub use tokens::{ShapeTokens, SizeMetrics, SizeScale};
