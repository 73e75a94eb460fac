//! Tactile - a themeable pressable button control.
//!
//! This is the main crate. It re-exports the core and style crates and adds
//! the button itself:
//!
//! - [`button`]: configuration, layered style resolution and the
//!   render-ready [`ButtonPresentation`](button::ButtonPresentation)
//! - [`animation`]: the press-feedback state machine and the tween seam
//! - [`widget`]: [`PressableButton`](widget::PressableButton), which ties
//!   configuration, resolution, animation and activation together
//!
//! # Example
//!
//! ```
//! use tactile::prelude::*;
//!
//! let config = ButtonConfiguration::new("Delete")
//!     .with_variant(ButtonVariant::Danger)
//!     .with_size(ButtonSize::Small);
//!
//! let button = PressableButton::new(config, FrameTweener::new());
//! let frame = button.present();
//!
//! assert_eq!(frame.container.background_color, Theme::light().palette.danger);
//! assert_eq!(frame.content.text(), Some("Delete"));
//! assert_eq!(frame.scale, 1.0);
//! ```

pub use tactile_core::*;

pub mod animation;
pub mod button;
pub mod prelude;
pub mod widget;

/// Styling vocabulary, themes and platform shadow profiles.
pub mod style {
    pub use tactile_style::*;
}
