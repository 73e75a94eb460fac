//! Core types for Tactile.
//!
//! This crate provides the foundational pieces shared by the Tactile crates:
//!
//! - **Colors**: [`Color`] with hex parsing and formatting
//! - **Shapes**: [`CornerRadii`] for rounded containers
//! - **Shadows**: [`BoxShadow`] and platform-neutral [`ShadowProfile`]s
//! - **Signals**: [`Signal`] for control output events
//! - **Logging**: `tracing` target and span name constants
//!
//! # Example
//!
//! ```
//! use tactile_core::{Color, CornerRadii, Signal};
//!
//! let accent = Color::from_hex("#007AFF").unwrap();
//! let radii = CornerRadii::uniform(8.0);
//! assert!(radii.is_uniform());
//!
//! let activated = Signal::<()>::new();
//! activated.connect(move |_| println!("accent is {}", accent));
//! activated.emit(());
//! ```

mod color;
mod geometry;
pub mod logging;
mod shadow;
pub mod signal;

pub use color::Color;
pub use geometry::CornerRadii;
pub use shadow::{BoxShadow, ShadowProfile};
pub use signal::{ConnectionId, Signal};
