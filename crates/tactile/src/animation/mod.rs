//! Press-feedback animation.
//!
//! - [`PressAnimationController`]: the Rest / Pressing / Pressed / Releasing
//!   state machine that decides when to shrink and when to grow back.
//! - [`Tweener`] and [`TweenHandle`]: the seam to whatever drives values over
//!   time on the host (a frame clock, a compositor).
//! - [`FrameTweener`]: a tweener advanced by hand.
//! - [`Easing`]: the curves a tween can follow.

mod easing;
mod press;
mod tween;

pub use easing::{Easing, ease, lerp_eased};
pub use press::{PressAnimationController, PressGate, PressPhase, PressTiming};
pub use tween::{
    AnimatedScale, AnimationState, FrameTweenHandle, FrameTweener, TweenHandle, TweenRequest,
    Tweener,
};
