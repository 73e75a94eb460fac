//! Easing curves for tweens.
//!
//! A curve takes normalized time in `0.0..=1.0` and returns normalized
//! progress. Every curve here maps 0 to 0 and 1 to 1, so a tween always
//! starts at its `from` value and lands exactly on its `to` value.

use std::f32::consts::PI;

use serde::Deserialize;

/// The curve a tween follows.
///
/// Written in kebab case in configuration files (`"ease-in-out"`,
/// `"ease-out-cubic"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Quadratic, slow start.
    EaseIn,
    /// Quadratic, slow finish.
    EaseOut,
    /// Quadratic, slow at both ends. The press animation's default.
    EaseInOut,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    /// Half a cosine period, the gentlest of the in-out curves.
    EaseInOutSine,
}

/// Map normalized time to normalized progress along `easing`.
///
/// Input outside `0.0..=1.0` is clamped.
///
/// ```
/// use tactile::animation::{ease, Easing};
///
/// // Halfway through an in-out curve is exactly halfway there.
/// assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5);
/// // A slow start lags behind linear time.
/// assert!(ease(Easing::EaseInCubic, 0.3) < 0.3);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => t * (2.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseInCubic => t.powi(3),
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t.powi(3)
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
        Easing::EaseInOutSine => (1.0 - (PI * t).cos()) / 2.0,
    }
}

/// The value between `start` and `end` after normalized time `t`.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}
