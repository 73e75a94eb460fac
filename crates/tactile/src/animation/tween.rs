//! Tween plumbing: the shared scale cell, the tween facility trait and a
//! manually clocked implementation of it.
//!
//! The press animation never interpolates values itself. It hands a
//! [`TweenRequest`] to a [`Tweener`], which drives the shared
//! [`AnimatedScale`] cell until the tween finishes or its handle is
//! cancelled. A host wires a tweener to its frame clock or compositor;
//! [`FrameTweener`] is advanced explicitly, which makes it suitable for
//! hosts with their own frame loop and for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tactile_core::logging::targets;

use super::easing::{Easing, lerp_eased};

/// A snapshot of the press animation's output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// The scale currently applied to the button container.
    pub current_scale: f32,
    /// Whether a tween is driving the scale right now.
    pub is_animating: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            current_scale: 1.0,
            is_animating: false,
        }
    }
}

/// A shared, thread-safe animation state cell.
///
/// Clones share the same cell: the controller keeps one, the tweener writes
/// through another, the renderer reads through a third.
#[derive(Debug, Clone, Default)]
pub struct AnimatedScale {
    inner: Arc<Mutex<AnimationState>>,
}

impl AnimatedScale {
    /// Create a cell at rest with the given scale.
    pub fn new(scale: f32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(AnimationState {
                current_scale: scale,
                is_animating: false,
            })),
        }
    }

    /// The current scale.
    pub fn get(&self) -> f32 {
        self.inner.lock().current_scale
    }

    /// Copy out the full state.
    pub fn snapshot(&self) -> AnimationState {
        *self.inner.lock()
    }

    /// Write a new scale value. Called by tweeners on every step.
    pub fn set(&self, scale: f32) {
        self.inner.lock().current_scale = scale;
    }

    /// Mark whether a tween is currently driving this cell.
    pub fn set_animating(&self, animating: bool) {
        self.inner.lock().is_animating = animating;
    }

    /// Jump to a value with no tween running.
    pub fn reset(&self, scale: f32) {
        let mut state = self.inner.lock();
        state.current_scale = scale;
        state.is_animating = false;
    }

    /// Check whether two handles refer to the same cell.
    pub fn ptr_eq(&self, other: &AnimatedScale) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Parameters of a single tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenRequest {
    /// Value at the start of the tween.
    pub from: f32,
    /// Value at the end of the tween.
    pub to: f32,
    /// Total time from `from` to `to`.
    pub duration: Duration,
    /// Easing curve.
    pub easing: Easing,
    /// Ask the host to run the tween off the main thread when it can.
    pub prefer_compositor: bool,
}

impl TweenRequest {
    /// The value this tween produces after `elapsed`.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        lerp_eased(self.easing, self.from, self.to, self.progress(elapsed))
    }

    /// Normalized progress after `elapsed`, in `0.0..=1.0`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// A running tween.
///
/// Cancelling leaves the target at whatever value it had reached; it never
/// jumps to the tween's end value.
pub trait TweenHandle: Send {
    /// Stop the tween where it is.
    fn cancel(&mut self);

    /// Whether the tween ran to completion. A cancelled tween is never
    /// finished.
    fn is_finished(&self) -> bool;
}

/// A facility that runs tweens against an [`AnimatedScale`] cell.
pub trait Tweener {
    /// Start driving `target` according to `request`.
    fn start_tween(&self, target: AnimatedScale, request: TweenRequest) -> Box<dyn TweenHandle>;
}

impl<T: Tweener + ?Sized> Tweener for Arc<T> {
    fn start_tween(&self, target: AnimatedScale, request: TweenRequest) -> Box<dyn TweenHandle> {
        (**self).start_tween(target, request)
    }
}

#[derive(Debug, Default)]
struct TweenControl {
    cancelled: AtomicBool,
    finished: AtomicBool,
}

#[derive(Debug)]
struct ActiveTween {
    target: AnimatedScale,
    request: TweenRequest,
    elapsed: Duration,
    control: Arc<TweenControl>,
}

/// A tweener that only moves when [`advance`](FrameTweener::advance) is
/// called.
///
/// Clones share the same set of running tweens, so a host can hand one
/// clone to a button and keep another to tick from its frame loop.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tactile::animation::{AnimatedScale, Easing, FrameTweener, TweenRequest, Tweener};
///
/// let tweener = FrameTweener::new();
/// let scale = AnimatedScale::new(1.0);
/// let handle = tweener.start_tween(
///     scale.clone(),
///     TweenRequest {
///         from: 1.0,
///         to: 0.9,
///         duration: Duration::from_millis(100),
///         easing: Easing::Linear,
///         prefer_compositor: true,
///     },
/// );
///
/// tweener.advance(Duration::from_millis(100));
/// assert!(handle.is_finished());
/// assert!((scale.get() - 0.9).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameTweener {
    tweens: Arc<Mutex<Vec<ActiveTween>>>,
}

impl FrameTweener {
    /// Create a tweener with no running tweens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move every running tween forward by `dt`.
    ///
    /// Cancelled tweens are dropped without writing their value. Their
    /// target's animating flag is cleared unless another tween still drives
    /// it. Tweens that reach their end write the end value, clear the flag
    /// and are removed.
    pub fn advance(&self, dt: Duration) {
        let mut tweens = self.tweens.lock();
        let mut abandoned = Vec::new();
        tweens.retain_mut(|tween| {
            if tween.control.cancelled.load(Ordering::Acquire) {
                abandoned.push(tween.target.clone());
                return false;
            }

            tween.elapsed += dt;
            tween.target.set(tween.request.value_at(tween.elapsed));

            if tween.request.progress(tween.elapsed) >= 1.0 {
                tween.target.set_animating(false);
                tween.control.finished.store(true, Ordering::Release);
                tracing::trace!(
                    target: targets::ANIMATION,
                    to = tween.request.to,
                    "tween finished"
                );
                false
            } else {
                true
            }
        });

        for target in abandoned {
            if !tweens.iter().any(|t| t.target.ptr_eq(&target)) {
                target.set_animating(false);
            }
        }
    }

    /// Advance far enough to finish every running tween.
    pub fn finish_all(&self) {
        let remaining = {
            let tweens = self.tweens.lock();
            tweens
                .iter()
                .filter(|t| !t.control.cancelled.load(Ordering::Acquire))
                .map(|t| t.request.duration.saturating_sub(t.elapsed))
                .max()
        };
        if let Some(remaining) = remaining {
            self.advance(remaining);
        }
    }

    /// Number of tweens that are neither finished nor cancelled.
    pub fn active_count(&self) -> usize {
        self.tweens
            .lock()
            .iter()
            .filter(|t| !t.control.cancelled.load(Ordering::Acquire))
            .count()
    }
}

impl Tweener for FrameTweener {
    fn start_tween(&self, target: AnimatedScale, request: TweenRequest) -> Box<dyn TweenHandle> {
        let control = Arc::new(TweenControl::default());
        target.set(request.from);
        target.set_animating(true);

        tracing::trace!(
            target: targets::ANIMATION,
            from = request.from,
            to = request.to,
            duration_ms = request.duration.as_millis() as u64,
            prefer_compositor = request.prefer_compositor,
            "tween started"
        );

        self.tweens.lock().push(ActiveTween {
            target,
            request,
            elapsed: Duration::ZERO,
            control: control.clone(),
        });

        Box::new(FrameTweenHandle { control })
    }
}

/// Handle to a tween running on a [`FrameTweener`].
#[derive(Debug)]
pub struct FrameTweenHandle {
    control: Arc<TweenControl>,
}

impl TweenHandle for FrameTweenHandle {
    fn cancel(&mut self) {
        if !self.control.finished.load(Ordering::Acquire) {
            self.control.cancelled.store(true, Ordering::Release);
        }
    }

    fn is_finished(&self) -> bool {
        self.control.finished.load(Ordering::Acquire)
    }
}
