//! The press-feedback animation controller.
//!
//! Pressing shrinks the button towards its configured scale; releasing
//! returns it to full size. Each transition starts from the live scale, so
//! releasing halfway through the press-in animates back from wherever the
//! shrink had reached.

use std::time::Duration;

use serde::Deserialize;
use tactile_core::logging::targets;

use super::easing::Easing;
use super::tween::{AnimatedScale, AnimationState, TweenHandle, TweenRequest, Tweener};

/// Where the press animation is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PressPhase {
    /// Full size, nothing running.
    #[default]
    Rest,
    /// Shrinking towards the press scale.
    Pressing,
    /// Held at the press scale.
    Pressed,
    /// Growing back to full size.
    Releasing,
}

impl PressPhase {
    /// Whether the pointer is considered down in this phase.
    pub fn is_held(self) -> bool {
        matches!(self, PressPhase::Pressing | PressPhase::Pressed)
    }
}

/// Durations and curve for the press animation.
///
/// Deserializes from configuration with every key optional:
///
/// ```toml
/// press_in_ms = 80
/// release_ms = 240
/// easing = "ease-out-cubic"
/// prefer_compositor = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PressTiming {
    /// Press-in duration in milliseconds.
    pub press_in_ms: u64,
    /// Release duration in milliseconds.
    pub release_ms: u64,
    /// Easing for both directions.
    pub easing: Easing,
    /// Whether tweens ask to run on the compositor.
    pub prefer_compositor: bool,
}

impl Default for PressTiming {
    fn default() -> Self {
        Self {
            press_in_ms: 100,
            release_ms: 200,
            easing: Easing::EaseInOut,
            prefer_compositor: true,
        }
    }
}

impl PressTiming {
    /// Create a timing from explicit durations.
    pub fn new(press_in: Duration, release: Duration) -> Self {
        Self {
            press_in_ms: press_in.as_millis() as u64,
            release_ms: release.as_millis() as u64,
            ..Self::default()
        }
    }

    /// Use a different easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The press-in duration.
    pub fn press_in(&self) -> Duration {
        Duration::from_millis(self.press_in_ms)
    }

    /// The release duration.
    pub fn release(&self) -> Duration {
        Duration::from_millis(self.release_ms)
    }

    /// Make press-in strictly shorter than release.
    ///
    /// Inverted durations are swapped. Equal durations keep the release and
    /// halve the press-in, with a release of at least 1 ms.
    pub fn normalized(self) -> Self {
        let (press_in_ms, release_ms) = match self.press_in_ms.cmp(&self.release_ms) {
            std::cmp::Ordering::Less => return self,
            std::cmp::Ordering::Greater => {
                tracing::debug!(
                    target: targets::ANIMATION,
                    press_in_ms = self.press_in_ms,
                    release_ms = self.release_ms,
                    "press-in longer than release, swapping durations"
                );
                (self.release_ms, self.press_in_ms)
            }
            std::cmp::Ordering::Equal => {
                let release_ms = self.release_ms.max(1);
                tracing::debug!(
                    target: targets::ANIMATION,
                    release_ms,
                    "press-in equal to release, halving press-in"
                );
                (release_ms / 2, release_ms)
            }
        };

        Self {
            press_in_ms,
            release_ms,
            ..self
        }
    }
}

/// The configuration flags that decide whether press feedback runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressGate {
    pub animation_enabled: bool,
    pub disabled: bool,
    pub loading: bool,
}

/// A standalone controller animates until told otherwise.
impl Default for PressGate {
    fn default() -> Self {
        Self {
            animation_enabled: true,
            disabled: false,
            loading: false,
        }
    }
}

impl PressGate {
    /// Press feedback runs only for enabled animation on an interactive button.
    pub fn allows_animation(&self) -> bool {
        self.animation_enabled && !self.disabled && !self.loading
    }
}

/// Drives the button's scale in response to pointer down and up.
///
/// The controller owns at most one tween at a time. Starting a new
/// transition cancels the previous tween first, so two tweens never write
/// the scale cell concurrently.
pub struct PressAnimationController<T: Tweener> {
    tweener: T,
    state: AnimatedScale,
    phase: PressPhase,
    handle: Option<Box<dyn TweenHandle>>,
    active: Option<TweenRequest>,
    gate: PressGate,
    press_scale: f32,
    timing: PressTiming,
}

impl<T: Tweener> PressAnimationController<T> {
    /// Create a controller at rest with the default timing and a press
    /// scale of 0.95.
    pub fn new(tweener: T) -> Self {
        Self::with_timing(tweener, PressTiming::default())
    }

    /// Create a controller with custom timing.
    pub fn with_timing(tweener: T, timing: PressTiming) -> Self {
        Self {
            tweener,
            state: AnimatedScale::new(1.0),
            phase: PressPhase::Rest,
            handle: None,
            active: None,
            gate: PressGate::default(),
            press_scale: 0.95,
            timing: timing.normalized(),
        }
    }

    /// Update the gate and press scale.
    ///
    /// If the new gate forbids animation while the button is away from
    /// rest, the running tween is cancelled and the scale snaps back to
    /// 1.0.
    pub fn configure(&mut self, gate: PressGate, press_scale: f32) {
        if press_scale != self.press_scale && !(press_scale > 0.0 && press_scale <= 1.0) {
            tracing::debug!(
                target: targets::ANIMATION,
                press_scale,
                "press scale outside (0, 1], passing through"
            );
        }
        self.press_scale = press_scale;
        self.gate = gate;

        if !gate.allows_animation() && (self.phase != PressPhase::Rest || self.handle.is_some()) {
            tracing::trace!(
                target: targets::ANIMATION,
                ?gate,
                "animation gated off, returning to rest"
            );
            self.reset_to_rest();
        }
    }

    /// The current gate.
    pub fn gate(&self) -> PressGate {
        self.gate
    }

    /// The configured press scale.
    pub fn press_scale(&self) -> f32 {
        self.press_scale
    }

    /// The configured timing.
    pub fn timing(&self) -> PressTiming {
        self.timing
    }

    /// Handle a pointer going down. Returns `true` if a press-in started.
    pub fn pointer_down(&mut self) -> bool {
        self.sync_phase();
        if !self.gate.allows_animation() {
            tracing::trace!(target: targets::ANIMATION, "pointer down ignored, animation gated");
            return false;
        }

        match self.phase {
            PressPhase::Rest | PressPhase::Releasing => {
                self.transition(PressPhase::Pressing, self.press_scale, self.timing.press_in());
                true
            }
            PressPhase::Pressing | PressPhase::Pressed => false,
        }
    }

    /// Handle a pointer going up. Returns `true` if a release started.
    pub fn pointer_up(&mut self) -> bool {
        self.sync_phase();
        if !self.gate.allows_animation() {
            return false;
        }

        if self.phase.is_held() {
            self.transition(PressPhase::Releasing, 1.0, self.timing.release());
            true
        } else {
            false
        }
    }

    /// Handle a cancelled press (pointer left, gesture stolen). Animates
    /// back exactly like a release.
    pub fn pointer_cancel(&mut self) -> bool {
        self.pointer_up()
    }

    /// The current phase, accounting for tweens that finished since the
    /// last pointer event.
    pub fn phase(&self) -> PressPhase {
        let finished = self.handle.as_ref().is_some_and(|h| h.is_finished());
        match (self.phase, finished) {
            (PressPhase::Pressing, true) => PressPhase::Pressed,
            (PressPhase::Releasing, true) => PressPhase::Rest,
            (phase, _) => phase,
        }
    }

    /// The scale the renderer should apply right now.
    pub fn current_scale(&self) -> f32 {
        self.state.get()
    }

    /// Snapshot of the animation output.
    pub fn state(&self) -> AnimationState {
        self.state.snapshot()
    }

    /// A shared handle to the scale cell, for renderers that poll it.
    pub fn animated_scale(&self) -> AnimatedScale {
        self.state.clone()
    }

    /// The tween currently in flight, if any.
    pub fn active_tween(&self) -> Option<TweenRequest> {
        match &self.handle {
            Some(handle) if !handle.is_finished() => self.active,
            _ => None,
        }
    }

    /// Cancel any running tween and return to rest at full scale.
    pub fn dispose(&mut self) {
        self.reset_to_rest();
    }

    fn sync_phase(&mut self) {
        let phase = self.phase();
        if phase != self.phase {
            tracing::trace!(target: targets::ANIMATION, from = ?self.phase, to = ?phase, "tween completed");
            self.phase = phase;
            self.handle = None;
            self.active = None;
        }
    }

    fn transition(&mut self, phase: PressPhase, to: f32, duration: Duration) {
        self.cancel_tween();

        let request = TweenRequest {
            from: self.state.get(),
            to,
            duration,
            easing: self.timing.easing,
            prefer_compositor: self.timing.prefer_compositor,
        };

        tracing::trace!(
            target: targets::ANIMATION,
            from = ?self.phase,
            to = ?phase,
            scale_from = request.from,
            scale_to = request.to,
            "press transition"
        );

        self.handle = Some(self.tweener.start_tween(self.state.clone(), request));
        self.active = Some(request);
        self.phase = phase;
    }

    fn cancel_tween(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
        }
        self.active = None;
    }

    fn reset_to_rest(&mut self) {
        self.cancel_tween();
        self.state.reset(1.0);
        self.phase = PressPhase::Rest;
    }
}

impl<T: Tweener> Drop for PressAnimationController<T> {
    fn drop(&mut self) {
        self.cancel_tween();
    }
}

impl<T: Tweener> std::fmt::Debug for PressAnimationController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PressAnimationController")
            .field("phase", &self.phase)
            .field("state", &self.state.snapshot())
            .field("gate", &self.gate)
            .field("press_scale", &self.press_scale)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FrameTweener;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn controller() -> (FrameTweener, PressAnimationController<FrameTweener>) {
        let tweener = FrameTweener::new();
        let controller = PressAnimationController::new(tweener.clone());
        (tweener, controller)
    }

    #[test]
    fn press_and_release_cycle() {
        let (clock, mut c) = controller();
        assert_eq!(c.phase(), PressPhase::Rest);

        assert!(c.pointer_down());
        assert_eq!(c.phase(), PressPhase::Pressing);
        let tween = c.active_tween().unwrap();
        assert_eq!(tween.to, 0.95);
        assert_eq!(tween.duration, ms(100));
        assert_eq!(tween.easing, Easing::EaseInOut);
        assert!(tween.prefer_compositor);

        clock.advance(ms(100));
        assert_eq!(c.phase(), PressPhase::Pressed);
        assert!((c.current_scale() - 0.95).abs() < 1e-6);

        assert!(c.pointer_up());
        assert_eq!(c.phase(), PressPhase::Releasing);
        assert_eq!(c.active_tween().unwrap().duration, ms(200));

        clock.advance(ms(200));
        assert_eq!(c.phase(), PressPhase::Rest);
        assert_eq!(c.current_scale(), 1.0);
        assert!(!c.state().is_animating);
    }

    #[test]
    fn repeated_pointer_down_is_ignored() {
        let (_clock, mut c) = controller();
        assert!(c.pointer_down());
        assert!(!c.pointer_down());
        assert_eq!(c.phase(), PressPhase::Pressing);
    }

    #[test]
    fn pointer_up_at_rest_is_ignored() {
        let (_clock, mut c) = controller();
        assert!(!c.pointer_up());
        assert!(c.active_tween().is_none());
    }

    #[test]
    fn press_during_release_restarts_from_live_value() {
        let (clock, mut c) = controller();
        c.pointer_down();
        clock.advance(ms(100));
        c.pointer_up();
        clock.advance(ms(100));
        let midway = c.current_scale();
        assert!(midway > 0.95 && midway < 1.0);

        assert!(c.pointer_down());
        assert_eq!(c.phase(), PressPhase::Pressing);
        assert_eq!(c.active_tween().unwrap().from, midway);
    }

    #[test]
    fn gated_controller_stays_at_rest() {
        let (_clock, mut c) = controller();
        c.configure(
            PressGate {
                disabled: true,
                ..PressGate::default()
            },
            0.9,
        );
        assert!(!c.pointer_down());
        assert_eq!(c.phase(), PressPhase::Rest);
        assert_eq!(c.current_scale(), 1.0);
    }

    #[test]
    fn gating_mid_press_resets() {
        let (clock, mut c) = controller();
        c.pointer_down();
        clock.advance(ms(50));
        assert!(c.current_scale() < 1.0);

        c.configure(
            PressGate {
                loading: true,
                ..PressGate::default()
            },
            0.9,
        );
        assert_eq!(c.phase(), PressPhase::Rest);
        assert_eq!(c.current_scale(), 1.0);
        assert_eq!(clock.active_count(), 0);
    }

    #[test]
    fn dispose_cancels_in_flight_tween() {
        let (clock, mut c) = controller();
        c.pointer_down();
        c.dispose();
        assert_eq!(clock.active_count(), 0);
        assert_eq!(c.phase(), PressPhase::Rest);
    }

    #[test]
    fn drop_cancels_in_flight_tween() {
        let (clock, mut c) = controller();
        let scale = c.animated_scale();
        c.pointer_down();
        drop(c);
        clock.advance(ms(100));
        assert_eq!(clock.active_count(), 0);
        assert_eq!(scale.get(), 1.0);
        assert!(!scale.snapshot().is_animating);
    }

    #[test]
    fn custom_press_scale_passes_through() {
        let (clock, mut c) = controller();
        c.configure(PressGate::default(), 1.2);
        c.pointer_down();
        clock.advance(ms(100));
        assert!((c.current_scale() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn timing_swaps_inverted_durations() {
        let timing = PressTiming::new(ms(300), ms(50)).normalized();
        assert_eq!(timing.press_in(), ms(50));
        assert_eq!(timing.release(), ms(300));

        let default = PressTiming::default();
        assert!(default.press_in() < default.release());
        assert_eq!(default.normalized(), default);
    }

    #[test]
    fn timing_halves_equal_durations() {
        let timing = PressTiming::new(ms(150), ms(150)).normalized();
        assert_eq!(timing.press_in(), ms(75));
        assert_eq!(timing.release(), ms(150));

        for both in [0, 1] {
            let timing = PressTiming::new(ms(both), ms(both)).normalized();
            assert!(timing.press_in() < timing.release(), "{both} ms");
        }
    }
}
