//! The button control.

use tactile_core::Signal;
use tactile_core::logging::{span_names, targets};

use super::events::PointerEvent;
use crate::animation::{PressAnimationController, PressPhase, PressTiming, Tweener};
use crate::button::{ButtonConfiguration, ButtonPresentation, StyleResolver};

/// A pressable button.
///
/// Owns its configuration, a style resolver and a press animation
/// controller. Pointer input comes in through
/// [`handle_pointer`](Self::handle_pointer); the host draws whatever
/// [`present`](Self::present) returns.
///
/// # Signals
///
/// - `activated`: a tap completed on an interactive button
/// - `pressed`: the pointer went down on an interactive button
/// - `released`: a press ended, by lifting or aborting
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use tactile::prelude::*;
///
/// let mut button = PressableButton::new(ButtonConfiguration::new("Go"), FrameTweener::new());
///
/// let taps = Arc::new(AtomicUsize::new(0));
/// let counter = taps.clone();
/// button.activated.connect(move |_| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// button.handle_pointer(PointerEvent::Down);
/// button.handle_pointer(PointerEvent::Up);
/// button.handle_pointer(PointerEvent::Tap);
/// assert_eq!(taps.load(Ordering::SeqCst), 1);
/// ```
pub struct PressableButton<T: Tweener> {
    config: ButtonConfiguration,
    resolver: StyleResolver,
    animation: PressAnimationController<T>,
    held: bool,

    /// Emitted once per completed tap while interactive.
    pub activated: Signal<()>,
    /// Emitted when a press starts.
    pub pressed: Signal<()>,
    /// Emitted when a press ends.
    pub released: Signal<()>,
}

impl<T: Tweener> PressableButton<T> {
    /// Create a button with the default resolver and press timing.
    pub fn new(config: ButtonConfiguration, tweener: T) -> Self {
        Self::with_parts(config, StyleResolver::default(), tweener, PressTiming::default())
    }

    /// Create a button with an explicit resolver and press timing.
    pub fn with_parts(
        config: ButtonConfiguration,
        resolver: StyleResolver,
        tweener: T,
        timing: PressTiming,
    ) -> Self {
        let mut animation = PressAnimationController::with_timing(tweener, timing);
        animation.configure(config.press_gate(), config.animation_scale);

        Self {
            config,
            resolver,
            animation,
            held: false,
            activated: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
        }
    }

    pub fn configuration(&self) -> &ButtonConfiguration {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// A button that stops being interactive mid-press drops the press and
    /// snaps back to full size.
    pub fn set_configuration(&mut self, config: ButtonConfiguration) {
        self.animation.configure(config.press_gate(), config.animation_scale);
        if self.held && !config.is_interactive() {
            self.held = false;
            self.released.emit(());
        }
        self.config = config;
    }

    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    /// Swap the resolver, for example after a theme change.
    pub fn set_resolver(&mut self, resolver: StyleResolver) {
        self.resolver = resolver;
    }

    /// Whether taps currently activate the button.
    pub fn is_interactive(&self) -> bool {
        self.config.is_interactive()
    }

    /// Whether a press is in progress.
    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn animation(&self) -> &PressAnimationController<T> {
        &self.animation
    }

    /// The press animation's current phase.
    pub fn press_phase(&self) -> PressPhase {
        self.animation.phase()
    }

    /// React to a pointer event. Returns `true` if the event was consumed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let _span = tracing::trace_span!(target: targets::BUTTON, span_names::POINTER, ?event).entered();

        match event {
            PointerEvent::Down => {
                if !self.config.is_interactive() {
                    tracing::trace!(target: targets::BUTTON, "press ignored, button not interactive");
                    return false;
                }
                self.animation.pointer_down();
                if !self.held {
                    self.held = true;
                    self.pressed.emit(());
                }
                true
            }
            PointerEvent::Up | PointerEvent::Cancel | PointerEvent::Leave => {
                if event.is_abort() {
                    self.animation.pointer_cancel();
                } else {
                    self.animation.pointer_up();
                }
                if self.held {
                    self.held = false;
                    self.released.emit(());
                    true
                } else {
                    false
                }
            }
            PointerEvent::Tap => {
                if !self.config.is_interactive() {
                    tracing::debug!(
                        target: targets::BUTTON,
                        disabled = self.config.disabled,
                        loading = self.config.loading,
                        "activation suppressed"
                    );
                    return false;
                }
                self.activated.emit(());
                true
            }
        }
    }

    /// Resolve styles and assemble everything the host needs to draw.
    pub fn present(&self) -> ButtonPresentation {
        ButtonPresentation::new(
            &self.config,
            self.resolver.resolve(&self.config),
            self.animation.current_scale(),
        )
    }

    /// Stop any running animation and drop every signal connection.
    pub fn dispose(&mut self) {
        self.animation.dispose();
        self.held = false;
        self.activated.disconnect_all();
        self.pressed.disconnect_all();
        self.released.disconnect_all();
    }
}

impl<T: Tweener> std::fmt::Debug for PressableButton<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PressableButton")
            .field("label", &self.config.label)
            .field("variant", &self.config.variant)
            .field("held", &self.held)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}
