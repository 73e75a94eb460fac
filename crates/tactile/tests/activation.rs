//! Integration tests for activation gating and button signals.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tactile::prelude::*;

fn count_emissions(signal: &Signal<()>) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = count.clone();
    signal.connect(move |_| {
        inner.fetch_add(1, Ordering::SeqCst);
    });
    count
}

fn tap(button: &mut PressableButton<FrameTweener>) {
    button.handle_pointer(PointerEvent::Down);
    button.handle_pointer(PointerEvent::Up);
    button.handle_pointer(PointerEvent::Tap);
}

#[test]
fn disabled_button_never_activates() {
    for loading in [false, true] {
        let config = ButtonConfiguration::new("Nope")
            .with_disabled(true)
            .with_loading(loading);
        let mut button = PressableButton::new(config, FrameTweener::new());
        let activations = count_emissions(&button.activated);

        for _ in 0..100 {
            tap(&mut button);
        }
        assert_eq!(activations.load(Ordering::SeqCst), 0);
    }
}

#[test]
fn loading_button_never_activates() {
    let config = ButtonConfiguration::new("Wait").with_loading(true);
    let mut button = PressableButton::new(config, FrameTweener::new());
    let activations = count_emissions(&button.activated);

    for _ in 0..100 {
        tap(&mut button);
    }
    assert_eq!(activations.load(Ordering::SeqCst), 0);
}

#[test]
fn each_tap_activates_exactly_once() {
    let clock = FrameTweener::new();
    let mut button = PressableButton::new(ButtonConfiguration::new("Go"), clock.clone());
    let activations = count_emissions(&button.activated);

    for n in 1..=25 {
        tap(&mut button);
        clock.finish_all();
        assert_eq!(activations.load(Ordering::SeqCst), n);
    }
}

#[test]
fn aborted_press_does_not_activate() {
    let mut button = PressableButton::new(ButtonConfiguration::new("Go"), FrameTweener::new());
    let activations = count_emissions(&button.activated);
    let released = count_emissions(&button.released);

    button.handle_pointer(PointerEvent::Down);
    button.handle_pointer(PointerEvent::Cancel);

    assert_eq!(activations.load(Ordering::SeqCst), 0);
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn re_enabling_restores_activation() {
    let mut button = PressableButton::new(
        ButtonConfiguration::new("Toggle").with_disabled(true),
        FrameTweener::new(),
    );
    let activations = count_emissions(&button.activated);

    tap(&mut button);
    assert_eq!(activations.load(Ordering::SeqCst), 0);

    button.set_configuration(ButtonConfiguration::new("Toggle"));
    tap(&mut button);
    assert_eq!(activations.load(Ordering::SeqCst), 1);
}

#[test]
fn blocked_signal_suppresses_activation() {
    let mut button = PressableButton::new(ButtonConfiguration::new("Go"), FrameTweener::new());
    let activations = count_emissions(&button.activated);

    button.activated.set_blocked(true);
    tap(&mut button);
    button.activated.set_blocked(false);
    tap(&mut button);

    assert_eq!(activations.load(Ordering::SeqCst), 1);
}

#[test]
fn accessibility_matches_configuration() {
    let button = PressableButton::new(
        ButtonConfiguration::new("Submit").with_loading(true),
        FrameTweener::new(),
    );
    let a11y = button.present().accessibility;

    assert_eq!(a11y.role, AccessibilityRole::Button);
    assert_eq!(a11y.label, "Submit");
    assert!(a11y.busy);
    assert!(a11y.disabled);
}
