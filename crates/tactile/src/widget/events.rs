//! Pointer input delivered to a button by its host.

/// A pointer event, already hit-tested against the button.
///
/// The host's gesture recognizer decides what counts as a tap; the button
/// only reacts to the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// A pointer went down inside the button.
    Down,
    /// The pointer was lifted.
    Up,
    /// The gesture was taken over or aborted by the host.
    Cancel,
    /// The pointer moved out of the button while held.
    Leave,
    /// A complete tap was recognized.
    Tap,
}

impl PointerEvent {
    /// Whether this event ends a press without a tap.
    pub fn is_abort(self) -> bool {
        matches!(self, PointerEvent::Cancel | PointerEvent::Leave)
    }
}
