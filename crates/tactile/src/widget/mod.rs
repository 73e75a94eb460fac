//! The pressable button control and its input events.

mod events;
mod pressable;

pub use events::PointerEvent;
pub use pressable::PressableButton;
