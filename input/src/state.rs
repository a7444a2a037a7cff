use derive_more::Display;

/// The states of the gesture recognizer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
pub enum GestureState {
    /// No contacts are down.
    #[default]
    Idle,
    /// One or two contacts are down, the gesture is not determined yet.
    Touching,
    /// A single contact was lifted, waiting for a possible second tap.
    Tap,
    /// The second tap's contact is down.
    DoubleTap,
    Drag,
    Pinch,
    /// A pinch ended with one contact remaining.
    EndPinch,
    /// Anomalous input was detected, waiting for all contacts to lift.
    Error,
}
