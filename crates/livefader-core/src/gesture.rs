//! Pointer gesture input and the value-changed notification.

/// Phase of a continuous pointer gesture (drag / pan).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Pointer went down and the gesture was recognized.
    Began,
    /// Pointer moved while the gesture is active.
    Changed,
    /// Pointer was released.
    Ended,
    /// The host aborted the gesture.
    Cancelled,
}

impl GesturePhase {
    /// Whether this phase terminates the gesture.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// Notification that a fader's value changed through user input.
///
/// Carries the new value for convenience; it is always equal to the fader's
/// [`value`](crate::Fader::value) at the time it is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChanged {
    /// The fader's value after the gesture was applied.
    pub value: f64,
}
