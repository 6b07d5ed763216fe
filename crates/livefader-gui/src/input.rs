//! Decoding egui pointer interaction into fader gestures.

use egui::{Pos2, Response};
use livefader_core::GesturePhase;

/// Pointer input carried by one frame of a [`Response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    /// One event of a drag.
    Gesture(GesturePhase),
    /// Press and release without dragging.
    Tap,
}

impl PointerInput {
    /// Decode the interaction of this frame, if any.
    ///
    /// Drag start, drag and drag stop become `Began`, `Changed` and `Ended`;
    /// a click becomes a tap.
    pub fn from_response(response: &Response) -> Option<Self> {
        if response.clicked() {
            Some(Self::Tap)
        } else if response.drag_started() {
            Some(Self::Gesture(GesturePhase::Began))
        } else if response.drag_stopped() {
            Some(Self::Gesture(GesturePhase::Ended))
        } else if response.dragged() {
            Some(Self::Gesture(GesturePhase::Changed))
        } else {
            None
        }
    }
}

/// Where the pointer is for an interaction on `response`.
///
/// Falls back to the latest known pointer position on the release frame.
pub fn pointer_pos(response: &Response) -> Option<Pos2> {
    response
        .interact_pointer_pos()
        .or_else(|| response.ctx.input(|i| i.pointer.latest_pos()))
}

/// Decode input and position together.
pub fn read(response: &Response) -> Option<(PointerInput, Pos2)> {
    let input = PointerInput::from_response(response)?;
    Some((input, pointer_pos(response)?))
}
