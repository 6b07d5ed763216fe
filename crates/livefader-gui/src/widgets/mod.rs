//! Fader widgets for egui.

mod fader;
mod fader_scroll;

pub use fader::{FaderWidget, default_size};
pub use fader_scroll::{FaderScrollOutput, FaderScrollView};
