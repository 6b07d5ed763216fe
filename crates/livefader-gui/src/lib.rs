//! egui binding and demo application for LiveFader controls.
//!
//! [`FaderWidget`] draws a single [`livefader_core::Fader`] and feeds drags
//! and clicks back into it. [`FaderScrollView`] lays out a
//! [`livefader_core::FaderGroup`] as a scrolling bank and, in multi-edit
//! mode, routes one drag across every fader it passes over.
//!
//! # Modules
//!
//! - [`widgets`]: fader widget and scrolling bank
//! - [`theme`]: dark visuals and matching fader colors
//! - [`app`]: the `livefader` demo application
//! - [`convert`]: egui / model type conversions
//! - [`input`]: egui responses decoded into gesture phases and taps

pub mod app;
pub mod convert;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{FaderBank, LiveFaderApp};
pub use theme::Theme;
pub use widgets::{FaderScrollOutput, FaderScrollView, FaderWidget};
