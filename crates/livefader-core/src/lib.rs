//! Toolkit-independent model for LiveFader controls.
//!
//! A fader is a rectangular control whose fill is proportional to a numeric
//! value. This crate holds everything about it that does not depend on a
//! GUI toolkit: the value/geometry mapping, gesture handling, state-driven
//! colors, and the multi-fader container that lets one drag set several
//! faders at once. `livefader-gui` binds it to egui.
//!
//! # Modules
//!
//! - [`fader`]: [`Fader`] state, fill layout, pointer-to-value mapping
//! - [`group`]: [`FaderGroup`] with scroll / multi-edit modes and hit dispatch
//! - [`color`]: [`FaderColors`] and per-state resolution
//! - [`gesture`]: gesture phases and the [`ValueChanged`] notification
//! - [`geometry`]: `f64` [`Point`], [`Size`], [`Rect`]
//!
//! # Example
//!
//! ```rust
//! use livefader_core::{Fader, GesturePhase, Point, Rect, Size, Style};
//!
//! let mut fader = Fader::new()
//!     .with_style(Style::FromBottom)
//!     .with_range(0.0, 100.0)
//!     .unwrap();
//! fader.set_frame(Rect::new(0.0, 0.0, 40.0, 200.0));
//!
//! // Drag to three quarters of the height (y grows downward).
//! let changed = fader.handle_gesture(Point::new(20.0, 50.0), GesturePhase::Changed);
//! assert_eq!(changed.map(|c| c.value), Some(75.0));
//!
//! let fill = fader.layout(Size::new(40.0, 200.0));
//! assert_eq!(fill, Rect::new(0.0, 50.0, 40.0, 150.0));
//! ```

pub mod color;
mod error;
pub mod fader;
pub mod geometry;
pub mod gesture;
pub mod group;

pub use color::{AppliedColors, FaderColors, Rgba};
pub use error::FaderError;
pub use fader::{Direction, Fader, MidpointRule, Style};
pub use geometry::{Point, Rect, Size};
pub use gesture::{GesturePhase, ValueChanged};
pub use group::{Dispatch, FaderGroup, FaderId, InputRoute};
