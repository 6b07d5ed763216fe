//! Fader control widget.
//!
//! Draws a [`Fader`] as a background rect with a proportional fill and feeds
//! pointer input back into the model:
//! - Drag anywhere on the fader to set the value under the pointer
//! - Click to jump to the clicked value
//! - Enabled state follows the surrounding [`Ui`]

use egui::{Pos2, Response, Sense, Ui, Vec2, Widget, vec2};
use livefader_core::{Direction, Fader};

use crate::convert::{color32, to_point, to_rect, to_screen_rect, to_size};
use crate::input::{self, PointerInput};

/// Default fader size along its long and short axes.
const LONG_SIDE: f32 = 200.0;
const SHORT_SIDE: f32 = 40.0;

/// egui widget over a mutable [`Fader`].
///
/// The response is marked changed whenever the fader emits a value
/// notification, so `ui.add(FaderWidget::new(&mut fader)).changed()` follows
/// the fader's continuous or discrete mode.
pub struct FaderWidget<'a> {
    fader: &'a mut Fader,
    size: Option<Vec2>,
    origin: Option<Pos2>,
    corner_radius: f32,
}

impl<'a> FaderWidget<'a> {
    /// Create a widget for `fader`.
    pub fn new(fader: &'a mut Fader) -> Self {
        Self {
            fader,
            size: None,
            origin: None,
            corner_radius: 2.0,
        }
    }

    /// Set the widget size in points. Defaults to 40x200 for vertical
    /// faders and 200x40 for horizontal ones.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    /// Record the fader frame relative to `origin` instead of the widget's
    /// own top-left corner.
    ///
    /// Containers use this so that every frame shares one coordinate space.
    pub fn origin(mut self, origin: Pos2) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the corner radius of the background.
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }
}

/// Default size for a fader with `direction`.
pub fn default_size(direction: Direction) -> Vec2 {
    match direction {
        Direction::Vertical => vec2(SHORT_SIDE, LONG_SIDE),
        Direction::Horizontal => vec2(LONG_SIDE, SHORT_SIDE),
    }
}

impl Widget for FaderWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = self
            .size
            .unwrap_or_else(|| default_size(self.fader.direction()));
        let sense = if self.fader.is_gesture_enabled() {
            Sense::click_and_drag()
        } else {
            Sense::hover()
        };
        let (rect, mut response) = ui.allocate_exact_size(size, sense);

        let origin = self.origin.unwrap_or(rect.min);
        self.fader.set_frame(to_rect(rect, origin));
        self.fader.set_enabled(ui.is_enabled());
        self.fader
            .set_highlighted(self.fader.is_gesture_enabled() && response.is_pointer_button_down_on());

        let mut changed = false;
        if self.fader.is_gesture_enabled()
            && let Some((pointer, pos)) = input::read(&response)
        {
            let local = to_point(pos, rect.min);
            let notification = match pointer {
                PointerInput::Gesture(phase) => self.fader.handle_gesture(local, phase),
                PointerInput::Tap => self.fader.handle_tap(local),
            };
            changed = notification.is_some();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let colors = self.fader.applied_colors();

            painter.rect_filled(rect, self.corner_radius, color32(colors.background));

            let fill = self.fader.layout(to_size(rect.size()));
            if fill.width > 0.0 && fill.height > 0.0 {
                painter.rect_filled(
                    to_screen_rect(fill, rect.min),
                    self.corner_radius,
                    color32(colors.foreground),
                );
            }
        }

        if changed {
            response.mark_changed();
        }

        response
    }
}
