//! The fader control model.
//!
//! [`Fader`] owns a value inside `[min_value, max_value]` and maps it to a
//! fill rectangle ([`Fader::layout`]) and back from pointer positions
//! ([`Fader::value_at`], [`Fader::handle_gesture`]).
//!
//! # Fill geometry
//!
//! With `t = (value - min) / (max - min)` (zero for a degenerate range) and
//! the fader's width `W` / height `H`:
//!
//! ```text
//!  FromBottom, vertical        FromMiddle, vertical
//!  ┌──────┐                    ┌──────┐
//!  │      │                    │      │
//!  │██████│ ← H - t·H          │██████│ ← H - t·H   (value above midpoint)
//!  │██████│                    │██████│ ← H / 2
//!  │██████│                    │      │
//!  └──────┘                    └──────┘
//! ```
//!
//! Horizontal faders grow from the left edge (`FromBottom`) or from the
//! horizontal center (`FromMiddle`). The vertical axis is inverted: the top
//! edge corresponds to `max_value`.

use crate::color::{AppliedColors, FaderColors};
use crate::error::FaderError;
use crate::geometry::{Point, Rect, Size};
use crate::gesture::{GesturePhase, ValueChanged};

/// Primary axis of a fader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Value grows left to right.
    Horizontal,
    /// Value grows bottom to top.
    #[default]
    Vertical,
}

/// Where the fill is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Style {
    /// Fill starts at the bottom edge (vertical) or left edge (horizontal).
    FromBottom,
    /// Fill starts at the center line.
    #[default]
    FromMiddle,
}

/// Midpoint used by [`Style::FromMiddle`] to pick the growth direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MidpointRule {
    /// `(max - min) / 2`. Matches the range center only when `min == 0`.
    #[default]
    RangeWidth,
    /// `(min + max) / 2`.
    RangeCenter,
}

impl MidpointRule {
    /// Midpoint for the given bounds.
    pub fn midpoint(self, min: f64, max: f64) -> f64 {
        match self {
            Self::RangeWidth => (max - min) / 2.0,
            Self::RangeCenter => (min + max) / 2.0,
        }
    }
}

/// Linear map of `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`.
///
/// A zero-width input range maps everything to `out_lo`.
fn convert(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let in_width = in_hi - in_lo;
    if in_width == 0.0 {
        return out_lo;
    }
    (value - in_lo) * (out_hi - out_lo) / in_width + out_lo
}

/// A fader: a numeric value shown as a proportional fill.
///
/// All mutation goes through setters, which clamp and recompute derived
/// state. Geometry is never cached; [`layout`](Self::layout) is a pure read.
#[derive(Debug, Clone, PartialEq)]
pub struct Fader {
    value: f64,
    min_value: f64,
    max_value: f64,
    direction: Direction,
    style: Style,
    continuous: bool,
    midpoint: MidpointRule,
    colors: FaderColors,
    applied: AppliedColors,
    enabled: bool,
    highlighted: bool,
    gesture_enabled: bool,
    tap_enabled: bool,
    frame: Rect,
}

impl Default for Fader {
    fn default() -> Self {
        Self::new()
    }
}

impl Fader {
    /// Vertical, from-middle, continuous fader over `[0, 1]` at value 0.
    pub fn new() -> Self {
        let colors = FaderColors::default();
        Self {
            value: 0.0,
            min_value: 0.0,
            max_value: 1.0,
            direction: Direction::Vertical,
            style: Style::FromMiddle,
            continuous: true,
            midpoint: MidpointRule::RangeWidth,
            colors,
            applied: colors.resolve(true, false),
            enabled: true,
            highlighted: false,
            gesture_enabled: true,
            tap_enabled: true,
            frame: Rect::ZERO,
        }
    }

    /// Set the direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the fill style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set continuous notification.
    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    /// Set the colors.
    pub fn with_colors(mut self, colors: FaderColors) -> Self {
        self.set_colors(colors);
        self
    }

    /// Set the value (clamped into the current range).
    pub fn with_value(mut self, value: f64) -> Self {
        self.set_value(value);
        self
    }

    /// Set the range, re-clamping the value.
    pub fn with_range(mut self, min: f64, max: f64) -> Result<Self, FaderError> {
        self.set_range(min, max)?;
        Ok(self)
    }

    // --- value and range ---

    /// Current value, always within `[min_value, max_value]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Lower bound.
    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Upper bound.
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Set the value, clamped into `[min_value, max_value]`.
    ///
    /// NaN and infinities are ignored.
    pub fn set_value(&mut self, value: f64) {
        if !value.is_finite() {
            tracing::warn!(value, "ignoring non-finite fader value");
            return;
        }
        self.value = value.clamp(self.min_value, self.max_value);
    }

    /// Set both bounds at once and re-clamp the value.
    ///
    /// `min == max` is allowed; the fill is then always empty.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), FaderError> {
        if !min.is_finite() {
            return Err(FaderError::NonFinite {
                field: "min_value",
                value: min,
            });
        }
        if !max.is_finite() {
            return Err(FaderError::NonFinite {
                field: "max_value",
                value: max,
            });
        }
        if min > max {
            return Err(FaderError::InvalidRange { min, max });
        }
        self.min_value = min;
        self.max_value = max;
        self.value = self.value.clamp(min, max);
        Ok(())
    }

    /// Value as a fraction of the range, in `[0, 1]`. Zero for a
    /// degenerate range.
    pub fn normalized(&self) -> f64 {
        convert(self.value, self.min_value, self.max_value, 0.0, 1.0)
    }

    // --- presentation properties ---

    /// Primary axis.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the primary axis.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Fill anchor.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Set the fill anchor.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Whether every gesture event notifies, rather than only the last.
    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// Set continuous notification.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.continuous = continuous;
    }

    /// Midpoint rule for [`Style::FromMiddle`].
    pub fn midpoint_rule(&self) -> MidpointRule {
        self.midpoint
    }

    /// Set the midpoint rule.
    pub fn set_midpoint_rule(&mut self, rule: MidpointRule) {
        self.midpoint = rule;
    }

    // --- control state and colors ---

    /// Configured colors.
    pub fn colors(&self) -> &FaderColors {
        &self.colors
    }

    /// Replace the colors and recompute the applied pair.
    pub fn set_colors(&mut self, colors: FaderColors) {
        self.colors = colors;
        self.refresh_colors();
    }

    /// Colors for the current `(enabled, highlighted)` state.
    pub fn applied_colors(&self) -> AppliedColors {
        self.applied
    }

    /// Whether the control accepts input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the control.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.refresh_colors();
        }
    }

    /// Whether the control is highlighted (pointer held down on it).
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Set the highlight state.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        if self.highlighted != highlighted {
            self.highlighted = highlighted;
            self.refresh_colors();
        }
    }

    fn refresh_colors(&mut self) {
        self.applied = self.colors.resolve(self.enabled, self.highlighted);
    }

    /// Whether the fader handles its own pointer gestures.
    ///
    /// Cleared by [`FaderGroup`](crate::FaderGroup) in multi-edit mode.
    /// [`handle_gesture`](Self::handle_gesture) does not consult it; the
    /// toolkit binding does before routing its own input.
    pub fn is_gesture_enabled(&self) -> bool {
        self.gesture_enabled
    }

    /// Turn the fader's own gesture handling on or off.
    pub fn set_gesture_enabled(&mut self, enabled: bool) {
        self.gesture_enabled = enabled;
    }

    /// Whether a single tap sets the value.
    pub fn is_tap_enabled(&self) -> bool {
        self.tap_enabled
    }

    /// Turn tap-to-set on or off.
    pub fn set_tap_enabled(&mut self, enabled: bool) {
        self.tap_enabled = enabled;
    }

    /// Position and size in the parent's coordinate space.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Set the position and size in the parent's coordinate space.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame.standardized();
    }

    // --- geometry ---

    /// Whether a [`Style::FromMiddle`] fill extends from the center toward
    /// the max end.
    pub fn grows_toward_max(&self) -> bool {
        self.value > self.midpoint.midpoint(self.min_value, self.max_value)
    }

    /// Fill rectangle in local coordinates for a fader of `size`.
    ///
    /// A degenerate range (`min == max`) yields an empty fill at the anchor.
    pub fn layout(&self, size: Size) -> Rect {
        let Size { width, height } = size;
        if self.max_value == self.min_value {
            return match (self.style, self.direction) {
                (Style::FromBottom, Direction::Vertical) => Rect::new(0.0, height, width, 0.0),
                (Style::FromBottom, Direction::Horizontal) => Rect::new(0.0, 0.0, 0.0, height),
                (Style::FromMiddle, Direction::Vertical) => {
                    Rect::new(0.0, height / 2.0, width, 0.0)
                }
                (Style::FromMiddle, Direction::Horizontal) => {
                    Rect::new(width / 2.0, 0.0, 0.0, height)
                }
            };
        }
        let rect = match (self.style, self.direction) {
            (Style::FromBottom, Direction::Vertical) => {
                let h = convert(self.value, self.min_value, self.max_value, 0.0, height);
                Rect::new(0.0, height - h, width, h)
            }
            (Style::FromBottom, Direction::Horizontal) => {
                let w = convert(self.value, self.min_value, self.max_value, 0.0, width);
                Rect::new(0.0, 0.0, w, height)
            }
            (Style::FromMiddle, Direction::Vertical) => {
                let h = convert(self.value, self.min_value, self.max_value, 0.0, height);
                let mid = height / 2.0;
                if self.grows_toward_max() {
                    Rect::new(0.0, height - h, width, mid - (height - h))
                } else {
                    Rect::new(0.0, mid, width, (height - h) - mid)
                }
            }
            (Style::FromMiddle, Direction::Horizontal) => {
                let w = convert(self.value, self.min_value, self.max_value, 0.0, width);
                let mid = width / 2.0;
                if self.grows_toward_max() {
                    Rect::new(mid, 0.0, w - mid, height)
                } else {
                    Rect::new(w, 0.0, mid - w, height)
                }
            }
        };
        rect.standardized()
    }

    /// Pixel coordinate along the primary axis that represents `value`.
    ///
    /// For vertical faders this is a `y` (top is `max_value`), for
    /// horizontal faders an `x`.
    pub fn position_for_value(&self, value: f64, size: Size) -> f64 {
        match self.direction {
            Direction::Vertical => {
                size.height - convert(value, self.min_value, self.max_value, 0.0, size.height)
            }
            Direction::Horizontal => {
                convert(value, self.min_value, self.max_value, 0.0, size.width)
            }
        }
    }

    /// Value under a local `point` for a fader of `size`, clamped into the
    /// range. `None` when the primary axis has zero length.
    pub fn value_at(&self, point: Point, size: Size) -> Option<f64> {
        let raw = match self.direction {
            Direction::Vertical => {
                if size.height <= 0.0 {
                    return None;
                }
                self.max_value
                    - convert(point.y, 0.0, size.height, 0.0, self.max_value - self.min_value)
            }
            Direction::Horizontal => {
                if size.width <= 0.0 {
                    return None;
                }
                convert(point.x, 0.0, size.width, self.min_value, self.max_value)
            }
        };
        Some(raw.clamp(self.min_value, self.max_value))
    }

    // --- input ---

    /// Apply one gesture event at `point` (local coordinates of the frame).
    ///
    /// Returns a notification on every event when continuous, otherwise only
    /// for [`GesturePhase::Ended`] and [`GesturePhase::Cancelled`]. Disabled
    /// faders and non-finite points are ignored.
    pub fn handle_gesture(&mut self, point: Point, phase: GesturePhase) -> Option<ValueChanged> {
        if !self.enabled {
            return None;
        }
        if !point.is_finite() {
            tracing::warn!(?point, "ignoring non-finite gesture location");
            return None;
        }

        if let Some(value) = self.value_at(point, self.frame.size()) {
            self.value = value;
        }
        tracing::trace!(?phase, value = self.value, "fader gesture");

        (self.continuous || phase.is_terminal()).then_some(ValueChanged { value: self.value })
    }

    /// Apply a single tap at `point`. Always notifies unless taps are off.
    pub fn handle_tap(&mut self, point: Point) -> Option<ValueChanged> {
        if !self.tap_enabled {
            return None;
        }
        self.handle_gesture(point, GesturePhase::Ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    const EPS: f64 = 1e-9;

    fn sized(fader: Fader, width: f64, height: f64) -> Fader {
        let mut fader = fader;
        fader.set_frame(Rect::new(0.0, 0.0, width, height));
        fader
    }

    #[test]
    fn defaults() {
        let f = Fader::new();
        assert_eq!(f.value(), 0.0);
        assert_eq!(f.min_value(), 0.0);
        assert_eq!(f.max_value(), 1.0);
        assert_eq!(f.direction(), Direction::Vertical);
        assert_eq!(f.style(), Style::FromMiddle);
        assert!(f.is_continuous());
        assert!(f.is_enabled());
        assert!(f.is_gesture_enabled());
        assert!(f.is_tap_enabled());
    }

    #[test]
    fn set_value_clamps() {
        let mut f = Fader::new().with_range(0.0, 100.0).unwrap();
        f.set_value(150.0);
        assert_eq!(f.value(), 100.0);
        f.set_value(-3.0);
        assert_eq!(f.value(), 0.0);
    }

    #[test]
    fn set_value_ignores_nan() {
        let mut f = Fader::new().with_value(0.25);
        f.set_value(f64::NAN);
        assert_eq!(f.value(), 0.25);
    }

    #[test]
    fn set_range_reclamps_value() {
        let mut f = Fader::new().with_range(0.0, 100.0).unwrap().with_value(80.0);
        f.set_range(0.0, 50.0).unwrap();
        assert_eq!(f.value(), 50.0);
    }

    #[test]
    fn set_range_rejects_inverted_and_non_finite() {
        let mut f = Fader::new();
        assert_eq!(
            f.set_range(2.0, 1.0),
            Err(FaderError::InvalidRange { min: 2.0, max: 1.0 })
        );
        assert!(matches!(
            f.set_range(f64::NAN, 1.0),
            Err(FaderError::NonFinite { field: "min_value", .. })
        ));
        assert!(matches!(
            f.set_range(0.0, f64::INFINITY),
            Err(FaderError::NonFinite { field: "max_value", .. })
        ));
        assert_eq!((f.min_value(), f.max_value()), (0.0, 1.0));
    }

    #[test]
    fn from_bottom_vertical_layout() {
        let f = Fader::new()
            .with_style(Style::FromBottom)
            .with_range(0.0, 100.0)
            .unwrap()
            .with_value(25.0);
        let fill = f.layout(Size::new(40.0, 200.0));
        assert_eq!(fill, Rect::new(0.0, 150.0, 40.0, 50.0));
    }

    #[test]
    fn from_bottom_horizontal_layout() {
        let f = Fader::new()
            .with_style(Style::FromBottom)
            .with_direction(Direction::Horizontal)
            .with_range(0.0, 10.0)
            .unwrap()
            .with_value(7.5);
        let fill = f.layout(Size::new(200.0, 30.0));
        assert_eq!(fill, Rect::new(0.0, 0.0, 150.0, 30.0));
    }

    #[test]
    fn from_middle_vertical_below_midpoint() {
        let f = Fader::new()
            .with_range(0.0, 100.0)
            .unwrap()
            .with_value(25.0);
        assert!(!f.grows_toward_max());
        let fill = f.layout(Size::new(40.0, 200.0));
        assert_eq!(fill, Rect::new(0.0, 100.0, 40.0, 50.0));
    }

    #[test]
    fn from_middle_vertical_above_midpoint() {
        let f = Fader::new()
            .with_range(0.0, 100.0)
            .unwrap()
            .with_value(75.0);
        assert!(f.grows_toward_max());
        let fill = f.layout(Size::new(40.0, 200.0));
        assert_eq!(fill, Rect::new(0.0, 50.0, 40.0, 50.0));
    }

    #[test]
    fn from_middle_horizontal_both_sides() {
        let size = Size::new(100.0, 20.0);
        let f = Fader::new()
            .with_direction(Direction::Horizontal)
            .with_value(0.9);
        let fill = f.layout(size);
        assert!((fill.x - 50.0).abs() < EPS);
        assert!((fill.width - 40.0).abs() < EPS);

        let f = f.with_value(0.2);
        let fill = f.layout(size);
        assert!((fill.x - 20.0).abs() < EPS);
        assert!((fill.width - 30.0).abs() < EPS);
    }

    #[test]
    fn from_middle_at_midpoint_is_empty() {
        let f = Fader::new().with_value(0.5);
        let fill = f.layout(Size::new(40.0, 200.0));
        assert_eq!(fill.height, 0.0);
        assert_eq!(fill.y, 100.0);
    }

    #[test]
    fn range_width_midpoint_with_offset_min() {
        // (max - min) / 2 = 25, so 40 counts as "above" even though the
        // range center is 75. The standardized fill still spans mid..value.
        let f = Fader::new()
            .with_range(50.0, 100.0)
            .unwrap()
            .with_value(60.0);
        assert!(f.grows_toward_max());
        let fill = f.layout(Size::new(10.0, 100.0));
        assert!((fill.y - 50.0).abs() < EPS);
        assert!((fill.height - 30.0).abs() < EPS);

        let mut centered = f.clone();
        centered.set_midpoint_rule(MidpointRule::RangeCenter);
        assert!(!centered.grows_toward_max());
        assert_eq!(centered.layout(Size::new(10.0, 100.0)), fill);
    }

    #[test]
    fn degenerate_range_has_empty_fill() {
        for style in [Style::FromBottom, Style::FromMiddle] {
            for direction in [Direction::Vertical, Direction::Horizontal] {
                let f = Fader::new()
                    .with_style(style)
                    .with_direction(direction)
                    .with_range(3.0, 3.0)
                    .unwrap()
                    .with_value(3.0);
                let fill = f.layout(Size::new(50.0, 50.0));
                assert!(fill.x.is_finite() && fill.y.is_finite());
                assert_eq!(f.normalized(), 0.0);
                match direction {
                    Direction::Vertical => assert_eq!(fill.height, 0.0),
                    Direction::Horizontal => assert_eq!(fill.width, 0.0),
                }
            }
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let f = Fader::new().with_value(0.3);
        let size = Size::new(30.0, 120.0);
        assert_eq!(f.layout(size), f.layout(size));
    }

    #[test]
    fn vertical_top_is_max() {
        let f = Fader::new().with_range(-10.0, 10.0).unwrap();
        let size = Size::new(20.0, 100.0);
        assert_eq!(f.value_at(Point::new(5.0, 0.0), size), Some(10.0));
        assert_eq!(f.value_at(Point::new(5.0, 100.0), size), Some(-10.0));
        assert_eq!(f.value_at(Point::new(5.0, 50.0), size), Some(0.0));
    }

    #[test]
    fn value_at_clamps_outside_bounds() {
        let f = Fader::new()
            .with_direction(Direction::Horizontal)
            .with_range(0.0, 100.0)
            .unwrap();
        let size = Size::new(200.0, 20.0);
        assert_eq!(f.value_at(Point::new(-50.0, 0.0), size), Some(0.0));
        assert_eq!(f.value_at(Point::new(500.0, 0.0), size), Some(100.0));
    }

    #[test]
    fn value_at_zero_axis_is_none() {
        let f = Fader::new();
        assert_eq!(f.value_at(Point::new(0.0, 0.0), Size::new(10.0, 0.0)), None);
    }

    #[test]
    fn continuous_notifies_every_event() {
        let mut f = sized(Fader::new(), 20.0, 100.0);
        let mut count = 0;
        for (y, phase) in [
            (90.0, GesturePhase::Began),
            (70.0, GesturePhase::Changed),
            (50.0, GesturePhase::Changed),
            (30.0, GesturePhase::Ended),
        ] {
            if f.handle_gesture(Point::new(10.0, y), phase).is_some() {
                count += 1;
            }
        }
        assert_eq!(count, 4);
        assert!((f.value() - 0.7).abs() < EPS);
    }

    #[test]
    fn discrete_notifies_once_on_end() {
        let mut f = sized(Fader::new().with_continuous(false), 20.0, 100.0);
        let events: Vec<_> = [
            (90.0, GesturePhase::Began),
            (70.0, GesturePhase::Changed),
            (50.0, GesturePhase::Changed),
            (30.0, GesturePhase::Ended),
        ]
        .into_iter()
        .filter_map(|(y, phase)| f.handle_gesture(Point::new(10.0, y), phase))
        .collect();
        assert_eq!(events.len(), 1);
        assert!((events[0].value - 0.7).abs() < EPS);
    }

    #[test]
    fn discrete_notifies_on_cancel() {
        let mut f = sized(Fader::new().with_continuous(false), 20.0, 100.0);
        assert!(f.handle_gesture(Point::new(0.0, 10.0), GesturePhase::Began).is_none());
        assert!(f.handle_gesture(Point::new(0.0, 20.0), GesturePhase::Cancelled).is_some());
    }

    #[test]
    fn disabled_fader_ignores_gestures() {
        let mut f = sized(Fader::new().with_value(0.5), 20.0, 100.0);
        f.set_enabled(false);
        assert!(f.handle_gesture(Point::new(0.0, 0.0), GesturePhase::Ended).is_none());
        assert_eq!(f.value(), 0.5);
    }

    #[test]
    fn zero_sized_fader_keeps_value_but_notifies() {
        let mut f = Fader::new().with_value(0.4);
        let event = f.handle_gesture(Point::new(0.0, 0.0), GesturePhase::Changed);
        assert_eq!(event, Some(ValueChanged { value: 0.4 }));
    }

    #[test]
    fn tap_sets_value_and_notifies() {
        let mut f = sized(
            Fader::new()
                .with_direction(Direction::Horizontal)
                .with_continuous(false),
            100.0,
            20.0,
        );
        let event = f.handle_tap(Point::new(25.0, 10.0));
        assert_eq!(event, Some(ValueChanged { value: 0.25 }));

        f.set_tap_enabled(false);
        assert!(f.handle_tap(Point::new(75.0, 10.0)).is_none());
        assert_eq!(f.value(), 0.25);
    }

    #[test]
    fn state_changes_recompute_colors() {
        let red = Rgba::rgb(255, 0, 0);
        let colors = FaderColors::new(Rgba::WHITE, Rgba::BLUE)
            .with_highlighted(red, red)
            .with_disabled(Rgba::BLACK, Rgba::BLACK);
        let mut f = Fader::new().with_colors(colors);
        assert_eq!(f.applied_colors().background, Rgba::WHITE);

        f.set_highlighted(true);
        assert_eq!(f.applied_colors().background, red);

        f.set_enabled(false);
        assert_eq!(f.applied_colors().foreground, Rgba::BLACK);

        f.set_enabled(true);
        f.set_highlighted(false);
        assert_eq!(f.applied_colors().foreground, Rgba::BLUE);
    }

    #[test]
    fn set_frame_standardizes() {
        let mut f = Fader::new();
        f.set_frame(Rect::new(10.0, 10.0, -10.0, 20.0));
        assert_eq!(f.frame(), Rect::new(0.0, 10.0, 10.0, 20.0));
    }
}
