//! Multi-fader container with a shared gesture.
//!
//! A [`FaderGroup`] holds an ordered list of registered faders and runs in
//! one of two modes:
//!
//! - **Scroll mode** (default): the container scrolls and every fader
//!   handles its own gestures ([`InputRoute::PerFader`]).
//! - **Multi-edit mode**: scrolling is off, the faders' own gestures are off,
//!   and one shared gesture is routed to whichever fader lies under the
//!   pointer ([`InputRoute::SharedGesture`]). One drag can sweep across
//!   several faders and set each of them.
//!
//! ```text
//!   shared gesture ──► on_gesture(point) ──► first snapshot fader whose
//!                                             frame contains point
//!                                                    │
//!                                    point - frame.origin (local)
//!                                                    ▼
//!                                     Fader::handle_gesture(local, phase)
//! ```
//!
//! The set of faders that receive the shared gesture is snapshotted when
//! multi-edit is switched on. Faders registered afterwards join at the next
//! switch.

use core::fmt;

use crate::fader::Fader;
use crate::geometry::Point;
use crate::gesture::{GesturePhase, ValueChanged};

/// Index of a fader inside a [`FaderGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaderId(pub usize);

impl fmt::Display for FaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for FaderId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Which recognizer owns pointer input inside the container.
///
/// When the shared gesture is active it wins every conflict with the
/// faders' own gestures; the toolkit binding enforces this by claiming
/// input over the whole content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRoute {
    /// Each fader handles the pointer itself; the container may scroll.
    PerFader,
    /// The container's shared gesture handles the pointer.
    SharedGesture,
}

/// Result of routing a shared-gesture event to a fader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispatch {
    /// The fader that received the event.
    pub fader: FaderId,
    /// Its notification, if the event produced one.
    pub changed: Option<ValueChanged>,
}

/// Ordered set of faders driven either individually or by one gesture.
#[derive(Debug, Clone, Default)]
pub struct FaderGroup {
    faders: Vec<Fader>,
    multi_edit: bool,
    snapshot: Vec<FaderId>,
}

impl FaderGroup {
    /// Empty group in scroll mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group holding `faders` in order.
    pub fn from_faders(faders: impl IntoIterator<Item = Fader>) -> Self {
        Self {
            faders: faders.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Register a fader at the end of the list.
    pub fn add(&mut self, fader: Fader) -> FaderId {
        let id = FaderId(self.faders.len());
        self.faders.push(fader);
        id
    }

    /// Number of registered faders.
    pub fn len(&self) -> usize {
        self.faders.len()
    }

    /// Whether no faders are registered.
    pub fn is_empty(&self) -> bool {
        self.faders.is_empty()
    }

    /// Fader by id.
    pub fn get(&self, id: FaderId) -> Option<&Fader> {
        self.faders.get(id.0)
    }

    /// Mutable fader by id.
    pub fn get_mut(&mut self, id: FaderId) -> Option<&mut Fader> {
        self.faders.get_mut(id.0)
    }

    /// Iterate over `(id, fader)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (FaderId, &Fader)> {
        self.faders.iter().enumerate().map(|(i, f)| (FaderId(i), f))
    }

    /// Iterate mutably over `(id, fader)` pairs in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FaderId, &mut Fader)> {
        self.faders.iter_mut().enumerate().map(|(i, f)| (FaderId(i), f))
    }

    /// Drop every fader and leave multi-edit mode.
    pub fn remove_all(&mut self) {
        self.faders.clear();
        self.snapshot.clear();
        self.multi_edit = false;
    }

    /// Whether multi-edit mode is on.
    pub fn is_multi_edit_enabled(&self) -> bool {
        self.multi_edit
    }

    /// Whether the container itself may scroll.
    pub fn is_scroll_enabled(&self) -> bool {
        !self.multi_edit
    }

    /// Whether the shared gesture is active.
    pub fn is_shared_gesture_enabled(&self) -> bool {
        self.multi_edit
    }

    /// Current owner of pointer input.
    pub fn input_route(&self) -> InputRoute {
        if self.multi_edit {
            InputRoute::SharedGesture
        } else {
            InputRoute::PerFader
        }
    }

    /// Faders receiving the shared gesture, captured at the last switch on.
    pub fn snapshot(&self) -> &[FaderId] {
        &self.snapshot
    }

    /// Switch multi-edit mode.
    ///
    /// Turning it on snapshots the registered faders and disables their own
    /// gestures. Turning it off re-enables the snapshotted faders' gestures
    /// and clears the snapshot.
    pub fn set_multi_edit_enabled(&mut self, enabled: bool) {
        self.multi_edit = enabled;
        if enabled {
            self.snapshot = (0..self.faders.len()).map(FaderId).collect();
            for &id in &self.snapshot {
                self.faders[id.0].set_gesture_enabled(false);
            }
        } else {
            for id in self.snapshot.drain(..) {
                if let Some(fader) = self.faders.get_mut(id.0) {
                    fader.set_gesture_enabled(true);
                }
            }
        }
        tracing::debug!(
            multi_edit = enabled,
            faders = self.snapshot.len(),
            "fader group mode changed"
        );
    }

    /// First snapshotted fader whose frame contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<FaderId> {
        self.snapshot
            .iter()
            .copied()
            .find(|id| self.faders.get(id.0).is_some_and(|f| f.frame().contains(point)))
    }

    /// Route a shared-gesture event at `point` (container coordinates).
    ///
    /// Only active in multi-edit mode. At most one fader receives the event;
    /// a point outside every fader is dropped.
    pub fn on_gesture(&mut self, point: Point, phase: GesturePhase) -> Option<Dispatch> {
        self.dispatch(point, |fader, local| fader.handle_gesture(local, phase))
    }

    /// Route a shared tap at `point` (container coordinates).
    pub fn on_tap(&mut self, point: Point) -> Option<Dispatch> {
        self.dispatch(point, |fader, local| fader.handle_tap(local))
    }

    fn dispatch(
        &mut self,
        point: Point,
        apply: impl FnOnce(&mut Fader, Point) -> Option<ValueChanged>,
    ) -> Option<Dispatch> {
        if !self.multi_edit {
            return None;
        }
        let id = self.hit_test(point)?;
        let fader = self.faders.get_mut(id.0)?;
        let local = fader.frame().to_local(point);
        let changed = apply(fader, local);
        tracing::trace!(fader = %id, ?changed, "shared gesture dispatched");
        Some(Dispatch { fader: id, changed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    /// Three vertical faders, 40 wide, 200 tall, 10 apart.
    fn three_faders() -> FaderGroup {
        let mut group = FaderGroup::new();
        for i in 0..3u8 {
            let mut fader = Fader::new().with_range(0.0, 100.0).unwrap();
            fader.set_frame(Rect::new(f64::from(i) * 50.0, 0.0, 40.0, 200.0));
            group.add(fader);
        }
        group
    }

    fn values(group: &FaderGroup) -> Vec<f64> {
        group.iter().map(|(_, f)| f.value()).collect()
    }

    #[test]
    fn starts_in_scroll_mode() {
        let group = three_faders();
        assert!(!group.is_multi_edit_enabled());
        assert!(group.is_scroll_enabled());
        assert!(!group.is_shared_gesture_enabled());
        assert_eq!(group.input_route(), InputRoute::PerFader);
        assert!(group.snapshot().is_empty());
    }

    #[test]
    fn enabling_snapshots_and_disables_fader_gestures() {
        let mut group = three_faders();
        group.set_multi_edit_enabled(true);
        assert!(!group.is_scroll_enabled());
        assert!(group.is_shared_gesture_enabled());
        assert_eq!(group.input_route(), InputRoute::SharedGesture);
        assert_eq!(group.snapshot(), &[FaderId(0), FaderId(1), FaderId(2)]);
        assert!(group.iter().all(|(_, f)| !f.is_gesture_enabled()));
    }

    #[test]
    fn disabling_restores_gestures_and_clears_snapshot() {
        let mut group = three_faders();
        group.set_multi_edit_enabled(true);
        group.set_multi_edit_enabled(false);
        assert!(group.is_scroll_enabled());
        assert!(group.snapshot().is_empty());
        assert!(group.iter().all(|(_, f)| f.is_gesture_enabled()));
    }

    #[test]
    fn faders_added_during_multi_edit_are_not_in_snapshot() {
        let mut group = three_faders();
        group.set_multi_edit_enabled(true);
        let late = group.add(Fader::new());
        assert!(!group.snapshot().contains(&late));
        assert!(group.get(late).unwrap().is_gesture_enabled());

        group.set_multi_edit_enabled(true);
        assert!(group.snapshot().contains(&late));
    }

    #[test]
    fn gesture_reaches_only_the_fader_under_the_point() {
        let mut group = three_faders();
        group.set_multi_edit_enabled(true);

        let dispatch = group
            .on_gesture(Point::new(70.0, 50.0), GesturePhase::Changed)
            .expect("point is inside the second fader");
        assert_eq!(dispatch.fader, FaderId(1));
        assert_eq!(dispatch.changed, Some(ValueChanged { value: 75.0 }));
        assert_eq!(values(&group), vec![0.0, 75.0, 0.0]);
    }

    #[test]
    fn gesture_outside_every_fader_is_dropped() {
        let mut group = three_faders();
        group.set_multi_edit_enabled(true);
        assert!(group.on_gesture(Point::new(45.0, 50.0), GesturePhase::Changed).is_none());
        assert!(group.on_gesture(Point::new(70.0, 250.0), GesturePhase::Ended).is_none());
        assert_eq!(values(&group), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn gesture_ignored_in_scroll_mode() {
        let mut group = three_faders();
        assert!(group.on_gesture(Point::new(10.0, 10.0), GesturePhase::Ended).is_none());
        assert!(group.on_tap(Point::new(10.0, 10.0)).is_none());
        assert_eq!(values(&group), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn overlapping_frames_pick_first_registered() {
        let mut group = FaderGroup::new();
        for _ in 0..2 {
            let mut fader = Fader::new();
            fader.set_frame(Rect::new(0.0, 0.0, 40.0, 100.0));
            group.add(fader);
        }
        group.set_multi_edit_enabled(true);
        let dispatch = group.on_tap(Point::new(20.0, 0.0)).unwrap();
        assert_eq!(dispatch.fader, FaderId(0));
        assert_eq!(values(&group), vec![1.0, 0.0]);
    }

    #[test]
    fn sweep_sets_each_fader_in_turn() {
        let mut group = three_faders();
        group.set_multi_edit_enabled(true);
        let touched: Vec<_> = [
            (Point::new(10.0, 150.0), GesturePhase::Began),
            (Point::new(60.0, 100.0), GesturePhase::Changed),
            (Point::new(110.0, 50.0), GesturePhase::Ended),
        ]
        .into_iter()
        .filter_map(|(p, phase)| group.on_gesture(p, phase))
        .map(|d| d.fader)
        .collect();
        assert_eq!(touched, vec![FaderId(0), FaderId(1), FaderId(2)]);
        assert_eq!(values(&group), vec![25.0, 50.0, 75.0]);
    }

    #[test]
    fn discrete_fader_hit_without_notification() {
        let mut group = three_faders();
        group.get_mut(FaderId(0)).unwrap().set_continuous(false);
        group.set_multi_edit_enabled(true);
        let dispatch = group
            .on_gesture(Point::new(10.0, 100.0), GesturePhase::Changed)
            .unwrap();
        assert_eq!(dispatch.fader, FaderId(0));
        assert!(dispatch.changed.is_none());
        assert_eq!(group.get(FaderId(0)).unwrap().value(), 50.0);
    }

    #[test]
    fn remove_all_resets_mode() {
        let mut group = three_faders();
        group.set_multi_edit_enabled(true);
        group.remove_all();
        assert!(group.is_empty());
        assert!(!group.is_multi_edit_enabled());
        assert!(group.snapshot().is_empty());
    }
}
