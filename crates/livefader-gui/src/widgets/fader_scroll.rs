//! Horizontally scrolling bank of faders with multi-edit.
//!
//! In scroll mode each fader handles its own drags and the bank scrolls. In
//! multi-edit mode scrolling is off, the faders stop sensing, and a single
//! interaction laid over the whole bank routes one drag through
//! [`FaderGroup::on_gesture`], so sweeping across the bank sets each fader
//! the pointer passes over.

use egui::{Pos2, RichText, ScrollArea, Sense, Ui, Vec2};
use livefader_core::{Dispatch, FaderGroup, FaderId, InputRoute, ValueChanged};

use super::fader::{FaderWidget, default_size};
use crate::convert::to_point;
use crate::input::{self, PointerInput};

/// Result of showing a [`FaderScrollView`].
#[derive(Debug, Clone, PartialEq)]
pub struct FaderScrollOutput {
    /// Notifications emitted this frame, in emission order.
    pub changes: Vec<(FaderId, ValueChanged)>,
    /// Screen position of the content origin that fader frames are relative to.
    pub origin: Pos2,
}

/// Scroll container for a [`FaderGroup`].
pub struct FaderScrollView<'a> {
    group: &'a mut FaderGroup,
    labels: &'a [String],
    fader_size: Option<Vec2>,
    id_salt: &'a str,
}

impl<'a> FaderScrollView<'a> {
    /// Show `group`; `labels[i]` is drawn under fader `i` when present.
    pub fn new(group: &'a mut FaderGroup, labels: &'a [String]) -> Self {
        Self {
            group,
            labels,
            fader_size: None,
            id_salt: "fader_scroll",
        }
    }

    /// Size of every fader. Defaults to the per-direction widget size.
    pub fn fader_size(mut self, size: Vec2) -> Self {
        self.fader_size = Some(size);
        self
    }

    /// Disambiguate several scroll views in one `Ui`.
    pub fn id_salt(mut self, id_salt: &'a str) -> Self {
        self.id_salt = id_salt;
        self
    }

    /// Lay out the bank and process this frame's input.
    pub fn show(self, ui: &mut Ui) -> FaderScrollOutput {
        let Self {
            group,
            labels,
            fader_size,
            id_salt,
        } = self;

        let mut changes = Vec::new();
        let mut origin = Pos2::ZERO;

        ScrollArea::horizontal()
            .id_salt(id_salt)
            .enable_scrolling(group.is_scroll_enabled())
            .show(ui, |ui| {
                origin = ui.max_rect().min;

                let content = ui
                    .horizontal(|ui| {
                        for (id, fader) in group.iter_mut() {
                            let size = fader_size.unwrap_or_else(|| default_size(fader.direction()));
                            ui.vertical(|ui| {
                                let response =
                                    ui.add(FaderWidget::new(fader).size(size).origin(origin));
                                if response.changed() {
                                    changes.push((id, ValueChanged { value: fader.value() }));
                                }
                                if let Some(label) = labels.get(id.0) {
                                    ui.label(RichText::new(label).small());
                                }
                                ui.label(RichText::new(format!("{:.2}", fader.value())).small().weak());
                            });
                        }
                    })
                    .response
                    .rect;

                if group.input_route() == InputRoute::SharedGesture {
                    let shared =
                        ui.interact(content, ui.id().with("shared_gesture"), Sense::click_and_drag());
                    if let Some((pointer, pos)) = input::read(&shared) {
                        let point = to_point(pos, origin);
                        let dispatch = match pointer {
                            PointerInput::Gesture(phase) => group.on_gesture(point, phase),
                            PointerInput::Tap => group.on_tap(point),
                        };
                        if let Some(Dispatch {
                            fader,
                            changed: Some(changed),
                        }) = dispatch
                        {
                            changes.push((fader, changed));
                        }
                    }
                }
            });

        for (id, changed) in &changes {
            tracing::trace!(fader = %id, value = changed.value, "fader bank change");
        }

        FaderScrollOutput { changes, origin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{CentralPanel, Event, Modifiers, PointerButton, RawInput, Rect, pos2, vec2};
    use livefader_core::{Fader, Style};

    fn input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn bank(count: usize) -> FaderGroup {
        FaderGroup::from_faders((0..count).map(|_| {
            Fader::new()
                .with_style(Style::FromBottom)
                .with_range(0.0, 100.0)
                .unwrap()
        }))
    }

    fn frame(ctx: &egui::Context, group: &mut FaderGroup, events: Vec<Event>) -> FaderScrollOutput {
        let labels = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let mut output = None;
        let _ = ctx.run(input(events), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                output = Some(FaderScrollView::new(&mut *group, &labels).show(ui));
            });
        });
        output.unwrap()
    }

    #[test]
    fn frames_share_the_content_origin() {
        let ctx = egui::Context::default();
        let mut group = bank(3);
        frame(&ctx, &mut group, Vec::new());

        let xs: Vec<f64> = group.iter().map(|(_, f)| f.frame().x).collect();
        assert_eq!(xs[0], 0.0);
        assert!(xs[0] < xs[1] && xs[1] < xs[2], "frames {xs:?}");
        assert!(group.iter().all(|(_, f)| f.frame().height == 200.0));
    }

    #[test]
    fn multi_edit_click_reaches_only_the_fader_under_the_pointer() {
        let ctx = egui::Context::default();
        let mut group = bank(3);
        group.set_multi_edit_enabled(true);
        let first = frame(&ctx, &mut group, Vec::new());

        let target_frame = group.get(FaderId(1)).unwrap().frame();
        let target = pos2(
            first.origin.x + (target_frame.x + target_frame.width / 2.0) as f32,
            first.origin.y + (target_frame.y + target_frame.height / 2.0) as f32,
        );

        frame(&ctx, &mut group, vec![Event::PointerMoved(target)]);
        frame(&ctx, &mut group, vec![button(target, true)]);
        let released = frame(&ctx, &mut group, vec![button(target, false)]);

        assert_eq!(released.changes.len(), 1);
        assert_eq!(released.changes[0].0, FaderId(1));
        assert!((group.get(FaderId(1)).unwrap().value() - 50.0).abs() < 1e-3);
        assert_eq!(group.get(FaderId(0)).unwrap().value(), 0.0);
        assert_eq!(group.get(FaderId(2)).unwrap().value(), 0.0);
    }
}
