//! Demo application state and UI layout.
//!
//! Two views: a showcase with one fader per direction/style combination, and
//! a scrolling fader bank that can be switched into multi-edit mode.

use egui::{CentralPanel, Context, RichText, TopBottomPanel};
use livefader_config::{ColorConfig, ConfigError, Layout};
use livefader_core::{Direction, FaderColors, FaderGroup, FaderId, ValueChanged};

use crate::theme::Theme;
use crate::widgets::{FaderScrollView, FaderWidget};

/// A fader group built from a layout, with its labels.
#[derive(Debug, Clone)]
pub struct FaderBank {
    /// Layout name.
    pub name: String,
    /// Layout description.
    pub description: Option<String>,
    /// Label per fader, indexed by [`FaderId`].
    pub labels: Vec<String>,
    /// The faders.
    pub group: FaderGroup,
}

impl FaderBank {
    /// Build a bank from `layout`.
    ///
    /// Entries without their own colors get `fallback_colors`.
    pub fn from_layout(layout: &Layout, fallback_colors: FaderColors) -> Result<Self, ConfigError> {
        let mut group = layout.build_group()?;
        let uncolored = ColorConfig::default();
        for ((_, fader), config) in group.iter_mut().zip(&layout.faders) {
            if config.colors == uncolored {
                fader.set_colors(fallback_colors);
            }
        }

        Ok(Self {
            name: layout.name.clone(),
            description: layout.description.clone(),
            labels: layout.labels(),
            group,
        })
    }

    /// Label of fader `id`.
    pub fn label(&self, id: FaderId) -> &str {
        self.labels.get(id.0).map_or("?", String::as_str)
    }
}

/// Which view the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// One fader per direction/style combination.
    Showcase,
    /// Scrolling bank with multi-edit.
    Bank,
}

/// Last value notification, for the status bar.
#[derive(Debug, Clone, PartialEq)]
pub struct LastChange {
    /// Label of the fader.
    pub label: String,
    /// Reported value.
    pub value: f64,
}

/// Main application state.
pub struct LiveFaderApp {
    theme: Theme,
    view: View,
    showcase: FaderBank,
    bank: FaderBank,
    enabled: bool,
    continuous: bool,
    last_change: Option<LastChange>,
    change_count: u64,
}

impl LiveFaderApp {
    /// Create the application and apply the theme.
    pub fn new(cc: &eframe::CreationContext<'_>, showcase: FaderBank, bank: FaderBank) -> Self {
        let app = Self::with_banks(showcase, bank);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    /// Create the application state without touching any egui context.
    pub fn with_banks(showcase: FaderBank, bank: FaderBank) -> Self {
        let continuous = showcase.group.iter().all(|(_, f)| f.is_continuous());
        Self {
            theme: Theme::default(),
            view: View::Showcase,
            showcase,
            bank,
            enabled: true,
            continuous,
            last_change: None,
            change_count: 0,
        }
    }

    /// Currently shown view.
    pub fn view(&self) -> View {
        self.view
    }

    /// Switch view.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// The showcase bank.
    pub fn showcase(&self) -> &FaderBank {
        &self.showcase
    }

    /// The scrolling bank.
    pub fn bank(&self) -> &FaderBank {
        &self.bank
    }

    /// Mutable access to the scrolling bank.
    pub fn bank_mut(&mut self) -> &mut FaderBank {
        &mut self.bank
    }

    /// Last reported value change.
    pub fn last_change(&self) -> Option<&LastChange> {
        self.last_change.as_ref()
    }

    /// Number of value notifications received.
    pub fn change_count(&self) -> u64 {
        self.change_count
    }

    fn record_change(&mut self, label: String, changed: ValueChanged) {
        tracing::info!(fader = %label, value = changed.value, "value changed");
        self.change_count += 1;
        self.last_change = Some(LastChange {
            label,
            value: changed.value,
        });
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("LIVEFADER").color(self.theme.accent).strong());
            ui.add_space(20.0);
            ui.selectable_value(&mut self.view, View::Showcase, "Showcase");
            ui.selectable_value(&mut self.view, View::Bank, self.bank.name.as_str());
            ui.separator();
            ui.checkbox(&mut self.enabled, "Enabled");
        });
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mode = if self.bank.group.is_multi_edit_enabled() {
                "multi-edit"
            } else {
                "scroll"
            };
            ui.label(format!("Bank: {mode}"));
            ui.separator();
            match &self.last_change {
                Some(change) => ui.label(format!("{} = {:.3}", change.label, change.value)),
                None => ui.label(RichText::new("No changes yet").color(self.theme.text_secondary)),
            };
            ui.separator();
            ui.label(format!("{} notifications", self.change_count));
        });
    }

    fn render_showcase(&mut self, ui: &mut egui::Ui) {
        if ui.checkbox(&mut self.continuous, "Continuous").changed() {
            for (_, fader) in self.showcase.group.iter_mut() {
                fader.set_continuous(self.continuous);
            }
            tracing::debug!(continuous = self.continuous, "showcase notification mode");
        }
        ui.add_space(8.0);

        let mut changes = Vec::new();
        let FaderBank { labels, group, .. } = &mut self.showcase;
        ui.add_enabled_ui(self.enabled, |ui| {
            ui.horizontal_top(|ui| {
                for (id, fader) in group.iter_mut() {
                    if fader.direction() != Direction::Vertical {
                        continue;
                    }
                    ui.vertical(|ui| {
                        if ui.add(FaderWidget::new(fader)).changed() {
                            changes.push((id, ValueChanged { value: fader.value() }));
                        }
                        small_label(ui, labels, id);
                    });
                    ui.add_space(16.0);
                }

                ui.vertical(|ui| {
                    for (id, fader) in group.iter_mut() {
                        if fader.direction() != Direction::Horizontal {
                            continue;
                        }
                        if ui.add(FaderWidget::new(fader)).changed() {
                            changes.push((id, ValueChanged { value: fader.value() }));
                        }
                        small_label(ui, labels, id);
                        ui.add_space(16.0);
                    }
                });
            });
        });

        for (id, changed) in changes {
            let label = self.showcase.label(id).to_string();
            self.record_change(label, changed);
        }
    }

    fn render_bank(&mut self, ui: &mut egui::Ui) {
        if let Some(description) = &self.bank.description {
            ui.label(RichText::new(description).color(self.theme.text_secondary));
        }

        let mut multi_edit = self.bank.group.is_multi_edit_enabled();
        if ui.checkbox(&mut multi_edit, "Multi-edit").changed() {
            self.bank.group.set_multi_edit_enabled(multi_edit);
            tracing::info!(multi_edit, bank = %self.bank.name, "multi-edit toggled");
        }
        ui.add_space(8.0);

        let FaderBank { labels, group, .. } = &mut self.bank;
        let output = ui
            .add_enabled_ui(self.enabled, |ui| {
                FaderScrollView::new(group, labels.as_slice())
                    .id_salt("bank")
                    .show(ui)
            })
            .inner;

        for (id, changed) in output.changes {
            let label = self.bank.label(id).to_string();
            self.record_change(label, changed);
        }
    }

    /// Draw one frame of the whole UI.
    pub fn show(&mut self, ctx: &Context) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_header(ui);
            ui.add_space(4.0);
        });

        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.add_space(2.0);
            self.render_status_bar(ui);
            ui.add_space(2.0);
        });

        CentralPanel::default().show(ctx, |ui| match self.view {
            View::Showcase => self.render_showcase(ui),
            View::Bank => self.render_bank(ui),
        });
    }
}

fn small_label(ui: &mut egui::Ui, labels: &[String], id: FaderId) {
    if let Some(label) = labels.get(id.0) {
        ui.label(RichText::new(label).small());
    }
}

impl eframe::App for LiveFaderApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livefader_config::get_factory_layout;

    fn bank(name: &str) -> FaderBank {
        let layout = get_factory_layout(name).unwrap();
        FaderBank::from_layout(&layout, Theme::default().fader_colors()).unwrap()
    }

    fn app() -> LiveFaderApp {
        LiveFaderApp::with_banks(bank("showcase"), bank("mixer"))
    }

    #[test]
    fn fallback_colors_only_for_uncolored_entries() {
        let themed = Theme::default().fader_colors();

        let showcase = bank("showcase");
        assert!(showcase.group.iter().all(|(_, f)| *f.colors() == themed));

        let mixer = bank("mixer");
        assert!(mixer.group.iter().all(|(_, f)| *f.colors() != themed));
    }

    #[test]
    fn labels_follow_layout_order() {
        let mixer = bank("mixer");
        assert_eq!(mixer.labels.len(), mixer.group.len());
        assert_eq!(mixer.label(FaderId(0)), "Kick");
        assert_eq!(mixer.label(FaderId(99)), "?");
    }

    #[test]
    fn starts_on_showcase_without_changes() {
        let app = app();
        assert_eq!(app.view(), View::Showcase);
        assert!(app.last_change().is_none());
        assert_eq!(app.change_count(), 0);
        assert_eq!(app.bank().name, "Mixer");
    }

    #[test]
    fn record_change_updates_status() {
        let mut app = app();
        app.record_change("Kick".into(), ValueChanged { value: 0.5 });
        assert_eq!(
            app.last_change(),
            Some(&LastChange {
                label: "Kick".into(),
                value: 0.5
            })
        );
        assert_eq!(app.change_count(), 1);
    }

    #[test]
    fn both_views_render_headless() {
        let ctx = Context::default();
        let mut app = app();
        app.bank_mut().group.set_multi_edit_enabled(true);

        for view in [View::Showcase, View::Bank] {
            app.set_view(view);
            let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
        }

        assert!(app.showcase().group.iter().all(|(_, f)| f.frame().width > 0.0));
        assert!(app.bank().group.iter().all(|(_, f)| f.frame().height > 0.0));
        assert_eq!(app.change_count(), 0);
    }
}
