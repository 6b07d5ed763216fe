//! Visual styling for the LiveFader demo.

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};
use livefader_core::FaderColors;

use crate::convert::rgba;

/// Theme colors for the GUI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Main window background color.
    pub background: Color32,
    /// Panel background color.
    pub panel_bg: Color32,
    /// Accent color for active elements.
    pub accent: Color32,
    /// Dimmed accent color for inactive elements.
    pub accent_dim: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Secondary/muted text color.
    pub text_secondary: Color32,
    /// Fader background.
    pub fader_track: Color32,
    /// Fader fill.
    pub fader_fill: Color32,
    /// Fader fill while a pointer is held on it.
    pub fader_fill_active: Color32,
    /// Fader background while disabled.
    pub fader_track_disabled: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(25, 25, 30),
            panel_bg: Color32::from_rgb(35, 35, 42),
            accent: Color32::from_rgb(100, 180, 255),
            accent_dim: Color32::from_rgb(60, 100, 140),
            text_primary: Color32::from_rgb(230, 230, 235),
            text_secondary: Color32::from_rgb(150, 150, 160),
            fader_track: Color32::from_rgb(50, 50, 60),
            fader_fill: Color32::from_rgb(100, 180, 255),
            fader_fill_active: Color32::from_rgb(140, 210, 255),
            fader_track_disabled: Color32::from_rgb(40, 40, 46),
        }
    }
}

impl Theme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.panel_bg;
        visuals.panel_fill = self.panel_bg;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = Color32::from_rgb(40, 40, 48);

        visuals.widgets.noninteractive.bg_fill = self.panel_bg;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(4);

        visuals.widgets.inactive.bg_fill = Color32::from_rgb(45, 45, 55);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(4);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(55, 55, 68);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(4);

        visuals.widgets.active.bg_fill = Color32::from_rgb(65, 65, 80);
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, self.accent);
        visuals.widgets.active.corner_radius = CornerRadius::same(4);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Fader colors matching this theme.
    ///
    /// Used for layout entries that do not set their own colors.
    pub fn fader_colors(&self) -> FaderColors {
        FaderColors::new(rgba(self.fader_track), rgba(self.fader_fill))
            .with_highlighted(rgba(self.fader_track), rgba(self.fader_fill_active))
            .with_disabled(rgba(self.fader_track_disabled), rgba(self.accent_dim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livefader_core::Rgba;

    #[test]
    fn fader_colors_follow_state() {
        let theme = Theme::default();
        let colors = theme.fader_colors();

        let enabled = colors.resolve(true, false);
        assert_eq!(enabled.background, Rgba::rgb(50, 50, 60));
        assert_eq!(enabled.foreground, Rgba::rgb(100, 180, 255));

        assert_eq!(colors.resolve(true, true).foreground, Rgba::rgb(140, 210, 255));
        assert_eq!(colors.resolve(false, true).background, Rgba::rgb(40, 40, 46));
    }

    #[test]
    fn apply_sets_dark_panels() {
        let ctx = egui::Context::default();
        let theme = Theme::default();
        theme.apply(&ctx);
        let style = ctx.style();
        assert!(style.visuals.dark_mode);
        assert_eq!(style.visuals.panel_fill, theme.panel_bg);
    }
}
