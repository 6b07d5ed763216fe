//! Conversions between egui types and the toolkit-independent model.
//!
//! egui works in `f32` screen points; the model works in `f64` coordinates
//! relative to some origin (a widget's top-left corner, or the content
//! origin of a scroll area).

use egui::{Color32, Pos2, Vec2};
use livefader_core::{Point, Rect, Rgba, Size};

/// Model color to egui color.
pub fn color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// egui color to model color.
pub fn rgba(color: Color32) -> Rgba {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Rgba::rgba(r, g, b, a)
}

/// Screen position to a model point relative to `origin`.
pub fn to_point(pos: Pos2, origin: Pos2) -> Point {
    Point::new(f64::from(pos.x - origin.x), f64::from(pos.y - origin.y))
}

/// egui size to model size.
pub fn to_size(size: Vec2) -> Size {
    Size::new(f64::from(size.x), f64::from(size.y))
}

/// Screen rect to a model rect relative to `origin`.
pub fn to_rect(rect: egui::Rect, origin: Pos2) -> Rect {
    Rect::from_origin_size(to_point(rect.min, origin), to_size(rect.size()))
}

/// Model rect relative to `origin` back to a screen rect.
#[allow(clippy::cast_possible_truncation)]
pub fn to_screen_rect(rect: Rect, origin: Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        origin + egui::vec2(rect.x as f32, rect.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}
