use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::DrawingSurface;

/// Interactive surface backed by an egui painter.
///
/// The painter is expected to be clipped to `rect`; surface coordinates are
/// offset by `rect.min` on the way out.
pub struct PainterSurface {
    painter: Painter,
    rect: Rect,
    background: Color32,
}

impl PainterSurface {
    pub fn new(painter: Painter, rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            rect,
            background,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.rect.min.to_vec2()
    }
}

impl DrawingSurface for PainterSurface {
    fn size(&self) -> Vec2 {
        self.rect.size()
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, self.background);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(Shape::line(points, Stroke::new(width, color)));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(self.to_screen(center), radius, color);
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, Stroke::new(width, color));
    }

    fn draw_glyph(&mut self, text: &str, center: Pos2, size: f32, angle: f32, color: Color32) {
        let galley = self
            .painter
            .layout_no_wrap(text.to_owned(), FontId::proportional(size), color);

        // TextShape rotates around its top-left corner, so walk back from the
        // center along the rotated half-extent.
        let half = galley.size() / 2.0;
        let rot = egui::emath::Rot2::from_angle(angle);
        let pos = self.to_screen(center) - rot * half;

        let shape = TextShape::new(pos, galley, color)
            .with_angle(angle)
            .with_override_text_color(color);
        self.painter.add(shape);
    }
}
