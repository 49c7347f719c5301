use egui::{Color32, Pos2};

use crate::element::stroke::draw_polyline;
use crate::element::{Renderable, Stroke};
use crate::surface::DrawingSurface;

/// Points gathered during a drag, before they become a [`Stroke`].
///
/// It paints exactly like the stroke it will turn into, so interim frames
/// match the committed result.
#[derive(Debug, Clone)]
pub struct DrawStrokeHelper {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl DrawStrokeHelper {
    /// Start a buffer seeded with the pointer-down position
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            color,
            thickness,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn into_stroke(self) -> Stroke {
        Stroke::new(self.points, self.thickness, self.color)
    }
}

impl Renderable for DrawStrokeHelper {
    fn draw(&self, surface: &mut dyn DrawingSurface) {
        draw_polyline(surface, &self.points, self.thickness, self.color);
    }
}
