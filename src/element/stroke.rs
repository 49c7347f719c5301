use egui::{Color32, Pos2};

use super::Renderable;
use crate::surface::DrawingSurface;

/// A finished freehand line.
///
/// Width and color are fixed when the stroke is built; the points keep the
/// order they were drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub fn new(points: Vec<Pos2>, thickness: f32, color: Color32) -> Self {
        Self {
            points,
            color,
            thickness,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

/// Paint a polyline, skipping anything too short to form a segment.
pub(crate) fn draw_polyline(
    surface: &mut dyn DrawingSurface,
    points: &[Pos2],
    thickness: f32,
    color: Color32,
) {
    // A lone click must not leave a dot behind.
    if points.len() < 2 {
        return;
    }
    surface.stroke_path(points, thickness, color);
}

impl Renderable for Stroke {
    fn draw(&self, surface: &mut dyn DrawingSurface) {
        draw_polyline(surface, &self.points, self.thickness, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PaintOp, RecordingSurface};

    #[test]
    fn test_single_point_paints_nothing() {
        let stroke = Stroke::new(vec![Pos2::new(10.0, 10.0)], 1.0, Color32::BLACK);
        let mut surface = RecordingSurface::new(egui::vec2(256.0, 256.0));
        stroke.draw(&mut surface);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_empty_stroke_paints_nothing() {
        let stroke = Stroke::new(Vec::new(), 5.0, Color32::BLACK);
        let mut surface = RecordingSurface::new(egui::vec2(256.0, 256.0));
        stroke.draw(&mut surface);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_draws_points_in_order() {
        let points = vec![Pos2::new(1.0, 1.0), Pos2::new(5.0, 1.0), Pos2::new(5.0, 9.0)];
        let stroke = Stroke::new(points.clone(), 5.0, Color32::RED);
        let mut surface = RecordingSurface::new(egui::vec2(256.0, 256.0));
        stroke.draw(&mut surface);
        assert_eq!(
            surface.ops(),
            &[PaintOp::Path {
                points,
                width: 5.0,
                color: Color32::RED
            }]
        );
    }
}
