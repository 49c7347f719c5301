use egui::{Color32, Pos2, Vec2};

use super::DrawingSurface;

/// One primitive call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Clear,
    Path {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    FillCircle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    StrokeCircle {
        center: Pos2,
        radius: f32,
        width: f32,
        color: Color32,
    },
    Glyph {
        text: String,
        center: Pos2,
        size: f32,
        angle: f32,
        color: Color32,
    },
}

/// Surface that paints nothing and remembers every call instead.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Operations issued since the most recent clear
    pub fn since_last_clear(&self) -> &[PaintOp] {
        match self.ops.iter().rposition(|op| *op == PaintOp::Clear) {
            Some(index) => &self.ops[index + 1..],
            None => &self.ops,
        }
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(PaintOp::Clear);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.ops.push(PaintOp::Path {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(PaintOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.ops.push(PaintOp::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn draw_glyph(&mut self, text: &str, center: Pos2, size: f32, angle: f32, color: Color32) {
        self.ops.push(PaintOp::Glyph {
            text: text.to_owned(),
            center,
            size,
            angle,
            color,
        });
    }
}
