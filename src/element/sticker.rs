use egui::{Color32, Pos2};

use super::{Positioned, Renderable};
use crate::surface::DrawingSurface;

/// A stamped glyph.
///
/// The rotation is chosen once, when the mark is created, and never
/// changes afterwards. Only the position moves while the mark is still a
/// placement ghost.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerMark {
    glyph: String,
    position: Pos2,
    rotation: f32,
    size: f32,
    color: Color32,
}

impl StickerMark {
    pub fn new(glyph: impl Into<String>, position: Pos2, rotation: f32, size: f32) -> Self {
        Self {
            glyph: glyph.into(),
            position,
            rotation,
            size,
            color: Color32::BLACK,
        }
    }

    /// Same mark painted in a different tint, used for the placement ghost
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Positioned for StickerMark {
    fn position(&self) -> Pos2 {
        self.position
    }

    fn set_position(&mut self, position: Pos2) {
        self.position = position;
    }
}

impl Renderable for StickerMark {
    fn draw(&self, surface: &mut dyn DrawingSurface) {
        surface.draw_glyph(&self.glyph, self.position, self.size, self.rotation, self.color);
    }
}
