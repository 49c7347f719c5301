use egui::{Color32, Pos2};

use crate::element::{Positioned, Renderable, StickerMark};
use crate::surface::DrawingSurface;

/// Where the pointer is before any gesture starts: parked far off the
/// canvas so nothing shows until the first move.
pub const OFFSCREEN: Pos2 = Pos2::new(-1000.0, -1000.0);

/// Tint of the brush-size ring
pub const INDICATOR_COLOR: Color32 = Color32::from_gray(90);

/// Transient feedback that follows the pointer. Never part of the
/// display list and never undoable.
#[derive(Debug, Clone, PartialEq)]
pub enum LivePreview {
    /// Ring sized to the active pen
    BrushIndicator { position: Pos2, radius: f32 },
    /// Faded copy of the armed sticker
    StickerGhost(StickerMark),
}

impl LivePreview {
    pub fn brush(position: Pos2, thickness: f32) -> Self {
        Self::BrushIndicator {
            position,
            radius: thickness,
        }
    }

    pub fn ghost(mark: StickerMark) -> Self {
        Self::StickerGhost(mark.with_color(Color32::from_black_alpha(110)))
    }

    pub fn is_ghost(&self) -> bool {
        matches!(self, Self::StickerGhost(_))
    }
}

impl Positioned for LivePreview {
    fn position(&self) -> Pos2 {
        match self {
            Self::BrushIndicator { position, .. } => *position,
            Self::StickerGhost(mark) => mark.position(),
        }
    }

    fn set_position(&mut self, new_position: Pos2) {
        match self {
            Self::BrushIndicator { position, .. } => *position = new_position,
            Self::StickerGhost(mark) => mark.set_position(new_position),
        }
    }
}

impl Renderable for LivePreview {
    fn draw(&self, surface: &mut dyn DrawingSurface) {
        match self {
            Self::BrushIndicator { position, radius } => {
                surface.stroke_circle(*position, *radius, 1.0, INDICATOR_COLOR);
            }
            Self::StickerGhost(mark) => mark.draw(surface),
        }
    }
}
