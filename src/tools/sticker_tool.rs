use egui::Pos2;

use super::Tool;
use crate::command::Command;
use crate::element::{Positioned, StickerMark};
use crate::preview::LivePreview;

/// Armed sticker. The rotation is drawn once when the tool is created and
/// shared by the ghost and the mark it places.
#[derive(Debug, Clone)]
pub struct StickerTool {
    mark: StickerMark,
}

impl StickerTool {
    pub fn new(glyph: impl Into<String>, rotation: f32, size: f32) -> Self {
        Self {
            mark: StickerMark::new(glyph, crate::preview::OFFSCREEN, rotation, size),
        }
    }

    pub fn glyph(&self) -> &str {
        self.mark.glyph()
    }

    pub fn rotation(&self) -> f32 {
        self.mark.rotation()
    }
}

impl Tool for StickerTool {
    fn name(&self) -> &'static str {
        "PlaceSticker"
    }

    fn deactivate(&mut self) {}

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        let mut mark = self.mark.clone();
        mark.set_position(pos);
        Some(Command::PlaceSticker(mark))
    }

    fn on_pointer_move(&mut self, _pos: Pos2) {}

    fn on_pointer_up(&mut self) -> Option<Command> {
        None
    }

    fn preview(&self, position: Pos2) -> LivePreview {
        let mut ghost = self.mark.clone();
        ghost.set_position(position);
        LivePreview::ghost(ghost)
    }
}
