mod history;

use crate::element::{ElementType, StickerMark, Stroke};

pub use history::CommandHistory;

/// A finished gesture, ready to be committed to the display list.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Pointer released after drawing
    AddStroke(Stroke),
    /// Pointer pressed while a sticker was armed
    PlaceSticker(StickerMark),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddStroke(_) => "Add Stroke",
            Command::PlaceSticker(_) => "Place Sticker",
        }
    }

    pub fn into_element(self) -> ElementType {
        match self {
            Command::AddStroke(stroke) => ElementType::Stroke(stroke),
            Command::PlaceSticker(sticker) => ElementType::Sticker(sticker),
        }
    }
}
