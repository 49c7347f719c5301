use egui::Pos2;

use crate::surface::DrawingSurface;

pub(crate) mod sticker;
pub(crate) mod stroke;

pub use sticker::StickerMark;
pub use stroke::Stroke;

/// Anything that can paint itself onto a drawing surface in one go.
pub trait Renderable {
    fn draw(&self, surface: &mut dyn DrawingSurface);
}

/// Things that follow the pointer until they are committed.
pub trait Positioned {
    fn position(&self) -> Pos2;

    fn set_position(&mut self, position: Pos2);
}

/// Entries of the display list.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Stroke(Stroke),
    Sticker(StickerMark),
}

impl ElementType {
    pub fn element_type(&self) -> &'static str {
        match self {
            ElementType::Stroke(_) => "stroke",
            ElementType::Sticker(_) => "sticker",
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            ElementType::Stroke(stroke) => Some(stroke),
            ElementType::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerMark> {
        match self {
            ElementType::Sticker(sticker) => Some(sticker),
            ElementType::Stroke(_) => None,
        }
    }
}

impl Renderable for ElementType {
    fn draw(&self, surface: &mut dyn DrawingSurface) {
        match self {
            ElementType::Stroke(s) => s.draw(surface),
            ElementType::Sticker(s) => s.draw(surface),
        }
    }
}

impl From<Stroke> for ElementType {
    fn from(stroke: Stroke) -> Self {
        ElementType::Stroke(stroke)
    }
}

impl From<StickerMark> for ElementType {
    fn from(sticker: StickerMark) -> Self {
        ElementType::Sticker(sticker)
    }
}
