use egui::Pos2;

use crate::renderer::RedrawKind;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The display list changed
    DrawingChanged,
    /// The pointer moved or a gesture progressed
    ToolMoved { position: Pos2 },
    /// A different tool was selected
    ToolChanged {
        old: &'static str,
        new: &'static str,
    },
    /// A custom glyph joined the sticker set
    StickerAdded { glyph: String, index: usize },
}

impl EditorEvent {
    /// Repaint this event calls for, if any
    pub fn redraw_kind(&self) -> Option<RedrawKind> {
        match self {
            EditorEvent::DrawingChanged => Some(RedrawKind::Full),
            EditorEvent::ToolMoved { .. } | EditorEvent::ToolChanged { .. } => {
                Some(RedrawKind::Interim)
            }
            EditorEvent::StickerAdded { .. } => None,
        }
    }
}
