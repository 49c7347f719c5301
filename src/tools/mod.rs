use egui::Pos2;

use crate::command::Command;
use crate::element::Renderable;
use crate::preview::LivePreview;

/// Tool trait defines the interface for the sketchpad tools
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Called when the tool is replaced by another one.
    /// Any unfinished gesture is dropped, never committed.
    fn deactivate(&mut self);

    /// Handle pointer press on the canvas.
    /// Return a Command when the press alone finishes an action.
    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command>;

    /// Handle pointer movement, pressed or not. Movement never commits.
    fn on_pointer_move(&mut self, pos: Pos2);

    /// Handle pointer release, or the pointer leaving the canvas.
    /// Return a Command to **finalize** an action if one is in progress.
    fn on_pointer_up(&mut self) -> Option<Command>;

    /// True between a pointer down and the matching up
    fn is_gesture_active(&self) -> bool {
        false
    }

    /// Uncommitted work to paint on top of the display list
    fn in_progress(&self) -> Option<&dyn Renderable> {
        None
    }

    /// Pointer-following preview for this tool at `position`
    fn preview(&self, position: Pos2) -> LivePreview;
}

mod draw_stroke_helper;
mod draw_stroke_tool;
mod rotation;
mod sticker_tool;

pub use draw_stroke_helper::DrawStrokeHelper;
pub use draw_stroke_tool::{DrawStrokeTool, Thickness};
pub use rotation::{RandomRotation, RotationSource};
pub use sticker_tool::StickerTool;

/// The tool state machine: exactly one of these is active at a time.
#[derive(Debug, Clone)]
pub enum ToolType {
    /// Freehand pen at one of the two widths
    DrawStroke(DrawStrokeTool),
    /// A sticker armed with its frozen rotation
    PlaceSticker(StickerTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::DrawStroke(tool) => tool.name(),
            Self::PlaceSticker(tool) => tool.name(),
        }
    }

    fn deactivate(&mut self) {
        match self {
            Self::DrawStroke(tool) => tool.deactivate(),
            Self::PlaceSticker(tool) => tool.deactivate(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> Option<Command> {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_down(pos),
            Self::PlaceSticker(tool) => tool.on_pointer_down(pos),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2) {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_move(pos),
            Self::PlaceSticker(tool) => tool.on_pointer_move(pos),
        }
    }

    fn on_pointer_up(&mut self) -> Option<Command> {
        match self {
            Self::DrawStroke(tool) => tool.on_pointer_up(),
            Self::PlaceSticker(tool) => tool.on_pointer_up(),
        }
    }

    fn is_gesture_active(&self) -> bool {
        match self {
            Self::DrawStroke(tool) => tool.is_gesture_active(),
            Self::PlaceSticker(tool) => tool.is_gesture_active(),
        }
    }

    fn in_progress(&self) -> Option<&dyn Renderable> {
        match self {
            Self::DrawStroke(tool) => tool.in_progress(),
            Self::PlaceSticker(tool) => tool.in_progress(),
        }
    }

    fn preview(&self, position: Pos2) -> LivePreview {
        match self {
            Self::DrawStroke(tool) => tool.preview(position),
            Self::PlaceSticker(tool) => tool.preview(position),
        }
    }
}

// Helper methods for ToolType
impl ToolType {
    pub fn as_draw_stroke_tool(&self) -> Option<&DrawStrokeTool> {
        match self {
            Self::DrawStroke(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn as_sticker_tool(&self) -> Option<&StickerTool> {
        match self {
            Self::PlaceSticker(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::DrawStroke(_))
    }

    pub fn is_placing(&self) -> bool {
        matches!(self, Self::PlaceSticker(_))
    }
}
