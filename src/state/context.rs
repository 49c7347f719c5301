//! The sketchpad session.
//!
//! `EditorContext` owns everything that changes while the user draws: the
//! display list, the redo stack, the active tool, the live preview and the
//! sticker set. Every input handler is a method on it, runs to completion,
//! and announces the repaint it needs through the event bus before
//! returning.
//!
//! # Example
//!
//! ```
//! use sticker_sketchpad::{EditorContext, SketchConfig};
//! use egui::Pos2;
//!
//! let mut context = EditorContext::new(SketchConfig::default());
//! context.pointer_down(Pos2::new(10.0, 10.0));
//! context.pointer_move(Pos2::new(20.0, 10.0));
//! context.pointer_up();
//! assert_eq!(context.document().len(), 1);
//!
//! context.undo();
//! assert!(context.document().is_empty());
//! ```
use egui::Pos2;

use crate::command::{Command, CommandHistory};
use crate::config::SketchConfig;
use crate::document::Document;
use crate::element::{Positioned, Renderable};
use crate::error::SketchResult;
use crate::event::{EditorEvent, EventBus};
use crate::export;
use crate::preview::{LivePreview, OFFSCREEN};
use crate::prompt::TextPrompt;
use crate::renderer::{RedrawKind, Renderer};
use crate::surface::DrawingSurface;
use crate::tools::{
    DrawStrokeTool, RandomRotation, RotationSource, StickerTool, Thickness, Tool, ToolType,
};

/// Message shown by the custom sticker prompt
pub const CUSTOM_STICKER_PROMPT: &str = "Custom sticker text";

/// The single owner of all session state.
pub struct EditorContext {
    config: SketchConfig,
    document: Document,
    history: CommandHistory,
    tool: ToolType,
    /// Pen width restored after a sticker is placed
    thickness: Thickness,
    preview: LivePreview,
    stickers: Vec<String>,
    rotation: Box<dyn RotationSource>,
    renderer: Renderer,
    event_bus: EventBus,
    pending_redraw: RedrawKind,
}

impl std::fmt::Debug for EditorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorContext")
            .field("document", &self.document)
            .field("history", &self.history)
            .field("tool", &self.tool)
            .field("preview", &self.preview)
            .field("stickers", &self.stickers)
            .field("pending_redraw", &self.pending_redraw)
            .finish_non_exhaustive()
    }
}

impl EditorContext {
    /// A fresh session: empty canvas, thin pen, preview parked off-canvas.
    pub fn new(config: SketchConfig) -> Self {
        Self::with_rotation_source(config, Box::new(RandomRotation))
    }

    /// Like [`EditorContext::new`], with control over sticker rotations.
    pub fn with_rotation_source(config: SketchConfig, rotation: Box<dyn RotationSource>) -> Self {
        let thickness = Thickness::Thin;
        let tool = ToolType::DrawStroke(pen_tool(&config, thickness));
        let preview = tool.preview(OFFSCREEN);
        let stickers = config.stickers.clone();

        Self {
            config,
            document: Document::new(),
            history: CommandHistory::new(),
            tool,
            thickness,
            preview,
            stickers,
            rotation,
            renderer: Renderer::new(),
            event_bus: EventBus::new(),
            pending_redraw: RedrawKind::Full,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    pub fn preview(&self) -> &LivePreview {
        &self.preview
    }

    /// Glyphs with a selection control, in control order
    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn pending_redraw(&self) -> RedrawKind {
        self.pending_redraw
    }

    pub fn frames_drawn(&self) -> u64 {
        self.renderer.frames_drawn()
    }

    fn notify(&mut self, event: EditorEvent) {
        if let Some(kind) = event.redraw_kind() {
            self.pending_redraw = kind;
        }
        self.event_bus.emit(event);
    }

    // ---- display list & history ----

    /// Append a finished renderable. Always discards the redo stack.
    pub fn commit(&mut self, command: Command) {
        self.history.execute(command, &mut self.document);
        self.notify(EditorEvent::DrawingChanged);
    }

    /// Undo the newest element. No-op on an empty canvas.
    pub fn undo(&mut self) {
        if self.history.undo(&mut self.document) {
            self.notify(EditorEvent::DrawingChanged);
        }
    }

    /// Bring back the most recently undone element. No-op when nothing
    /// was undone since the last commit.
    pub fn redo(&mut self) {
        if self.history.redo(&mut self.document) {
            self.notify(EditorEvent::DrawingChanged);
        }
    }

    pub fn clear(&mut self) {
        self.history.clear(&mut self.document);
        self.notify(EditorEvent::DrawingChanged);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo(&self.document)
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---- tool state machine ----

    /// Only the thickness that is not already active can be selected.
    pub fn is_thickness_enabled(&self, thickness: Thickness) -> bool {
        thickness != self.thickness
    }

    pub fn select_thickness(&mut self, thickness: Thickness) {
        log::info!("Pen set to {}", thickness.label());
        self.thickness = thickness;
        let pen = ToolType::DrawStroke(pen_tool(&self.config, thickness));
        self.set_tool(pen);
    }

    /// Arm `glyph` with a freshly drawn rotation.
    pub fn select_sticker(&mut self, glyph: &str) {
        let rotation = self.rotation.next_rotation();
        log::info!("Sticker {glyph} armed at {rotation:.3} rad");
        let tool = StickerTool::new(glyph, rotation, self.config.sticker_size);
        self.set_tool(ToolType::PlaceSticker(tool));
    }

    fn set_tool(&mut self, tool: ToolType) {
        self.tool.deactivate();
        let old = self.tool.name();
        self.tool = tool;
        self.preview = self.tool.preview(self.preview.position());
        let new = self.tool.name();
        self.notify(EditorEvent::ToolChanged { old, new });
    }

    /// Add a glyph to the sticker set. `None` and empty text add nothing.
    /// Duplicates are kept, each with its own control.
    pub fn add_sticker(&mut self, glyph: Option<String>) -> Option<usize> {
        let glyph = glyph.filter(|glyph| !glyph.is_empty())?;
        log::info!("Custom sticker added: {glyph}");
        self.stickers.push(glyph.clone());
        let index = self.stickers.len() - 1;
        self.notify(EditorEvent::StickerAdded { glyph, index });
        Some(index)
    }

    /// Ask `prompt` for a custom glyph and add it.
    pub fn request_custom_sticker(&mut self, prompt: &mut dyn TextPrompt) -> Option<usize> {
        let answer = prompt.prompt(CUSTOM_STICKER_PROMPT, "");
        if answer.is_none() {
            log::warn!("Custom sticker prompt cancelled");
        }
        self.add_sticker(answer)
    }

    // ---- gestures ----

    pub fn pointer_down(&mut self, pos: Pos2) {
        self.preview.set_position(pos);
        match self.tool.on_pointer_down(pos) {
            Some(command) => {
                // Placing a sticker finishes the placement session.
                self.history.execute(command, &mut self.document);
                self.tool = ToolType::DrawStroke(pen_tool(&self.config, self.thickness));
                self.preview = self.tool.preview(pos);
                self.notify(EditorEvent::DrawingChanged);
            }
            None => self.notify(EditorEvent::ToolMoved { position: pos }),
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        self.preview.set_position(pos);
        self.tool.on_pointer_move(pos);
        self.notify(EditorEvent::ToolMoved { position: pos });
    }

    /// Finish the gesture in progress, if any.
    pub fn pointer_up(&mut self) {
        if let Some(command) = self.tool.on_pointer_up() {
            self.commit(command);
        }
    }

    /// Leaving the canvas finishes a gesture exactly like releasing.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    // ---- rendering ----

    /// Repaint the whole scene onto `surface`.
    ///
    /// After a display-list change only the list is painted. After pointer
    /// or tool feedback the in-progress stroke, or else the live preview,
    /// goes on top.
    pub fn redraw(&mut self, surface: &mut dyn DrawingSurface) {
        let overlay: Option<&dyn Renderable> = match self.pending_redraw {
            RedrawKind::Full => None,
            RedrawKind::Interim => match self.tool.in_progress() {
                Some(stroke) => Some(stroke),
                None => Some(&self.preview as &dyn Renderable),
            },
        };
        self.renderer
            .redraw(surface, self.document.elements(), overlay);
    }

    /// Render the display list offscreen and encode it as PNG.
    pub fn export_png(&self) -> SketchResult<Vec<u8>> {
        export::export_png(&self.document, &self.config)
    }
}

fn pen_tool(config: &SketchConfig, thickness: Thickness) -> DrawStrokeTool {
    let width = match thickness {
        Thickness::Thin => config.thin_width,
        Thickness::Thick => config.thick_width,
    };
    DrawStrokeTool::new(thickness, width, config.stroke_color(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{PaintOp, RecordingSurface};

    fn context() -> EditorContext {
        EditorContext::with_rotation_source(SketchConfig::default(), Box::new(|| 1.0_f32))
    }

    #[test]
    fn test_initial_state() {
        let context = context();
        assert!(context.tool().is_drawing());
        assert_eq!(context.thickness(), Thickness::Thin);
        assert_eq!(context.preview().position(), OFFSCREEN);
        assert!(!context.is_thickness_enabled(Thickness::Thin));
        assert!(context.is_thickness_enabled(Thickness::Thick));
    }

    #[test]
    fn test_tool_switch_discards_gesture() {
        let mut context = context();
        context.pointer_down(Pos2::new(1.0, 1.0));
        context.pointer_move(Pos2::new(5.0, 5.0));
        context.select_thickness(Thickness::Thick);
        context.pointer_up();
        assert!(context.document().is_empty());
    }

    #[test]
    fn test_thick_stroke_uses_marker_color() {
        let mut context = context();
        context.select_thickness(Thickness::Thick);
        context.pointer_down(Pos2::new(1.0, 1.0));
        context.pointer_move(Pos2::new(5.0, 5.0));
        context.pointer_up();

        let stroke = context.document().elements()[0].as_stroke().unwrap();
        assert_eq!(stroke.thickness(), 5.0);
        assert_eq!(stroke.color(), context.config().marker());
    }

    #[test]
    fn test_interim_redraw_shows_preview() {
        let mut context = context();
        context.pointer_move(Pos2::new(40.0, 40.0));

        let mut surface = RecordingSurface::new(egui::vec2(256.0, 256.0));
        context.redraw(&mut surface);
        assert!(matches!(
            surface.ops(),
            [PaintOp::Clear, PaintOp::StrokeCircle { .. }]
        ));
    }

    #[test]
    fn test_full_redraw_omits_preview() {
        let mut context = context();
        context.pointer_down(Pos2::new(1.0, 1.0));
        context.pointer_move(Pos2::new(5.0, 5.0));
        context.pointer_up();

        let mut surface = RecordingSurface::new(egui::vec2(256.0, 256.0));
        context.redraw(&mut surface);
        assert!(matches!(surface.ops(), [PaintOp::Clear, PaintOp::Path { .. }]));
        assert_eq!(context.frames_drawn(), 1);
    }

    #[test]
    fn test_empty_custom_sticker_is_ignored() {
        let mut context = context();
        let before = context.stickers().len();
        assert_eq!(context.add_sticker(Some(String::new())), None);
        assert_eq!(context.add_sticker(None), None);
        assert_eq!(context.stickers().len(), before);
    }
}
