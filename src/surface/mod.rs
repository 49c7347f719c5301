//! The narrow drawing interface every renderable paints through.
//!
//! Coordinates are surface-local pixels: (0, 0) is the top-left corner of
//! the canvas regardless of where the canvas sits on screen or how large
//! the backing raster is.

use egui::{Color32, Pos2, Vec2};

mod painter;
mod pixmap;
mod recording;

pub use painter::PainterSurface;
pub use pixmap::PixmapSurface;
pub use recording::{PaintOp, RecordingSurface};

/// Primitive paint operations consumed by the renderer.
pub trait DrawingSurface {
    /// Logical size of the surface in pixels
    fn size(&self) -> Vec2;

    /// Wipe the whole surface back to its background
    fn clear(&mut self);

    /// Stroke an open polyline through `points`
    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);

    /// Render `text` centered on `center`, rotated clockwise by `angle` radians
    fn draw_glyph(&mut self, text: &str, center: Pos2, size: f32, angle: f32, color: Color32);
}
