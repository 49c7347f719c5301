use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SketchResult;

/// Tunables for a sketchpad session.
///
/// Every field has a default, so a config file only needs the keys it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Interactive canvas width in pixels
    pub canvas_width: u32,
    /// Interactive canvas height in pixels
    pub canvas_height: u32,
    /// Uniform scale applied to the canvas when exporting
    pub export_scale: u32,
    /// File name used by the export control
    pub export_file_name: String,
    /// Line width of the "thin" control
    pub thin_width: f32,
    /// Line width of the "thick" control
    pub thick_width: f32,
    /// Ink for thin strokes
    pub ink_color: [u8; 3],
    /// Ink for strokes thicker than 1
    pub marker_color: [u8; 3],
    /// Glyph height of placed stickers
    pub sticker_size: f32,
    /// Stickers available before any custom ones are added
    pub stickers: Vec<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256,
            canvas_height: 256,
            export_scale: 4,
            export_file_name: "sketchpad.png".to_owned(),
            thin_width: 1.0,
            thick_width: 5.0,
            ink_color: [0, 0, 0],
            marker_color: [33, 111, 219],
            sticker_size: 32.0,
            stickers: vec!["⭐".to_owned(), "🌮".to_owned(), "🐸".to_owned()],
        }
    }
}

impl SketchConfig {
    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> SketchResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn ink(&self) -> Color32 {
        let [r, g, b] = self.ink_color;
        Color32::from_rgb(r, g, b)
    }

    pub fn marker(&self) -> Color32 {
        let [r, g, b] = self.marker_color;
        Color32::from_rgb(r, g, b)
    }

    /// Color a stroke of the given width is drawn with
    pub fn stroke_color(&self, width: f32) -> Color32 {
        if width > 1.0 { self.marker() } else { self.ink() }
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width as f32, self.canvas_height as f32)
    }
}
