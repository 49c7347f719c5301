use std::path::{Path, PathBuf};

use egui::Color32;

use crate::config::SketchConfig;
use crate::document::Document;
use crate::error::SketchResult;
use crate::renderer::Renderer;
use crate::surface::PixmapSurface;

/// Paint the display list onto an offscreen surface, `export_scale` times
/// the canvas size. The live preview is never included.
pub fn render_offscreen(document: &Document, config: &SketchConfig) -> SketchResult<PixmapSurface> {
    let mut surface = PixmapSurface::new(
        config.canvas_width,
        config.canvas_height,
        config.export_scale,
        Color32::WHITE,
    )?;
    Renderer::paint(&mut surface, document.elements(), None);
    Ok(surface)
}

pub fn export_png(document: &Document, config: &SketchConfig) -> SketchResult<Vec<u8>> {
    let surface = render_offscreen(document, config)?;
    let bytes = surface.encode_png()?;
    log::info!(
        "Exported {} elements at {}x{} ({} bytes)",
        document.len(),
        surface.pixel_width(),
        surface.pixel_height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Somewhere finished images go.
pub trait ArtifactSink {
    /// Store `bytes` under `name`, returning where they ended up
    fn deliver(&mut self, name: &str, bytes: &[u8]) -> SketchResult<PathBuf>;
}

/// Writes artifacts into a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for FileSink {
    fn deliver(&mut self, name: &str, bytes: &[u8]) -> SketchResult<PathBuf> {
        let path = self.dir.join(name);
        std::fs::write(&path, bytes)?;
        log::info!("Wrote {}", path.display());
        Ok(path)
    }
}
