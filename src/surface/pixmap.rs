use std::sync::OnceLock;

use egui::{Color32, Pos2, Vec2};
use fontdue::{Font, FontSettings};
use tiny_skia::{
    FillRule, FilterQuality, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint,
    PremultipliedColorU8, Transform,
};

use super::DrawingSurface;
use crate::error::{SketchError, SketchResult};

/// System fonts searched for sticker glyphs, most emoji-capable first.
///
/// fontdue only rasterizes outline fonts, so color bitmap emoji fonts are
/// not listed.
const FONT_SEARCH_PATHS: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/noto/NotoEmoji-Regular.ttf",
    "/usr/share/fonts/truetype/ancient-scripts/Symbola_hint.ttf",
    "/usr/share/fonts/TTF/Symbola.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    // macOS
    "/System/Library/Fonts/Apple Symbols.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    // Windows
    "C:\\Windows\\Fonts\\seguisym.ttf",
    "C:\\Windows\\Fonts\\seguiemj.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// The fonts egui paints the canvas with, tried after the system fonts so
/// exports cover at least what the canvas shows.
const BUNDLED_FONTS: &[(&str, &[u8])] = &[
    ("Ubuntu-Light", epaint_default_fonts::UBUNTU_LIGHT),
    ("NotoEmoji-Regular", epaint_default_fonts::NOTO_EMOJI_REGULAR),
    ("emoji-icon-font", epaint_default_fonts::EMOJI_ICON),
];

static FONTS: OnceLock<Vec<Font>> = OnceLock::new();

/// Share of the em box above the baseline when laying out a glyph run.
const BASELINE_RATIO: f32 = 0.8;

/// Offscreen raster surface used for export.
///
/// Paint calls are made in logical canvas coordinates and scaled uniformly
/// by `scale` onto the backing pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    scale: f32,
    background: Color32,
    fonts: &'static [Font],
}

impl PixmapSurface {
    /// Allocate a `width * scale` by `height * scale` raster.
    pub fn new(width: u32, height: u32, scale: u32, background: Color32) -> SketchResult<Self> {
        let (px_width, px_height) = (width.saturating_mul(scale), height.saturating_mul(scale));
        let pixmap = Pixmap::new(px_width, px_height).ok_or(SketchError::SurfaceUnavailable {
            width: px_width,
            height: px_height,
        })?;

        let mut surface = Self {
            pixmap,
            scale: scale as f32,
            background,
            fonts: fonts(),
        };
        surface.clear();
        Ok(surface)
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixmap.height()
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn font_for(&self, ch: char) -> Option<&Font> {
        self.fonts.iter().find(|font| font.lookup_glyph_index(ch) != 0)
    }

    /// Straight-alpha RGBA copy of the raster.
    pub fn to_rgba_image(&self) -> SketchResult<image::RgbaImage> {
        let mut raw = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            raw.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }

        image::RgbaImage::from_raw(self.pixmap.width(), self.pixmap.height(), raw).ok_or(
            SketchError::SurfaceUnavailable {
                width: self.pixmap.width(),
                height: self.pixmap.height(),
            },
        )
    }

    pub fn encode_png(&self) -> SketchResult<Vec<u8>> {
        let rgba = self.to_rgba_image()?;
        let mut bytes = Vec::new();
        rgba.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Rasterize `text` into a tinted pixmap laid out on a single baseline.
    fn rasterize_run(&self, text: &str, px_size: f32, color: Color32) -> Option<Pixmap> {
        let mut glyphs = Vec::new();
        let mut pen_x = 0.0_f32;
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            let Some(font) = self.font_for(ch) else {
                log::warn!("No font covers {ch:?}, skipping it");
                continue;
            };
            let (metrics, coverage) = font.rasterize(ch, px_size);
            glyphs.push((pen_x, metrics, coverage));
            pen_x += metrics.advance_width;
        }

        let width = pen_x.ceil() as u32;
        let height = px_size.ceil() as u32;
        let mut run = Pixmap::new(width, height)?;

        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let baseline = px_size * BASELINE_RATIO;
        let stride = width as i32;
        let pixels = run.pixels_mut();

        for (origin_x, metrics, coverage) in glyphs {
            let left = origin_x.round() as i32 + metrics.xmin;
            let top = (baseline - (metrics.ymin as f32 + metrics.height as f32)).round() as i32;
            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let (x, y) = (left + gx as i32, top + gy as i32);
                    if x < 0 || y < 0 || x >= stride || y >= height as i32 {
                        continue;
                    }
                    let alpha = (u16::from(coverage[gy * metrics.width + gx]) * u16::from(a) / 255) as u8;
                    let index = (y * stride + x) as usize;
                    if alpha <= pixels[index].alpha() {
                        continue;
                    }
                    let premul = |c: u8| (u16::from(c) * u16::from(alpha) / 255) as u8;
                    if let Some(px) =
                        PremultipliedColorU8::from_rgba(premul(r), premul(g), premul(b), alpha)
                    {
                        pixels[index] = px;
                    }
                }
            }
        }

        Some(run)
    }
}

/// System fonts followed by the bundled ones, parsed on first use.
fn fonts() -> &'static [Font] {
    FONTS.get_or_init(|| {
        let system = FONT_SEARCH_PATHS.iter().filter_map(|path| {
            let data = std::fs::read(path).ok()?;
            let font = Font::from_bytes(data, FontSettings::default()).ok()?;
            log::debug!("Loaded export font: {path}");
            Some(font)
        });
        let bundled = BUNDLED_FONTS.iter().filter_map(|(name, data)| {
            match Font::from_bytes(*data, FontSettings::default()) {
                Ok(font) => Some(font),
                Err(err) => {
                    log::warn!("Bundled font {name} failed to parse: {err}");
                    None
                }
            }
        });
        system.chain(bundled).collect()
    })
}

fn paint_for(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

impl DrawingSurface for PixmapSurface {
    fn size(&self) -> Vec2 {
        egui::vec2(
            self.pixmap.width() as f32 / self.scale,
            self.pixmap.height() as f32 / self.scale,
        )
    }

    fn clear(&mut self) {
        let [r, g, b, a] = self.background.to_srgba_unmultiplied();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let stroke = tiny_skia::Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint_for(color), &stroke, self.transform(), None);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.pixmap.fill_path(
                &path,
                &paint_for(color),
                FillRule::Winding,
                self.transform(),
                None,
            );
        }
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            let stroke = tiny_skia::Stroke {
                width,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&path, &paint_for(color), &stroke, self.transform(), None);
        }
    }

    fn draw_glyph(&mut self, text: &str, center: Pos2, size: f32, angle: f32, color: Color32) {
        let Some(run) = self.rasterize_run(text, size * self.scale, color) else {
            return;
        };

        // The run is rasterized at device resolution: undo the surface scale
        // before rotating about its center, then re-apply it.
        let transform = self
            .transform()
            .pre_translate(center.x, center.y)
            .pre_concat(Transform::from_rotate(angle.to_degrees()))
            .pre_scale(1.0 / self.scale, 1.0 / self.scale)
            .pre_translate(-(run.width() as f32) / 2.0, -(run.height() as f32) / 2.0);

        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..Default::default()
        };
        self.pixmap.draw_pixmap(0, 0, run.as_ref(), &paint, transform, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_dimensions() {
        let surface = PixmapSurface::new(256, 256, 4, Color32::WHITE).unwrap();
        assert_eq!(surface.pixel_width(), 1024);
        assert_eq!(surface.pixel_height(), 1024);
        assert_eq!(surface.size(), egui::vec2(256.0, 256.0));
    }

    #[test]
    fn test_zero_size_is_unavailable() {
        let result = PixmapSurface::new(0, 256, 4, Color32::WHITE);
        assert!(matches!(result, Err(SketchError::SurfaceUnavailable { .. })));
    }

    #[test]
    fn test_stroke_is_scaled_onto_raster() {
        let mut surface = PixmapSurface::new(16, 16, 2, Color32::WHITE).unwrap();
        surface.stroke_path(&[Pos2::new(2.0, 8.0), Pos2::new(14.0, 8.0)], 2.0, Color32::BLACK);

        let image = surface.to_rgba_image().unwrap();
        assert_eq!(image.get_pixel(16, 16).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(16, 2).0, [255, 255, 255, 255]);
    }

    fn dark_pixels_near(surface: &PixmapSurface, center: (u32, u32), reach: u32) -> usize {
        let image = surface.to_rgba_image().unwrap();
        let (cx, cy) = center;
        (cy - reach..cy + reach)
            .flat_map(|y| (cx - reach..cx + reach).map(move |x| (x, y)))
            .filter(|&(x, y)| image.get_pixel(x, y).0[0] < 128)
            .count()
    }

    #[test]
    fn test_bundled_emoji_rasterize() {
        // Covered by egui's own emoji font, so present on any machine.
        for glyph in ["⭐", "🐸"] {
            let mut surface = PixmapSurface::new(256, 256, 4, Color32::WHITE).unwrap();
            surface.draw_glyph(glyph, Pos2::new(128.0, 128.0), 32.0, 0.0, Color32::BLACK);
            assert!(
                dark_pixels_near(&surface, (512, 512), 64) > 100,
                "{glyph} left no ink"
            );
        }
    }

    #[test]
    fn test_rotated_glyph_stays_centered() {
        let mut surface = PixmapSurface::new(256, 256, 4, Color32::WHITE).unwrap();
        surface.draw_glyph("H", Pos2::new(128.0, 128.0), 32.0, 1.5, Color32::BLACK);
        let near = dark_pixels_near(&surface, (512, 512), 64);
        assert!(near > 100);
        assert_eq!(dark_pixels_near(&surface, (128, 128), 64), 0);
    }

    #[test]
    fn test_fonts_are_shared() {
        let first = PixmapSurface::new(8, 8, 1, Color32::WHITE).unwrap();
        let second = PixmapSurface::new(8, 8, 1, Color32::WHITE).unwrap();
        assert!(std::ptr::eq(first.fonts, second.fonts));
        assert!(!first.fonts.is_empty());
    }

    #[test]
    fn test_png_signature() {
        let surface = PixmapSurface::new(8, 8, 1, Color32::WHITE).unwrap();
        let bytes = surface.encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
