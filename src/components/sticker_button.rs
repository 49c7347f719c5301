use egui::{Color32, FontId, Response, Sense, Stroke, Ui};

/// Square button showing a sticker glyph.
pub struct StickerButton<'a> {
    pub glyph: &'a str,
    pub selected: bool,
}

impl<'a> StickerButton<'a> {
    pub fn new(glyph: &'a str, selected: bool) -> Self {
        Self { glyph, selected }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                Color32::from_rgb(100, 181, 246) // Light blue when armed
            } else if response.hovered() {
                Color32::from_gray(230)
            } else {
                Color32::from_gray(245)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.glyph,
                FontId::proportional(22.0),
                Color32::BLACK,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    Stroke::new(2.0, Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.glyph)
    }
}
