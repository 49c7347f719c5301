use crate::SketchApp;
use crate::components::StickerButton;
use crate::tools::{Thickness, Tool};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Pen");
            ui.horizontal(|ui| {
                for thickness in Thickness::ALL {
                    let enabled = app.context.is_thickness_enabled(thickness);
                    if ui
                        .add_enabled(enabled, egui::Button::new(thickness.label()))
                        .clicked()
                    {
                        app.context.select_thickness(thickness);
                    }
                }
            });

            ui.separator();
            ui.heading("Stickers");

            let armed = app
                .context
                .tool()
                .as_sticker_tool()
                .map(|tool| tool.glyph().to_owned());
            let mut picked = None;
            ui.horizontal_wrapped(|ui| {
                for glyph in app.context.stickers() {
                    let selected = armed.as_deref() == Some(glyph.as_str());
                    if StickerButton::new(glyph, selected).show(ui).clicked() {
                        picked = Some(glyph.clone());
                    }
                }
            });
            if let Some(glyph) = picked {
                app.context.select_sticker(&glyph);
            }

            if ui.button("Custom…").clicked() {
                app.custom_sticker = Some(String::new());
            }

            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(app.context.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    app.context.undo();
                }
                if ui
                    .add_enabled(app.context.can_redo(), egui::Button::new("Redo"))
                    .clicked()
                {
                    app.context.redo();
                }
                if ui.button("Clear").clicked() {
                    app.context.clear();
                }
            });

            if ui.button("Export PNG").clicked() {
                app.export();
            }
            if let Some(status) = &app.export_status {
                ui.small(status);
            }

            ui.separator();

            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.label("Tool");
                    ui.label(app.context.tool().name());
                    ui.end_row();

                    ui.label("Display list");
                    ui.label(app.context.document().len().to_string());
                    ui.end_row();

                    ui.label("Redo stack");
                    ui.label(app.context.history().redo_stack().len().to_string());
                    ui.end_row();
                });
        });
}
