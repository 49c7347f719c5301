use egui::Color32;

use crate::SketchApp;
use crate::input::route_event;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("MY STICKER SKETCHPAD");

        let size = app.context.config().canvas_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // The custom sticker window can sit over the canvas.
        let reachable = app.custom_sticker.is_none() && response.contains_pointer();
        app.input.set_canvas_rect(canvas_rect);
        for event in app.input.process_input(ctx, reachable) {
            route_event(&event, &mut app.context);
        }

        let mut surface = PainterSurface::new(painter, canvas_rect, Color32::WHITE);
        app.context.redraw(&mut surface);

        ui.painter().rect_stroke(
            canvas_rect,
            0.0,
            egui::Stroke::new(1.0, Color32::from_gray(120)),
        );
    });
}
