use crate::SketchApp;
use crate::state::CUSTOM_STICKER_PROMPT;

/// Modal collecting the text for a custom sticker.
///
/// The session asks its prompt synchronously, so the modal only calls into
/// it once the user has confirmed or cancelled.
pub fn sticker_prompt(app: &mut SketchApp, ctx: &egui::Context) {
    let Some(buffer) = app.custom_sticker.as_mut() else {
        return;
    };

    let mut answer: Option<Option<String>> = None;
    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(CUSTOM_STICKER_PROMPT);
            let edit = ui.text_edit_singleline(buffer);
            edit.request_focus();
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    answer = Some(Some(buffer.clone()));
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(None);
                }
            });
        });

    if let Some(answer) = answer {
        app.custom_sticker = None;
        let mut prompt = |_: &str, _: &str| answer.clone();
        app.context.request_custom_sticker(&mut prompt);
    }
}
