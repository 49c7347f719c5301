use crate::config::SketchConfig;
use crate::event::EditorEvent;
use crate::export::{ArtifactSink, FileSink};
use crate::input::{InputHandler, handle_shortcuts};
use crate::panels::{central_panel, sticker_prompt, tools_panel};
use crate::state::EditorContext;

pub struct SketchApp {
    pub(crate) context: EditorContext,
    pub(crate) input: InputHandler,
    sink: FileSink,
    /// Text of the custom sticker modal while it is open
    pub(crate) custom_sticker: Option<String>,
    pub(crate) export_status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        let context = EditorContext::new(config);

        // Every state change asks egui for a fresh frame.
        let egui_ctx = cc.egui_ctx.clone();
        context
            .event_bus()
            .subscribe(Box::new(move |event: &EditorEvent| {
                if event.redraw_kind().is_some() {
                    egui_ctx.request_repaint();
                }
            }));

        Self {
            context,
            input: InputHandler::new(),
            sink: FileSink::new("."),
            custom_sticker: None,
            export_status: None,
        }
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    pub(crate) fn export(&mut self) {
        let name = self.context.config().export_file_name.clone();
        let result = self
            .context
            .export_png()
            .and_then(|bytes| self.sink.deliver(&name, &bytes));

        self.export_status = Some(match result {
            Ok(path) => format!("Saved {}", path.display()),
            Err(err) => {
                log::error!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.custom_sticker.is_none() {
            handle_shortcuts(ctx, &mut self.context);
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
        sticker_prompt(self, ctx);
    }
}
