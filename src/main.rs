#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use sticker_sketchpad::{SketchApp, SketchConfig};

/// Optional path to a JSON config file
const CONFIG_ENV: &str = "STICKER_SKETCHPAD_CONFIG";

fn load_config() -> SketchConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return SketchConfig::default();
    };
    match SketchConfig::load(&path) {
        Ok(config) => {
            log::info!("Loaded config from {path}");
            config
        }
        Err(err) => {
            log::warn!("Ignoring config {path}: {err}");
            SketchConfig::default()
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sticker Sketchpad")
            .with_inner_size([520.0, 380.0])
            .with_min_inner_size([460.0, 340.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sticker Sketchpad",
        native_options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc, config)))),
    )
}
