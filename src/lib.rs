#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod panels;
pub mod preview;
pub mod prompt;
pub mod renderer;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::SketchApp;
pub use command::{Command, CommandHistory};
pub use config::SketchConfig;
pub use document::Document;
pub use element::{ElementType, Positioned, Renderable, StickerMark, Stroke};
pub use error::{SketchError, SketchResult};
pub use event::{EditorEvent, EventBus, EventHandler};
pub use input::{InputEvent, InputHandler};
pub use preview::LivePreview;
pub use prompt::TextPrompt;
pub use renderer::{RedrawKind, Renderer};
pub use state::EditorContext;
pub use surface::{DrawingSurface, PaintOp, PixmapSurface, RecordingSurface};
pub use tools::{RotationSource, Thickness, Tool, ToolType};
