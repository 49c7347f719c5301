mod context;

pub use context::{CUSTOM_STICKER_PROMPT, EditorContext};
