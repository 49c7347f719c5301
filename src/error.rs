use thiserror::Error;

/// Errors raised at the edges of the sketchpad.
///
/// Editing itself (commit, undo, redo, clear, tool switches, gestures) never
/// fails; only acquiring a surface and producing artifacts can.
#[derive(Debug, Error)]
pub enum SketchError {
    /// A paint surface of the requested size could not be created
    #[error("drawing surface unavailable ({width}x{height})")]
    SurfaceUnavailable { width: u32, height: u32 },

    /// The rendered pixels could not be encoded
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// The artifact could not be written out
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type SketchResult<T> = Result<T, SketchError>;
