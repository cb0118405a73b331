//! Error types for the scoreboard renderer

use thiserror::Error;

/// Result type alias for render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can escape a render call.
///
/// Degraded conditions (a missing font file, an undecodable embedded photo)
/// are absorbed inside the renderer and never surface here; only failures
/// with no partial-image fallback do.
#[derive(Error, Debug)]
pub enum Error {
    /// The drawing canvas could not be allocated
    #[error("Canvas allocation failed: {0}")]
    Canvas(String),

    /// The finished canvas could not be encoded as PNG
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}
