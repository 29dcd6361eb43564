use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the detection pipeline and its I/O helpers.
///
/// Input-validation variants (`EmptyImage`, `ShortBuffer`, `InvalidParams`)
/// are raised before any processing stage runs; the remaining variants wrap a
/// failing filesystem or codec operation and carry the offending path.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("image has degenerate dimensions: {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    #[error(
        "pixel buffer too short for {stride}x{height} image: \
         needed {needed}, got {actual}"
    )]
    ShortBuffer {
        stride: usize,
        height: usize,
        needed: usize,
        actual: usize,
    },

    #[error("invalid parameters: {reason}")]
    InvalidParams { reason: String },

    #[error("failed to load or save image '{path}': {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to read or write file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize or parse JSON '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
