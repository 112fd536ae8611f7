use condo_layout::LayoutError;
use condo_render_lopdf::{ImageDecodeError, RenderError};
use condo_traits::ResourceError;
use thiserror::Error;

/// A comprehensive error type for the report generation pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid input: {0}")]
    Input(#[from] serde_json::Error),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Background generation task failed: {0}")]
    Task(String),
}

/// Why an image slot could not be filled.
///
/// Never fatal: the renderer logs it and leaves the slot out.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Resource(#[from] ResourceError),

    #[error("{0}")]
    Decode(#[from] ImageDecodeError),

    #[error("empty image reference")]
    EmptyUri,
}
