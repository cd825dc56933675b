// src/error.rs
use crate::storage::StorageError;
use memberdoc_layout::LayoutError;
use memberdoc_render_core::RenderError;
use thiserror::Error;

/// The top-level error type for document generation and the CLI.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Layout configuration rejected: {0}")]
    Layout(#[from] LayoutError),

    #[error("Storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
