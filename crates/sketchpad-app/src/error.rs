//! Application errors.

use sketchpad_core::SketchError;
use sketchpad_render::RenderError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Command {index} rejected: {source}")]
    Command {
        index: usize,
        #[source]
        source: SketchError,
    },
    #[error(transparent)]
    Sketch(#[from] SketchError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type AppResult<T> = Result<T, AppError>;
