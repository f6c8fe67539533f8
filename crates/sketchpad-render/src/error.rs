//! Render and export errors.

use sketchpad_core::SketchColor;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid size: {0}")]
    InvalidSize(String),
    #[error("Export background must be opaque, got {0}")]
    InvalidBackground(SketchColor),
    #[error("Pixmap allocation failed for {width}x{height}")]
    Pixmap { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;
