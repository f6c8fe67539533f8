//! Sketchpad Render Library
//!
//! Projects a display list onto a drawing [`Surface`]. Ships a recording
//! surface for inspection and a tiny-skia raster surface used for PNG export.

mod error;
mod export;
mod raster;
mod recording;
mod renderer;

pub use error::{RenderError, RenderResult};
pub use export::{DEFAULT_SOURCE_SIZE, DEFAULT_TARGET_SIZE, ExportConfig, MAX_TARGET_SIZE, encode_png, export_pixmap, export_png, project_export};
pub use raster::PixmapSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{Surface, draw_item, draw_items, render, render_preview};
