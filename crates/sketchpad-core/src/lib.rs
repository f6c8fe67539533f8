//! Sketchpad Core Library
//!
//! Display list, undo/redo history and the session controller behind the
//! Sketchpad drawing surface. Rendering lives in `sketchpad-render`; this crate
//! never touches pixels.

pub mod color;
pub mod display_list;
pub mod error;
pub mod history;
pub mod items;
pub mod preview;
pub mod rotation;
pub mod session;
pub mod sketch;
pub mod tools;

pub use color::SketchColor;
pub use display_list::DisplayList;
pub use error::{SketchError, SketchResult};
pub use history::History;
pub use items::{DisplayItem, Stamp, Stroke};
pub use preview::CursorPreview;
pub use rotation::RotationAnimation;
pub use session::{Affordances, SessionEvent, SketchSession};
pub use sketch::Sketch;
pub use tools::{StampPalette, ToolMode, ToolState};

/// Re-export kurbo for downstream crates.
pub use kurbo;
/// Re-export peniko for downstream crates.
pub use peniko;
