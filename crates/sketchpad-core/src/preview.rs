//! Cursor preview shown under the pointer.

use crate::color::SketchColor;
use crate::tools::{ToolMode, ToolState};
use kurbo::Point;

/// Radius of the dot shown for thin pens.
pub const DOT_RADIUS: f64 = 1.5;
/// Outline width of the ring shown for thick pens.
pub const RING_WIDTH: f64 = 1.0;
/// Pens up to this thickness get a dot instead of a ring.
const DOT_MAX_THICKNESS: f64 = 2.0;

/// Ink for cursor markers: black at 90% opacity.
pub fn marker_color() -> SketchColor {
    SketchColor::new(0, 0, 0, 230)
}

/// What the overlay draws at the pointer.
///
/// Computed from the same offset and size rules used when committing items, so
/// the preview always matches what a press would produce.
#[derive(Debug, Clone, PartialEq)]
pub enum CursorPreview {
    /// Filled dot for thin pens.
    Dot { center: Point, radius: f64 },
    /// Outline circle as wide as the pen.
    Ring { center: Point, radius: f64 },
    /// The stamp that a press would place.
    Glyph {
        glyph: String,
        center: Point,
        size: f64,
        rotation: f64,
    },
}

impl CursorPreview {
    /// Preview for `tool` with the pointer at `pointer`.
    pub fn compute(tool: &ToolState, pointer: Point) -> Self {
        let center = tool.stamp_anchor(pointer);
        match (tool.mode(), tool.glyph.as_deref()) {
            (ToolMode::Stamp | ToolMode::StampRotate, Some(glyph)) => {
                Self::glyph(glyph, center, tool.stamp_size(), tool.rotation)
            }
            _ if tool.thickness <= DOT_MAX_THICKNESS => CursorPreview::Dot {
                center,
                radius: DOT_RADIUS,
            },
            _ => CursorPreview::Ring {
                center,
                radius: tool.thickness / 2.0,
            },
        }
    }

    /// Glyph preview at an explicit center, used while a stamp is spinning.
    pub fn glyph(glyph: &str, center: Point, size: f64, rotation: f64) -> Self {
        CursorPreview::Glyph {
            glyph: glyph.to_string(),
            center,
            size,
            rotation,
        }
    }

    pub fn center(&self) -> Point {
        match self {
            CursorPreview::Dot { center, .. }
            | CursorPreview::Ring { center, .. }
            | CursorPreview::Glyph { center, .. } => *center,
        }
    }
}
