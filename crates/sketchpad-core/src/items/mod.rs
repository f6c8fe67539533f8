//! Drawable items held by the display list.

mod stamp;
mod stroke;

pub use stamp::Stamp;
pub use stroke::Stroke;

use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// A single entry of the display list.
///
/// Order within the list is paint order: later items draw over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayItem {
    Stroke(Stroke),
    Stamp(Stamp),
}

impl DisplayItem {
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            DisplayItem::Stroke(stroke) => Some(stroke),
            DisplayItem::Stamp(_) => None,
        }
    }

    pub fn as_stroke_mut(&mut self) -> Option<&mut Stroke> {
        match self {
            DisplayItem::Stroke(stroke) => Some(stroke),
            DisplayItem::Stamp(_) => None,
        }
    }

    pub fn as_stamp(&self) -> Option<&Stamp> {
        match self {
            DisplayItem::Stamp(stamp) => Some(stamp),
            DisplayItem::Stroke(_) => None,
        }
    }

    /// Short name used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DisplayItem::Stroke(_) => "stroke",
            DisplayItem::Stamp(_) => "stamp",
        }
    }

    /// Approximate area covered when painted.
    pub fn bounds(&self) -> Rect {
        match self {
            DisplayItem::Stroke(stroke) => stroke.bounds(),
            DisplayItem::Stamp(stamp) => stamp.bounds(),
        }
    }
}

impl From<Stroke> for DisplayItem {
    fn from(stroke: Stroke) -> Self {
        DisplayItem::Stroke(stroke)
    }
}

impl From<Stamp> for DisplayItem {
    fn from(stamp: Stamp) -> Self {
        DisplayItem::Stamp(stamp)
    }
}
