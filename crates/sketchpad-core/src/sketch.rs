//! The display list paired with its undo history.

use crate::color::SketchColor;
use crate::display_list::DisplayList;
use crate::error::{SketchResult, ensure_finite, ensure_glyph, ensure_positive};
use crate::history::History;
use crate::items::{DisplayItem, Stamp, Stroke};
use kurbo::Point;

/// A drawing and its history.
///
/// Every operation that starts new user work (a stroke, a stamp, a clear)
/// checkpoints the list as it was just before the change. Extending a stroke is
/// not a checkpoint, so undo always removes a whole stroke.
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    list: DisplayList,
    history: History,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `point`. Returns the index of the stroke.
    pub fn begin_stroke(&mut self, point: Point, width: f64, color: SketchColor) -> SketchResult<usize> {
        let width = ensure_positive("width", width)?;
        self.history.checkpoint(&self.list);
        let index = self.list.push(Stroke::starting_at(point, width, color));
        log::debug!("Began stroke #{index} at ({}, {}) width {width}", point.x, point.y);
        Ok(index)
    }

    /// Append `point` to the stroke in progress.
    ///
    /// Returns `false` when the last item is not a stroke (or there is none).
    pub fn extend_stroke(&mut self, point: Point) -> bool {
        self.list.extend_last_stroke(point)
    }

    /// Place a glyph centered on `point`. Returns the index of the stamp.
    pub fn place_stamp(&mut self, glyph: &str, point: Point, size: f64, rotation: f64) -> SketchResult<usize> {
        let glyph = ensure_glyph(glyph)?;
        let size = ensure_positive("size", size)?;
        let rotation = ensure_finite("rotation", rotation)?;
        self.history.checkpoint(&self.list);
        let index = self.list.push(Stamp::new(glyph, point, size, rotation));
        log::debug!("Placed stamp #{index} {glyph:?} at ({}, {}) size {size}", point.x, point.y);
        Ok(index)
    }

    /// Remove everything. The previous contents stay reachable through undo.
    pub fn clear(&mut self) {
        self.history.checkpoint(&self.list);
        self.list.clear();
        log::debug!("Cleared drawing");
    }

    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.list)
    }

    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.list)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Independent deep copy of the live list.
    pub fn snapshot(&self) -> DisplayList {
        self.list.snapshot()
    }

    /// Replace the live list without recording history.
    pub fn restore(&mut self, snapshot: DisplayList) {
        self.list = snapshot;
    }

    /// Read-only view of the live list, for renderers.
    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    pub fn items(&self) -> &[DisplayItem] {
        self.list.items()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
