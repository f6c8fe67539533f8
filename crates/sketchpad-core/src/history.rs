//! Linear undo/redo over display list snapshots.

use crate::display_list::DisplayList;

/// Undo and redo stacks of whole-list snapshots.
///
/// There is no depth limit. Snapshots are owned values, so restoring one moves
/// it into the live slot and the displaced live list moves onto the opposite
/// stack; nothing is ever shared between the two.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// States from before each checkpointed edit, oldest first.
    undo_stack: Vec<DisplayList>,
    /// States superseded by undo, most recently undone last.
    redo_stack: Vec<DisplayList>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `current` as the state to return to, before a new edit is applied.
    ///
    /// A new edit invalidates any undone future, so the redo stack is emptied.
    pub fn checkpoint(&mut self, current: &DisplayList) {
        self.undo_stack.push(current.snapshot());
        self.redo_stack.clear();
        log::debug!(
            "History checkpoint ({} items), undo depth {}",
            current.len(),
            self.undo_stack.len()
        );
    }

    /// Step back one checkpoint.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self, live: &mut DisplayList) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(live, previous);
        self.redo_stack.push(current);
        log::debug!(
            "Undo: {} items now live (undo {}, redo {})",
            live.len(),
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Step forward to the most recently undone state.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self, live: &mut DisplayList) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(live, next);
        self.undo_stack.push(current);
        log::debug!(
            "Redo: {} items now live (undo {}, redo {})",
            live.len(),
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Forget all recorded states.
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Stroke;
    use crate::SketchColor;
    use kurbo::Point;

    fn one_stroke() -> DisplayList {
        let mut list = DisplayList::new();
        list.push(Stroke::starting_at(Point::ZERO, 2.0, SketchColor::black()));
        list
    }

    #[test]
    fn test_undo_empty_stack() {
        let mut history = History::new();
        let mut live = one_stroke();

        assert!(!history.can_undo());
        assert!(!history.undo(&mut live));
        assert!(!history.can_redo());
        assert!(!history.redo(&mut live));
        assert_eq!(live, one_stroke());
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = History::new();
        let mut live = DisplayList::new();

        history.checkpoint(&live);
        live.push(Stroke::starting_at(Point::ZERO, 2.0, SketchColor::black()));

        assert!(history.undo(&mut live));
        assert!(live.is_empty());
        assert!(history.can_redo());

        assert!(history.redo(&mut live));
        assert_eq!(live, one_stroke());
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_checkpoint_clears_redo() {
        let mut history = History::new();
        let mut live = DisplayList::new();

        history.checkpoint(&live);
        live = one_stroke();
        assert!(history.undo(&mut live));
        assert_eq!(history.redo_depth(), 1);

        history.checkpoint(&live);
        assert!(!history.can_redo());
        assert!(!history.redo(&mut live));
    }

    #[test]
    fn test_checkpoint_copies_state() {
        let mut history = History::new();
        let mut live = one_stroke();

        history.checkpoint(&live);
        live.extend_last_stroke(Point::new(3.0, 3.0));

        assert!(history.undo(&mut live));
        assert_eq!(live, one_stroke());
    }

    #[test]
    fn test_no_depth_limit() {
        let mut history = History::new();
        let live = DisplayList::new();
        for _ in 0..500 {
            history.checkpoint(&live);
        }
        assert_eq!(history.undo_depth(), 500);
    }

    #[test]
    fn test_reset() {
        let mut history = History::new();
        let mut live = one_stroke();
        history.checkpoint(&live);
        history.checkpoint(&live);
        history.undo(&mut live);
        history.reset();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
