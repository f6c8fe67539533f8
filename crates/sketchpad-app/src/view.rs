//! Canvas and overlay layers kept in sync with a session.

use crate::error::AppResult;
use sketchpad_core::{CursorPreview, SessionEvent, SketchSession};
use sketchpad_render::{PixmapSurface, render, render_preview};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// State written by the session listener and read back on refresh.
#[derive(Debug, Default)]
struct Pending {
    drawing_dirty: Cell<bool>,
    cursor_dirty: Cell<bool>,
    cursor: RefCell<Option<CursorPreview>>,
}

/// The drawing layer plus the cursor overlay on top of it.
#[derive(Debug)]
pub struct CanvasView {
    canvas: PixmapSurface,
    overlay: PixmapSurface,
    pending: Rc<Pending>,
    redraws: usize,
}

impl CanvasView {
    pub fn new(size: u32) -> AppResult<Self> {
        Ok(Self {
            canvas: PixmapSurface::new(size, size)?,
            overlay: PixmapSurface::new(size, size)?,
            pending: Rc::new(Pending::default()),
            redraws: 0,
        })
    }

    /// Subscribe to `session` notifications.
    pub fn attach(&self, session: &mut SketchSession) {
        let pending = Rc::clone(&self.pending);
        session.set_listener(move |event| match event {
            SessionEvent::DrawingChanged => pending.drawing_dirty.set(true),
            SessionEvent::ToolMoved(preview) => {
                *pending.cursor.borrow_mut() = Some(preview.clone());
                pending.cursor_dirty.set(true);
            }
            SessionEvent::ToolHidden => {
                *pending.cursor.borrow_mut() = None;
                pending.cursor_dirty.set(true);
            }
        });
    }

    /// Repaint whichever layers were invalidated since the last call.
    pub fn refresh(&mut self, session: &SketchSession) {
        if self.pending.drawing_dirty.replace(false) {
            render(session.display_list(), &mut self.canvas);
            self.redraws += 1;
            log::trace!("Redrew {} items", session.display_list().len());
        }
        if self.pending.cursor_dirty.replace(false) {
            let cursor = self.pending.cursor.borrow();
            render_preview(cursor.as_ref(), &mut self.overlay);
        }
    }

    pub fn canvas(&self) -> &PixmapSurface {
        &self.canvas
    }

    pub fn overlay(&self) -> &PixmapSurface {
        &self.overlay
    }

    pub fn cursor(&self) -> Option<CursorPreview> {
        self.pending.cursor.borrow().clone()
    }

    /// Number of full canvas redraws so far.
    pub fn redraws(&self) -> usize {
        self.redraws
    }
}
