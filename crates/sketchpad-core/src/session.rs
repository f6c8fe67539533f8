//! Session controller: turns pointer and tool commands into sketch edits.

use crate::color::SketchColor;
use crate::display_list::DisplayList;
use crate::error::{SketchResult, ensure_finite, ensure_glyph, ensure_positive};
use crate::preview::CursorPreview;
use crate::rotation::{DEFAULT_TURNS_PER_SECOND, RotationAnimation};
use crate::sketch::Sketch;
use crate::tools::{StampPalette, ToolMode, ToolState};
use kurbo::Point;
use std::fmt;
use std::time::Duration;

/// Notification sent to the session's listener.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The display list changed; re-render it.
    DrawingChanged,
    /// The cursor preview moved or changed appearance.
    ToolMoved(CursorPreview),
    /// The pointer left the canvas; hide the cursor preview.
    ToolHidden,
}

/// Which buttons the UI should enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Affordances {
    pub can_undo: bool,
    pub can_redo: bool,
    /// Clear is offered while there is anything drawn or anything to undo.
    pub can_clear: bool,
}

type Listener = Box<dyn FnMut(&SessionEvent)>;

/// One drawing session: the sketch, the tool settings and the input state.
pub struct SketchSession {
    sketch: Sketch,
    tool: ToolState,
    palette: StampPalette,
    /// A stroke is in progress.
    drawing: bool,
    /// Last pointer position while over the canvas.
    pointer: Option<Point>,
    /// Stamp spinning before commit.
    rotation: Option<RotationAnimation>,
    turns_per_second: f64,
    listener: Option<Listener>,
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SketchSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SketchSession")
            .field("sketch", &self.sketch)
            .field("tool", &self.tool)
            .field("palette", &self.palette)
            .field("drawing", &self.drawing)
            .field("pointer", &self.pointer)
            .field("rotation", &self.rotation)
            .field("turns_per_second", &self.turns_per_second)
            .finish_non_exhaustive()
    }
}

impl SketchSession {
    /// Start a session with an empty drawing and default tools.
    pub fn new() -> Self {
        Self {
            sketch: Sketch::new(),
            tool: ToolState::default(),
            palette: StampPalette::default(),
            drawing: false,
            pointer: None,
            rotation: None,
            turns_per_second: DEFAULT_TURNS_PER_SECOND,
            listener: None,
        }
    }

    pub fn with_palette(mut self, palette: StampPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_tool(mut self, tool: ToolState) -> Self {
        self.tool = tool;
        self
    }

    /// Spin rate for rotating stamps.
    pub fn with_turns_per_second(mut self, turns_per_second: f64) -> SketchResult<Self> {
        self.turns_per_second = ensure_positive("turns_per_second", turns_per_second)?;
        Ok(self)
    }

    /// Install the single receiver of session notifications.
    pub fn set_listener(&mut self, listener: impl FnMut(&SessionEvent) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    fn emit(&mut self, event: SessionEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
    }

    fn emit_preview(&mut self) {
        if let Some(preview) = self.preview() {
            self.emit(SessionEvent::ToolMoved(preview));
        }
    }

    // --- Input -----------------------------------------------------------

    /// Press on the canvas.
    pub fn pointer_down(&mut self, point: Point) -> SketchResult<()> {
        self.pointer = Some(point);
        match (self.tool.mode(), self.tool.glyph.clone()) {
            (ToolMode::Stamp, Some(glyph)) => {
                let anchor = self.tool.stamp_anchor(point);
                self.sketch
                    .place_stamp(&glyph, anchor, self.tool.stamp_size(), self.tool.rotation)?;
                self.emit(SessionEvent::DrawingChanged);
            }
            (ToolMode::StampRotate, Some(glyph)) => {
                if !self.commit_rotation()? {
                    self.rotation = Some(RotationAnimation::new(
                        glyph,
                        self.tool.stamp_anchor(point),
                        self.tool.stamp_size(),
                        self.tool.rotation,
                        self.turns_per_second,
                    ));
                    log::debug!("Started rotating stamp at ({}, {})", point.x, point.y);
                    self.emit_preview();
                }
            }
            _ => {
                self.sketch
                    .begin_stroke(point, self.tool.thickness, self.tool.color)?;
                self.drawing = true;
                self.emit(SessionEvent::DrawingChanged);
            }
        }
        Ok(())
    }

    /// Pointer moved over the canvas.
    pub fn pointer_move(&mut self, point: Point) {
        self.pointer = Some(point);
        self.emit_preview();

        if self.drawing && self.sketch.extend_stroke(point) {
            self.emit(SessionEvent::DrawingChanged);
        }
    }

    /// Press released: the stroke in progress is finished.
    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    /// Pointer left the canvas: finish the stroke and hide the preview.
    ///
    /// A spinning stamp stays pending until the next press or tool change.
    pub fn pointer_leave(&mut self) {
        self.drawing = false;
        self.pointer = None;
        self.emit(SessionEvent::ToolHidden);
    }

    /// Advance the spinning stamp by one frame. Returns false when nothing spins.
    pub fn advance_frame(&mut self, dt: Duration) -> bool {
        let Some(rotation) = self.rotation.as_mut() else {
            return false;
        };
        rotation.advance(dt);
        self.emit_preview();
        true
    }

    /// Commit the spinning stamp at its current angle, if there is one.
    fn commit_rotation(&mut self) -> SketchResult<bool> {
        let Some(rotation) = self.rotation.take() else {
            return Ok(false);
        };
        let angle = rotation.angle();
        if let Err(err) = self
            .sketch
            .place_stamp(&rotation.glyph, rotation.anchor, rotation.size, angle)
        {
            self.rotation = Some(rotation);
            return Err(err);
        }
        log::debug!("Committed rotating stamp at {angle:.3} rad");
        self.emit(SessionEvent::DrawingChanged);
        Ok(true)
    }

    // --- Tools -----------------------------------------------------------

    /// Pick a pen width. Returns to drawing mode.
    pub fn set_thickness(&mut self, thickness: f64) -> SketchResult<()> {
        ensure_positive("thickness", thickness)?;
        self.commit_rotation()?;
        self.tool.set_thickness(thickness)?;
        self.emit_preview();
        Ok(())
    }

    pub fn set_color(&mut self, color: SketchColor) {
        self.tool.set_color(color);
        self.emit_preview();
    }

    /// Select a stamp (toggling if already selected) or go back to drawing.
    ///
    /// A stamp still spinning is committed first.
    pub fn select_glyph(&mut self, glyph: Option<&str>) -> SketchResult<()> {
        if let Some(glyph) = glyph {
            ensure_glyph(glyph)?;
        }
        self.commit_rotation()?;
        self.tool.select_glyph(glyph)?;
        self.emit_preview();
        Ok(())
    }

    /// Rotation used for stamps placed from now on.
    pub fn set_rotation(&mut self, rotation: f64) -> SketchResult<()> {
        ensure_finite("rotation", rotation)?;
        self.tool.set_rotation(rotation)?;
        self.emit_preview();
        Ok(())
    }

    /// Choose between plain stamping and spin-then-commit stamping.
    pub fn set_rotate_stamps(&mut self, rotate: bool) -> SketchResult<()> {
        if !rotate {
            self.commit_rotation()?;
        }
        self.tool.set_rotate_stamps(rotate);
        self.emit_preview();
        Ok(())
    }

    /// Add a custom sticker to the palette and select it.
    pub fn add_custom_glyph(&mut self, text: &str) -> SketchResult<String> {
        let glyph = self.palette.add_custom(text)?;
        if self.tool.glyph.as_deref() != Some(glyph.as_str()) {
            self.select_glyph(Some(&glyph))?;
        }
        Ok(glyph)
    }

    // --- History ---------------------------------------------------------

    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.drawing = false;
        let changed = self.sketch.undo();
        if changed {
            self.emit(SessionEvent::DrawingChanged);
        }
        changed
    }

    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.drawing = false;
        let changed = self.sketch.redo();
        if changed {
            self.emit(SessionEvent::DrawingChanged);
        }
        changed
    }

    pub fn clear(&mut self) {
        self.drawing = false;
        self.sketch.clear();
        self.emit(SessionEvent::DrawingChanged);
    }

    // --- Queries ---------------------------------------------------------

    pub fn affordances(&self) -> Affordances {
        Affordances {
            can_undo: self.sketch.can_undo(),
            can_redo: self.sketch.can_redo(),
            can_clear: !self.sketch.display_list().is_empty() || self.sketch.can_undo(),
        }
    }

    /// What the overlay should show right now, if anything.
    pub fn preview(&self) -> Option<CursorPreview> {
        if let Some(rotation) = &self.rotation {
            return Some(CursorPreview::glyph(
                &rotation.glyph,
                rotation.anchor,
                rotation.size,
                rotation.angle(),
            ));
        }
        self.pointer
            .map(|pointer| CursorPreview::compute(&self.tool, pointer))
    }

    pub fn display_list(&self) -> &DisplayList {
        self.sketch.display_list()
    }

    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn palette(&self) -> &StampPalette {
        &self.palette
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }
}
