//! Tool parameters applied to newly created items.

use crate::color::SketchColor;
use crate::error::{SketchResult, ensure_finite, ensure_glyph, ensure_positive};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Thin pen preset, in canvas pixels.
pub const THIN: f64 = 2.0;
/// Thick pen preset, in canvas pixels.
pub const THICK: f64 = 6.0;
/// Smallest font size a stamp is placed at.
pub const MIN_STAMP_SIZE: f64 = 12.0;
/// Stamp font size per unit of pen thickness.
pub const STAMP_SIZE_PER_THICKNESS: f64 = 8.0;

/// Glyphs offered before the user adds any of their own.
pub const DEFAULT_STAMPS: [&str; 3] = ["🥏", "🐸", "✋"];

/// What a press on the canvas does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolMode {
    /// Freehand strokes.
    #[default]
    Draw,
    /// Each press places the selected glyph.
    Stamp,
    /// A press starts spinning the selected glyph, the next press commits it.
    StampRotate,
}

/// Parameters for new items. Changing them never alters committed items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolState {
    /// Pen width for strokes; also drives stamp size and offset.
    pub thickness: f64,
    /// Stroke color.
    pub color: SketchColor,
    /// Selected stamp glyph, if any.
    pub glyph: Option<String>,
    /// Rotation applied to stamps, in radians.
    pub rotation: f64,
    /// Whether stamps spin before being committed.
    pub rotate_stamps: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            thickness: THIN,
            color: SketchColor::black(),
            glyph: None,
            rotation: 0.0,
            rotate_stamps: false,
        }
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode, derived from the glyph selection.
    pub fn mode(&self) -> ToolMode {
        match (&self.glyph, self.rotate_stamps) {
            (None, _) => ToolMode::Draw,
            (Some(_), false) => ToolMode::Stamp,
            (Some(_), true) => ToolMode::StampRotate,
        }
    }

    /// Change the pen width. Picking a pen puts the stamp away.
    pub fn set_thickness(&mut self, thickness: f64) -> SketchResult<()> {
        self.thickness = ensure_positive("thickness", thickness)?;
        self.glyph = None;
        log::debug!("Thickness set to {thickness}");
        Ok(())
    }

    pub fn set_color(&mut self, color: SketchColor) {
        self.color = color;
    }

    /// Select a stamp glyph, or return to drawing with `None`.
    ///
    /// Selecting the glyph that is already selected toggles it off.
    pub fn select_glyph(&mut self, glyph: Option<&str>) -> SketchResult<()> {
        let glyph = glyph.map(ensure_glyph).transpose()?;
        self.glyph = match glyph {
            Some(g) if self.glyph.as_deref() == Some(g) => None,
            Some(g) => Some(g.to_string()),
            None => None,
        };
        log::debug!("Tool mode now {:?} ({:?})", self.mode(), self.glyph);
        Ok(())
    }

    pub fn set_rotation(&mut self, rotation: f64) -> SketchResult<()> {
        self.rotation = ensure_finite("rotation", rotation)?;
        Ok(())
    }

    pub fn set_rotate_stamps(&mut self, rotate: bool) {
        self.rotate_stamps = rotate;
    }

    /// Font size a stamp gets at the current thickness.
    pub fn stamp_size(&self) -> f64 {
        stamp_size(self.thickness)
    }

    /// Where a stamp placed at `pointer` is centered.
    pub fn stamp_anchor(&self, pointer: Point) -> Point {
        pointer + stamp_offset(self.thickness)
    }
}

/// Stamp font size for a pen thickness.
pub fn stamp_size(thickness: f64) -> f64 {
    (thickness * STAMP_SIZE_PER_THICKNESS).max(MIN_STAMP_SIZE)
}

/// Downward shift applied to stamps and the cursor marker so they sit where the
/// stroke would be drawn.
pub fn stamp_offset(thickness: f64) -> Vec2 {
    Vec2::new(0.0, (thickness / 2.0).round())
}

/// The set of glyphs offered as stamp tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampPalette {
    glyphs: Vec<String>,
}

impl Default for StampPalette {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_STAMPS.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl StampPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette with the given glyphs, skipping blanks and duplicates.
    pub fn with_glyphs<I, S>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut palette = Self { glyphs: Vec::new() };
        for glyph in glyphs {
            let _ = palette.add_custom(glyph.as_ref());
        }
        palette
    }

    /// Add a user-entered sticker. Returns the trimmed glyph.
    pub fn add_custom(&mut self, text: &str) -> SketchResult<String> {
        let glyph = ensure_glyph(text)?.to_string();
        if !self.contains(&glyph) {
            log::debug!("Added custom stamp {glyph:?}");
            self.glyphs.push(glyph.clone());
        }
        Ok(glyph)
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.glyphs.iter().any(|g| g == glyph)
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
