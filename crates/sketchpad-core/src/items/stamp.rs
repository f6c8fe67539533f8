//! Glyph stamp.

use kurbo::{Affine, Point, Rect};
use serde::{Deserialize, Serialize};

/// A glyph placed at a point and rotated about its own center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stamp {
    /// Text drawn for this stamp, usually a single emoji.
    pub glyph: String,
    /// Center of the glyph in canvas pixels.
    pub position: Point,
    /// Font size in canvas pixels.
    pub size: f64,
    /// Rotation in radians, clockwise in canvas space.
    pub rotation: f64,
}

impl Stamp {
    pub fn new(glyph: impl Into<String>, position: Point, size: f64, rotation: f64) -> Self {
        Self {
            glyph: glyph.into(),
            position,
            size,
            rotation,
        }
    }

    /// Maps glyph-local coordinates (origin at the glyph center) to canvas space.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.position.to_vec2()) * Affine::rotate(self.rotation)
    }

    /// Square of side `size` around the center, enlarged to cover any rotation.
    pub fn bounds(&self) -> Rect {
        let half = self.size / 2.0 * std::f64::consts::SQRT_2;
        Rect::from_center_size(self.position, (half * 2.0, half * 2.0))
    }
}
