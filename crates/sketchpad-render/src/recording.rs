//! Surface that records draw calls instead of producing pixels.

use crate::renderer::Surface;
use kurbo::{Affine, Point};
use sketchpad_core::SketchColor;

/// A recorded draw call, with the transform that was active at the time.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Background(SketchColor),
    Polyline {
        points: Vec<Point>,
        width: f64,
        color: SketchColor,
        transform: Affine,
    },
    Glyph {
        glyph: String,
        center: Point,
        size: f64,
        rotation: f64,
        transform: Affine,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: SketchColor,
        transform: Affine,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        width: f64,
        color: SketchColor,
        transform: Affine,
    },
}

impl DrawCommand {
    /// Polyline points mapped to device space, if this is a polyline.
    pub fn device_points(&self) -> Option<Vec<Point>> {
        match self {
            DrawCommand::Polyline {
                points, transform, ..
            } => Some(points.iter().map(|p| *transform * *p).collect()),
            _ => None,
        }
    }
}

/// Keeps the draw calls that make up the current surface contents.
///
/// `clear` discards everything recorded so far, so the command list always
/// describes what a raster surface would show.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    transform: Affine,
    commands: Vec<DrawCommand>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            transform: Affine::IDENTITY,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_background(&mut self, color: SketchColor) {
        self.commands.clear();
        self.commands.push(DrawCommand::Background(color));
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: SketchColor) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            width,
            color,
            transform: self.transform,
        });
    }

    fn draw_glyph(&mut self, glyph: &str, center: Point, size: f64, rotation: f64) {
        self.commands.push(DrawCommand::Glyph {
            glyph: glyph.to_string(),
            center,
            size,
            rotation,
            transform: self.transform,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: SketchColor) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
            transform: self.transform,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: SketchColor) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
            transform: self.transform,
        });
    }
}
