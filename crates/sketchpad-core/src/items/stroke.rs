//! Freehand stroke.

use crate::color::SketchColor;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand polyline drawn with a fixed width and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Points in insertion order.
    pub points: Vec<Point>,
    /// Line width in canvas pixels.
    pub width: f64,
    /// Line color.
    pub color: SketchColor,
}

impl Stroke {
    /// Create a stroke with no points yet.
    pub fn new(width: f64, color: SketchColor) -> Self {
        Self {
            points: Vec::new(),
            width,
            color,
        }
    }

    /// Create a stroke whose polyline begins at `point`.
    pub fn starting_at(point: Point, width: f64, color: SketchColor) -> Self {
        Self {
            points: vec![point],
            width,
            color,
        }
    }

    /// Append a point to the polyline.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A polyline needs at least one segment to leave a mark.
    pub fn has_segments(&self) -> bool {
        self.points.len() >= 2
    }

    /// Polyline path: move to the first point, line to every following one.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();

        let Some((first, rest)) = self.points.split_first() else {
            return path;
        };

        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }

        path
    }

    /// Bounding box of the points, grown by half the line width.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };

        let rect = self
            .points
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p));
        rect.inflate(self.width / 2.0, self.width / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_stroke_creation() {
        let stroke = Stroke::new(2.0, SketchColor::black());
        assert!(stroke.is_empty());
        assert!(!stroke.has_segments());
    }

    #[test]
    fn test_add_points() {
        let mut stroke = Stroke::starting_at(Point::new(0.0, 0.0), 2.0, SketchColor::black());
        assert!(!stroke.has_segments());
        stroke.add_point(Point::new(10.0, 10.0));
        assert_eq!(stroke.len(), 2);
        assert!(stroke.has_segments());
    }

    #[test]
    fn test_to_path() {
        let stroke = Stroke {
            points: vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(5.0, 5.0)],
            width: 2.0,
            color: SketchColor::black(),
        };
        let els: Vec<PathEl> = stroke.to_path().elements().to_vec();
        assert_eq!(
            els,
            vec![
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(5.0, 0.0)),
                PathEl::LineTo(Point::new(5.0, 5.0)),
            ]
        );
        assert!(Stroke::new(2.0, SketchColor::black()).to_path().elements().is_empty());
    }

    #[test]
    fn test_bounds() {
        let stroke = Stroke {
            points: vec![Point::new(0.0, 0.0), Point::new(100.0, 50.0), Point::new(50.0, 100.0)],
            width: 4.0,
            color: SketchColor::black(),
        };

        let bounds = stroke.bounds();
        assert!((bounds.x0 + 2.0).abs() < f64::EPSILON);
        assert!((bounds.y0 + 2.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 102.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 102.0).abs() < f64::EPSILON);
    }
}
