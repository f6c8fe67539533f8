//! Surface trait and the display list projection.

use kurbo::{Affine, Point};
use sketchpad_core::preview::{RING_WIDTH, marker_color};
use sketchpad_core::{CursorPreview, DisplayItem, DisplayList, SketchColor};

/// Trait for drawing backends.
///
/// Coordinates are canvas pixels; the surface maps them to device pixels
/// through the transform set with [`Surface::set_transform`].
pub trait Surface {
    /// Wipe the whole surface to transparent.
    fn clear(&mut self);

    /// Cover the whole surface with an opaque color, ignoring the transform.
    fn fill_background(&mut self, color: SketchColor);

    /// Transform applied to everything drawn afterwards.
    fn set_transform(&mut self, transform: Affine);

    /// Connected polyline with round caps and joins.
    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: SketchColor);

    /// Glyph centered on `center` at font size `size`, rotated about its center.
    fn draw_glyph(&mut self, glyph: &str, center: Point, size: f64, rotation: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: SketchColor);

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: SketchColor);
}

/// Redraw the whole list: clear, then paint every item in order.
pub fn render<S: Surface + ?Sized>(list: &DisplayList, surface: &mut S) {
    surface.clear();
    draw_items(list, surface);
}

/// Paint every item in order without clearing first.
pub fn draw_items<S: Surface + ?Sized>(list: &DisplayList, surface: &mut S) {
    for item in list {
        draw_item(item, surface);
    }
}

/// Paint a single item.
pub fn draw_item<S: Surface + ?Sized>(item: &DisplayItem, surface: &mut S) {
    match item {
        // A single point has no segment to draw.
        DisplayItem::Stroke(stroke) if !stroke.has_segments() => {}
        DisplayItem::Stroke(stroke) => {
            surface.stroke_polyline(&stroke.points, stroke.width, stroke.color);
        }
        DisplayItem::Stamp(stamp) => {
            surface.draw_glyph(&stamp.glyph, stamp.position, stamp.size, stamp.rotation);
        }
    }
}

/// Redraw the cursor overlay. `None` leaves it empty.
pub fn render_preview<S: Surface + ?Sized>(preview: Option<&CursorPreview>, surface: &mut S) {
    surface.clear();
    match preview {
        None => {}
        Some(CursorPreview::Dot { center, radius }) => {
            surface.fill_circle(*center, *radius, marker_color());
        }
        Some(CursorPreview::Ring { center, radius }) => {
            surface.stroke_circle(*center, *radius, RING_WIDTH, marker_color());
        }
        Some(CursorPreview::Glyph {
            glyph,
            center,
            size,
            rotation,
        }) => {
            surface.draw_glyph(glyph, *center, *size, *rotation);
        }
    }
}
