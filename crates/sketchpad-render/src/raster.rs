//! tiny-skia raster surface.

use crate::error::{RenderError, RenderResult};
use crate::renderer::Surface;
use kurbo::{Affine, Point};
use sketchpad_core::SketchColor;
use std::fmt::Write;
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Transform};
use usvg::fontdb::{Database, Family, Query};

/// Color used for glyph fills; emoji fonts bring their own colors.
const GLYPH_FILL: &str = "#000000";

/// Tried in order when the default serif face is not installed.
const SERIF_FALLBACKS: [&str; 6] = [
    "DejaVu Serif",
    "Liberation Serif",
    "Noto Serif",
    "FreeSerif",
    "Georgia",
    "DejaVu Sans",
];

/// CPU raster surface backed by a tiny-skia [`Pixmap`].
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Affine,
    /// Created on first glyph; loading system fonts is slow.
    glyphs: Option<GlyphRasterizer>,
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("transform", &self.transform)
            .finish_non_exhaustive()
    }
}

impl PixmapSurface {
    /// Transparent surface of the given device size.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::Pixmap { width, height })?;
        Ok(Self {
            pixmap,
            transform: Affine::IDENTITY,
            glyphs: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha color of one device pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<SketchColor> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            SketchColor::new(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Straight-alpha RGBA8 bytes, row by row.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Whether any font faces are available for glyphs. Loads them on first call.
    pub fn has_glyph_fonts(&mut self) -> bool {
        self.glyph_rasterizer().has_fonts()
    }

    fn glyph_rasterizer(&mut self) -> &GlyphRasterizer {
        self.glyphs.get_or_insert_with(GlyphRasterizer::with_system_fonts)
    }

    fn skia_transform(&self) -> Transform {
        to_skia_transform(self.transform)
    }
}

fn to_skia_transform(affine: Affine) -> Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
}

fn paint_for(color: SketchColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

impl Surface for PixmapSurface {
    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn fill_background(&mut self, color: SketchColor) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: SketchColor) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for point in rest {
            pb.line_to(point.x as f32, point.y as f32);
        }
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = tiny_skia::Stroke {
            width: width as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        };
        let transform = self.skia_transform();
        self.pixmap
            .stroke_path(&path, &paint_for(color), &stroke, transform, None);
    }

    fn draw_glyph(&mut self, glyph: &str, center: Point, size: f64, rotation: f64) {
        let placement = self.transform * Affine::translate(center.to_vec2()) * Affine::rotate(rotation);
        let rasterizer = self.glyphs.get_or_insert_with(GlyphRasterizer::with_system_fonts);
        rasterizer.draw(&mut self.pixmap, glyph, size, to_skia_transform(placement));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: SketchColor) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32) else {
            return;
        };
        let transform = self.skia_transform();
        self.pixmap
            .fill_path(&path, &paint_for(color), FillRule::Winding, transform, None);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: SketchColor) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32) else {
            return;
        };
        let stroke = tiny_skia::Stroke {
            width: width as f32,
            ..Default::default()
        };
        let transform = self.skia_transform();
        self.pixmap
            .stroke_path(&path, &paint_for(color), &stroke, transform, None);
    }
}

/// Renders glyphs through usvg text layout onto a pixmap.
struct GlyphRasterizer {
    options: usvg::Options<'static>,
}

impl GlyphRasterizer {
    fn with_system_fonts() -> Self {
        let mut options = usvg::Options::default();
        let fontdb = options.fontdb_mut();
        fontdb.load_system_fonts();
        log::debug!("Loaded {} font faces for glyph rendering", fontdb.len());
        resolve_serif_family(fontdb);
        Self { options }
    }

    fn has_fonts(&self) -> bool {
        !self.options.fontdb.is_empty()
    }

    /// Draw `glyph` centered on the origin of `transform`.
    fn draw(&self, pixmap: &mut Pixmap, glyph: &str, size: f64, transform: Transform) {
        let svg = glyph_svg(glyph, size);
        match usvg::Tree::from_str(&svg, &self.options) {
            Ok(tree) => resvg::render(&tree, transform, &mut pixmap.as_mut()),
            Err(e) => log::warn!("Skipping glyph {glyph:?}: {e}"),
        }
    }
}

/// Point the generic `serif` family at a face that is installed.
///
/// fontdb defaults it to "Times New Roman", and usvg drops text whose family
/// does not resolve. Glyphs the chosen face lacks (emoji) fall back to any
/// face that has them.
fn resolve_serif_family(fontdb: &mut Database) {
    let query = Query {
        families: &[Family::Serif],
        ..Query::default()
    };
    if fontdb.query(&query).is_some() {
        return;
    }

    let installed = |name: &str| {
        fontdb
            .faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    };
    let family = SERIF_FALLBACKS
        .into_iter()
        .find(|name| installed(*name))
        .map(str::to_string)
        .or_else(|| {
            fontdb
                .faces()
                .find_map(|face| face.families.first().map(|(family, _)| family.clone()))
        });

    match family {
        Some(family) => {
            log::debug!("Using {family:?} as the serif family");
            fontdb.set_serif_family(family);
        }
        None => log::warn!("No fonts installed; stamps will not be drawn"),
    }
}

/// One text element centered on the origin, horizontally and vertically.
fn glyph_svg(glyph: &str, size: f64) -> String {
    let mut svg = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1">"#);
    let _ = write!(
        svg,
        r#"<text x="0" y="0" font-size="{size}" font-family="serif" text-anchor="middle" dominant-baseline="central" fill="{GLYPH_FILL}">{}</text>"#,
        escape_xml(glyph)
    );
    svg.push_str("</svg>");
    svg
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
