//! Export projection tests against decoded PNG output.

use kurbo::Point;
use sketchpad_core::{DisplayList, Sketch, SketchColor};
use sketchpad_render::{ExportConfig, PixmapSurface, Surface, export_pixmap, export_png, render};

fn decode(png_data: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(std::io::Cursor::new(png_data));
    let mut reader = decoder.read_info().expect("png header");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("png frame");
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

fn rgba_at(data: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

fn diagonal_sketch() -> Sketch {
    let mut sketch = Sketch::new();
    sketch
        .begin_stroke(Point::new(0.0, 0.0), 2.0, SketchColor::black())
        .unwrap();
    sketch.extend_stroke(Point::new(256.0, 256.0));
    sketch
}

#[test]
fn test_export_diagonal_spans_full_target() {
    let sketch = diagonal_sketch();
    let png_data = export_png(sketch.display_list(), &ExportConfig::default()).unwrap();
    let (width, height, data) = decode(&png_data);
    assert_eq!((width, height), (1024, 1024));

    // Ink runs corner to corner.
    assert_eq!(rgba_at(&data, width, 1, 1), [0, 0, 0, 255]);
    assert_eq!(rgba_at(&data, width, 512, 512), [0, 0, 0, 255]);
    assert_eq!(rgba_at(&data, width, 1022, 1022), [0, 0, 0, 255]);

    // Away from the line the opaque background shows.
    assert_eq!(rgba_at(&data, width, 1000, 20), [255, 255, 255, 255]);
    assert_eq!(rgba_at(&data, width, 20, 1000), [255, 255, 255, 255]);
}

#[test]
fn test_export_line_width_is_scaled() {
    let mut sketch = Sketch::new();
    sketch
        .begin_stroke(Point::new(16.0, 128.0), 2.0, SketchColor::black())
        .unwrap();
    sketch.extend_stroke(Point::new(240.0, 128.0));

    let surface = export_pixmap(sketch.display_list(), &ExportConfig::default()).unwrap();
    // 2px at 4x is 8px, centered on y = 512.
    for y in 509..515 {
        assert_eq!(surface.pixel(512, y), Some(SketchColor::black()), "row {y}");
    }
    assert_eq!(surface.pixel(512, 520), Some(SketchColor::white()));
}

#[test]
fn test_export_matches_render_at_same_size() {
    let mut sketch = diagonal_sketch();
    sketch
        .begin_stroke(Point::new(10.0, 200.0), 6.0, SketchColor::new(255, 0, 0, 255))
        .unwrap();
    sketch.extend_stroke(Point::new(60.0, 230.0));
    sketch.extend_stroke(Point::new(100.0, 250.0));

    let mut canvas = PixmapSurface::new(256, 256).unwrap();
    render(sketch.display_list(), &mut canvas);

    let config = ExportConfig::default().with_target_size(256);
    let exported = export_pixmap(sketch.display_list(), &config).unwrap();

    for y in 0..256 {
        for x in 0..256 {
            let drawn = canvas.pixel(x, y).unwrap();
            let out = exported.pixel(x, y).unwrap();
            if drawn.a == 0 {
                assert_eq!(out, SketchColor::white(), "pixel ({x}, {y})");
            } else if drawn.a == 255 {
                assert_eq!(out, drawn, "pixel ({x}, {y})");
            }
        }
    }
}

#[test]
fn test_export_does_not_touch_model() {
    let sketch = diagonal_sketch();
    let before: DisplayList = sketch.snapshot();
    let _ = export_png(sketch.display_list(), &ExportConfig::default().with_target_size(64)).unwrap();
    assert_eq!(sketch.display_list(), &before);
    assert!(sketch.can_undo());
}

#[test]
fn test_export_with_stamp_draws_glyph() {
    let mut sketch = Sketch::new();
    sketch
        .place_stamp("H", Point::new(128.0, 128.0), 32.0, 0.3)
        .unwrap();
    let config = ExportConfig::default().with_target_size(128);
    let png_data = export_png(sketch.display_list(), &config).unwrap();
    let (width, height, data) = decode(&png_data);
    assert_eq!((width, height), (128, 128));

    if !PixmapSurface::new(1, 1).unwrap().has_glyph_fonts() {
        eprintln!("no fonts installed, skipping glyph pixel check");
        return;
    }
    // 32px at half scale is a 16px glyph centered on (64, 64).
    let mut inked = 0;
    for y in 48..80 {
        for x in 48..80 {
            if rgba_at(&data, width, x, y) != [255, 255, 255, 255] {
                inked += 1;
            }
        }
    }
    assert!(inked > 10, "stamp left {inked} pixels");
    assert_eq!(rgba_at(&data, width, 5, 5), [255, 255, 255, 255]);
    assert_eq!(rgba_at(&data, width, 120, 120), [255, 255, 255, 255]);
}

#[test]
fn test_surface_trait_object() {
    let sketch = diagonal_sketch();
    let mut surface = PixmapSurface::new(32, 32).unwrap();
    let dyn_surface: &mut dyn Surface = &mut surface;
    render(sketch.display_list(), dyn_surface);
    assert_eq!(surface.pixel(16, 16).map(|c| c.a), Some(255));
    assert_eq!(surface.pixel(28, 2).map(|c| c.a), Some(0));
}
