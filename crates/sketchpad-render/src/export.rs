//! Export projection: replay the display list at another resolution.

use crate::error::{RenderError, RenderResult};
use crate::raster::PixmapSurface;
use crate::renderer::{Surface, draw_items};
use kurbo::Affine;
use sketchpad_core::{DisplayList, SketchColor};

/// Size of the on-screen canvas, in pixels per side.
pub const DEFAULT_SOURCE_SIZE: u32 = 256;
/// Size of exported images, in pixels per side.
pub const DEFAULT_TARGET_SIZE: u32 = 1024;
/// Largest export side length; 256 MiB of RGBA.
pub const MAX_TARGET_SIZE: u32 = 8192;

/// Configuration for display list export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Side length of the canvas the points were recorded on.
    pub source_size: u32,
    /// Side length of the exported image.
    pub target_size: u32,
    /// Opaque fill behind the drawing.
    pub background: SketchColor,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            source_size: DEFAULT_SOURCE_SIZE,
            target_size: DEFAULT_TARGET_SIZE,
            background: SketchColor::white(),
        }
    }
}

impl ExportConfig {
    pub fn with_target_size(mut self, target_size: u32) -> Self {
        self.target_size = target_size;
        self
    }

    pub fn with_background(mut self, background: SketchColor) -> Self {
        self.background = background;
        self
    }

    /// Uniform scale from canvas pixels to export pixels.
    pub fn scale(&self) -> f64 {
        f64::from(self.target_size) / f64::from(self.source_size)
    }

    /// Check sizes and that the background is opaque.
    pub fn validate(&self) -> RenderResult<()> {
        if self.source_size == 0 {
            return Err(RenderError::InvalidSize("source size must be greater than zero".into()));
        }
        if self.target_size == 0 {
            return Err(RenderError::InvalidSize("target size must be greater than zero".into()));
        }
        if self.source_size > MAX_TARGET_SIZE || self.target_size > MAX_TARGET_SIZE {
            return Err(RenderError::InvalidSize(format!(
                "{}x{} export exceeds the {MAX_TARGET_SIZE} pixel limit",
                self.source_size, self.target_size
            )));
        }
        if !self.background.is_opaque() {
            return Err(RenderError::InvalidBackground(self.background));
        }
        Ok(())
    }
}

/// Draw the list onto `surface` the way an export would: background first,
/// then every item under the export scale.
pub fn project_export<S: Surface + ?Sized>(list: &DisplayList, config: &ExportConfig, surface: &mut S) -> RenderResult<()> {
    config.validate()?;
    surface.fill_background(config.background);
    surface.set_transform(Affine::scale(config.scale()));
    draw_items(list, surface);
    Ok(())
}

/// Rasterize the list at the export resolution.
pub fn export_pixmap(list: &DisplayList, config: &ExportConfig) -> RenderResult<PixmapSurface> {
    config.validate()?;
    let mut surface = PixmapSurface::new(config.target_size, config.target_size)?;
    project_export(list, config, &mut surface)?;
    Ok(surface)
}

/// Rasterize the list at the export resolution and encode it as PNG.
pub fn export_png(list: &DisplayList, config: &ExportConfig) -> RenderResult<Vec<u8>> {
    let surface = export_pixmap(list, config)?;
    let png_data = encode_png(&surface.to_rgba8(), surface.width(), surface.height())?;
    log::info!(
        "Exported {} items at {}x{} ({} bytes)",
        list.len(),
        surface.width(),
        surface.height(),
        png_data.len()
    );
    Ok(png_data)
}

/// Encode RGBA pixel data to PNG bytes.
pub fn encode_png(rgba_data: &[u8], width: u32, height: u32) -> RenderResult<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgba_data)?;
    }

    Ok(png_data)
}
