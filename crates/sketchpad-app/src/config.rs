//! Application configuration.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use sketchpad_core::tools::{DEFAULT_STAMPS, THICK, THIN};
use sketchpad_core::{SketchColor, SketchSession, StampPalette, ToolState};
use sketchpad_render::ExportConfig;
use std::path::Path;

/// Settings for a session, loaded from JSON. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Side length of the drawing canvas.
    pub canvas_size: u32,
    /// Side length of exported images.
    pub export_size: u32,
    /// Export background color.
    pub background: String,
    /// Initial pen color.
    pub color: String,
    /// Width used by the "thin" pen button.
    pub thin: f64,
    /// Width used by the "thick" pen button.
    pub thick: f64,
    /// Spin rate for rotating stamps.
    pub turns_per_second: f64,
    /// Stamp buttons offered at startup.
    pub stamps: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256,
            export_size: 1024,
            background: "#ffffff".to_string(),
            color: "#000000".to_string(),
            thin: THIN,
            thick: THICK,
            turns_per_second: 1.0,
            stamps: DEFAULT_STAMPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| AppError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Export settings, checked before any pixels are allocated.
    pub fn export_config(&self) -> AppResult<ExportConfig> {
        let export = ExportConfig {
            source_size: self.canvas_size,
            target_size: self.export_size,
            background: self.background.parse()?,
        };
        export.validate()?;
        Ok(export)
    }

    /// Fresh session with this config's pen, palette and spin rate.
    pub fn build_session(&self) -> AppResult<SketchSession> {
        let mut tool = ToolState::default();
        tool.set_thickness(self.thin)?;
        tool.set_color(self.color.parse::<SketchColor>()?);
        let session = SketchSession::new()
            .with_tool(tool)
            .with_palette(StampPalette::with_glyphs(&self.stamps))
            .with_turns_per_second(self.turns_per_second)?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchpad_render::RenderError;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"export_size": 512, "stamps": ["★"]}"#).unwrap();
        assert_eq!(config.export_size, 512);
        assert_eq!(config.canvas_size, 256);
        assert_eq!(config.stamps, vec!["★".to_string()]);
    }

    #[test]
    fn test_export_config() {
        let config = AppConfig {
            background: "#102030".to_string(),
            ..AppConfig::default()
        };
        let export = config.export_config().unwrap();
        assert_eq!(export.source_size, 256);
        assert_eq!(export.target_size, 1024);
        assert_eq!(export.background, SketchColor::new(0x10, 0x20, 0x30, 255));

        let bad = AppConfig {
            background: "not a color".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(bad.export_config(), Err(AppError::Sketch(_))));

        let translucent = AppConfig {
            background: "#ffffff80".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            translucent.export_config(),
            Err(AppError::Render(RenderError::InvalidBackground(_)))
        ));

        let huge = AppConfig {
            export_size: 100_000,
            ..AppConfig::default()
        };
        assert!(matches!(
            huge.export_config(),
            Err(AppError::Render(RenderError::InvalidSize(_)))
        ));
    }

    #[test]
    fn test_build_session() {
        let config = AppConfig {
            color: "red".to_string(),
            stamps: vec!["★".to_string(), "🐸".to_string()],
            ..AppConfig::default()
        };
        let session = config.build_session().unwrap();
        assert_eq!(session.tool().color, SketchColor::new(255, 0, 0, 255));
        assert_eq!(session.palette().len(), 2);

        let bad = AppConfig {
            turns_per_second: 0.0,
            ..AppConfig::default()
        };
        assert!(bad.build_session().is_err());
    }
}
