//! Recorded input scripts.

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use sketchpad_core::{SketchColor, SketchResult, SketchSession};
use std::path::Path;
use std::time::Duration;

/// One UI event, as the toolbar and canvas would deliver it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ScriptCommand {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerLeave,
    /// "Thin" button.
    Thin,
    /// "Thick" button.
    Thick,
    SetThickness { value: f64 },
    SetColor { color: String },
    /// Stamp button, or `null` to return to drawing.
    SelectGlyph { glyph: Option<String> },
    SetRotation { radians: f64 },
    SetRotateStamps { enabled: bool },
    /// "+" button with the text typed into the prompt.
    AddCustomGlyph { text: String },
    AdvanceFrame { millis: u64 },
    Undo,
    Redo,
    Clear,
}

impl ScriptCommand {
    /// Deliver this event to the session.
    pub fn apply(&self, session: &mut SketchSession, config: &AppConfig) -> SketchResult<()> {
        match self {
            ScriptCommand::PointerDown { x, y } => session.pointer_down(Point::new(*x, *y))?,
            ScriptCommand::PointerMove { x, y } => session.pointer_move(Point::new(*x, *y)),
            ScriptCommand::PointerUp => session.pointer_up(),
            ScriptCommand::PointerLeave => session.pointer_leave(),
            ScriptCommand::Thin => session.set_thickness(config.thin)?,
            ScriptCommand::Thick => session.set_thickness(config.thick)?,
            ScriptCommand::SetThickness { value } => session.set_thickness(*value)?,
            ScriptCommand::SetColor { color } => session.set_color(color.parse::<SketchColor>()?),
            ScriptCommand::SelectGlyph { glyph } => session.select_glyph(glyph.as_deref())?,
            ScriptCommand::SetRotation { radians } => session.set_rotation(*radians)?,
            ScriptCommand::SetRotateStamps { enabled } => session.set_rotate_stamps(*enabled)?,
            ScriptCommand::AddCustomGlyph { text } => {
                session.add_custom_glyph(text)?;
            }
            ScriptCommand::AdvanceFrame { millis } => {
                session.advance_frame(Duration::from_millis(*millis));
            }
            ScriptCommand::Undo => {
                if !session.undo() {
                    log::debug!("Nothing to undo");
                }
            }
            ScriptCommand::Redo => {
                if !session.redo() {
                    log::debug!("Nothing to redo");
                }
            }
            ScriptCommand::Clear => session.clear(),
        }
        Ok(())
    }
}

/// Parse a JSON array of commands.
pub fn parse_script(json: &str) -> serde_json::Result<Vec<ScriptCommand>> {
    serde_json::from_str(json)
}

/// Read a script file.
pub fn load_script(path: &Path) -> AppResult<Vec<ScriptCommand>> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let script = parse_script(&text).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {} commands from {}", script.len(), path.display());
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = parse_script(
            r#"[
                {"cmd": "pointer_down", "x": 1, "y": 2},
                {"cmd": "pointer_move", "x": 3.5, "y": 4},
                {"cmd": "pointer_up"},
                {"cmd": "select_glyph", "glyph": "🐸"},
                {"cmd": "select_glyph", "glyph": null},
                {"cmd": "advance_frame", "millis": 16},
                {"cmd": "undo"}
            ]"#,
        )
        .unwrap();

        assert_eq!(script.len(), 7);
        assert_eq!(script[0], ScriptCommand::PointerDown { x: 1.0, y: 2.0 });
        assert_eq!(
            script[3],
            ScriptCommand::SelectGlyph {
                glyph: Some("🐸".to_string())
            }
        );
        assert_eq!(script[4], ScriptCommand::SelectGlyph { glyph: None });
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(parse_script(r#"[{"cmd": "paint_bucket"}]"#).is_err());
    }

    #[test]
    fn test_apply_buttons() {
        let config = AppConfig::default();
        let mut session = config.build_session().unwrap();

        ScriptCommand::Thick.apply(&mut session, &config).unwrap();
        assert_eq!(session.tool().thickness, config.thick);
        ScriptCommand::Thin.apply(&mut session, &config).unwrap();
        assert_eq!(session.tool().thickness, config.thin);

        let bad = ScriptCommand::SetColor {
            color: "#zzzzzz".to_string(),
        };
        assert!(bad.apply(&mut session, &config).is_err());
    }
}
