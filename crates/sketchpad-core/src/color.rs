//! Stroke color representation.

use crate::error::SketchError;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serializable RGBA8 color carried by strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SketchColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SketchColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Same color with the alpha channel replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether the color fully covers what is beneath it.
    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }

    /// `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for SketchColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for SketchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for SketchColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SketchColor> for Color {
    fn from(color: SketchColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl FromStr for SketchColor {
    type Err = SketchError;

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or one of a handful of CSS names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "black" => return Ok(Self::black()),
            "white" => return Ok(Self::white()),
            "red" => return Ok(Self::new(255, 0, 0, 255)),
            "green" => return Ok(Self::new(0, 128, 0, 255)),
            "blue" => return Ok(Self::new(0, 0, 255, 255)),
            "transparent" => return Ok(Self::transparent()),
            _ => {}
        }

        let Some(hex) = s.strip_prefix('#') else {
            return Err(SketchError::invalid("color", format!("unrecognized color {s:?}")));
        };
        if !hex.is_ascii() {
            return Err(SketchError::invalid("color", format!("invalid hex color {s:?}")));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| SketchError::invalid("color", format!("invalid hex color {s:?}")))
        };

        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = channel(0..1)? * 17;
                let g = channel(1..2)? * 17;
                let b = channel(2..3)? * 17;
                Ok(Self::new(r, g, b, 255))
            }
            6 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(SketchError::invalid("color", format!("invalid hex color {s:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#000".parse::<SketchColor>(), Ok(SketchColor::black()));
        assert_eq!("#fff".parse::<SketchColor>(), Ok(SketchColor::white()));
        assert_eq!(
            "#3b82f6".parse::<SketchColor>(),
            Ok(SketchColor::new(0x3b, 0x82, 0xf6, 255))
        );
        assert_eq!(
            "#3b82f680".parse::<SketchColor>(),
            Ok(SketchColor::new(0x3b, 0x82, 0xf6, 0x80))
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Black".parse::<SketchColor>(), Ok(SketchColor::black()));
        assert_eq!(
            "transparent".parse::<SketchColor>(),
            Ok(SketchColor::transparent())
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<SketchColor>().is_err());
        assert!("#12".parse::<SketchColor>().is_err());
        assert!("#gggggg".parse::<SketchColor>().is_err());
        assert!("chartreuse".parse::<SketchColor>().is_err());
        assert!("#ééé".parse::<SketchColor>().is_err());
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(SketchColor::black().to_string(), "#000000");
        assert_eq!(SketchColor::black().with_alpha(0x80).to_hex(), "#00000080");
    }

    #[test]
    fn test_peniko_conversion() {
        let color = SketchColor::new(10, 20, 30, 40);
        let peniko: Color = color.into();
        assert_eq!(SketchColor::from(peniko), color);
    }
}
