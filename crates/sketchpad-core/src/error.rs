//! Error types for the sketch model.

use thiserror::Error;

/// Errors raised by sketch operations.
///
/// Rejected operations leave the model untouched. An empty undo or redo stack
/// is not an error; those operations simply report that nothing happened.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Result type for sketch operations.
pub type SketchResult<T> = Result<T, SketchError>;

impl SketchError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let err = Self::InvalidParameter {
            name,
            reason: reason.into(),
        };
        log::warn!("{err}");
        err
    }
}

/// Require a finite, strictly positive value.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> SketchResult<f64> {
    if !value.is_finite() {
        return Err(SketchError::invalid(name, format!("{value} is not finite")));
    }
    if value <= 0.0 {
        return Err(SketchError::invalid(name, format!("{value} must be greater than zero")));
    }
    Ok(value)
}

/// Require a finite value.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> SketchResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SketchError::invalid(name, format!("{value} is not finite")))
    }
}

/// Require a glyph with visible content. Returns the trimmed glyph.
pub(crate) fn ensure_glyph(glyph: &str) -> SketchResult<&str> {
    let trimmed = glyph.trim();
    if trimmed.is_empty() {
        Err(SketchError::invalid("glyph", "must not be empty"))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("width", 2.0), Ok(2.0));
        assert!(ensure_positive("width", 0.0).is_err());
        assert!(ensure_positive("width", -1.0).is_err());
        assert!(ensure_positive("width", f64::NAN).is_err());
        assert!(ensure_positive("width", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_glyph_trims() {
        assert_eq!(ensure_glyph("  ★ "), Ok("★"));
        assert!(ensure_glyph("   ").is_err());
        assert!(ensure_glyph("").is_err());
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = ensure_positive("size", 0.0).unwrap_err();
        assert!(err.to_string().contains("`size`"));
    }
}
