//! Error types for figrust library

use std::io;
use thiserror::Error;

/// Main error type for figrust operations
#[derive(Debug, Error)]
pub enum FigError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed record; aborts the whole load
    #[error("Parse error in {source_name}, line {line}: {message}\n{text}")]
    Parse {
        /// File name (or `<unnamed>`) the text came from
        source_name: String,
        /// 1-based physical line number, comment and blank lines included
        line: usize,
        /// The offending line
        text: String,
        /// What went wrong
        message: String,
    },

    /// A token could not be converted to the expected field type
    #[error("Invalid value {value:?} for field '{field}'")]
    InvalidValue { field: &'static str, value: String },

    /// Compound close without open, or compound still open at end of input
    #[error("Unbalanced compound: {0}")]
    UnbalancedCompound(String),

    /// Input ended inside the header or inside a multi-line record
    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// Adding a custom color would exceed the format limit
    #[error("Custom color table is full ({limit} entries)")]
    ColorTableFull { limit: usize },

    /// No exact or similar custom color and adding was not allowed
    #[error("No similar color found for {0}")]
    ColorNotFound(String),

    /// Malformed color specification (e.g. bad hex code)
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Color number outside the standard palette and the custom table
    #[error("Invalid color index: {0}")]
    InvalidColorIndex(i32),

    /// Geometry that cannot be represented (e.g. circle with unequal radii)
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Object not found in document
    #[error("Object not found: handle {0:#X}")]
    ObjectNotFound(u64),

    /// External conversion program failed
    #[error("Export to {lang} failed ({status}): {stderr}")]
    Export {
        lang: String,
        status: String,
        stderr: String,
    },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for figrust operations
pub type Result<T> = std::result::Result<T, FigError>;

impl FigError {
    /// Wrap a field-level error into a positioned parse error.
    ///
    /// Errors that already carry a position are returned unchanged.
    pub fn at_line(self, source_name: &str, line: usize, text: &str) -> Self {
        match self {
            FigError::Parse { .. } | FigError::Io(_) => self,
            other => FigError::Parse {
                source_name: source_name.to_string(),
                line,
                text: text.to_string(),
                message: other.to_string(),
            },
        }
    }

    /// Line number for positioned errors
    pub fn line(&self) -> Option<usize> {
        match self {
            FigError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<String> for FigError {
    fn from(s: String) -> Self {
        FigError::Custom(s)
    }
}

impl From<&str> for FigError {
    fn from(s: &str) -> Self {
        FigError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FigError::InvalidValue {
            field: "depth",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value \"abc\" for field 'depth'");
    }

    #[test]
    fn test_at_line_wraps_field_errors() {
        let err = FigError::InvalidValue {
            field: "depth",
            value: "x".to_string(),
        }
        .at_line("'a.fig'", 12, "2 1 0 1 0 7 x");
        assert_eq!(err.line(), Some(12));
        let text = err.to_string();
        assert!(text.starts_with("Parse error in 'a.fig', line 12:"));
        assert!(text.contains("2 1 0 1 0 7 x"));
    }

    #[test]
    fn test_at_line_keeps_existing_position() {
        let err = FigError::Parse {
            source_name: "<unnamed>".into(),
            line: 3,
            text: String::new(),
            message: "m".into(),
        }
        .at_line("other", 99, "");
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let fig_err: FigError = io_err.into();
        assert!(matches!(fig_err, FigError::Io(_)));
    }
}
