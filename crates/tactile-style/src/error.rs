//! Error types for the styling system.

use std::path::PathBuf;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading style configuration.
///
/// Style resolution itself never fails; only reading themes does.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Theme TOML could not be parsed.
    #[error("Theme parse error: {message}")]
    Parse { message: String },

    /// A color field did not hold a valid hex color.
    #[error("Invalid color for '{field}': '{value}'")]
    InvalidColor { field: String, value: String },

    /// File I/O error.
    #[error("Failed to read theme '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a color error.
    pub fn invalid_color(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::parse(err.to_string())
    }
}
