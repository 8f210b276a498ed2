//! Error types for imgmap.
//!
//! Every failure is terminal for a run: file access problems and JSON
//! problems are reported with the path they concern and then propagated.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the imgmap library.
#[derive(Debug, Error)]
pub enum ImgmapError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error at {path:?}: {message}")]
    Json {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Result type alias for imgmap operations.
pub type Result<T> = std::result::Result<T, ImgmapError>;

impl From<std::io::Error> for ImgmapError {
    fn from(err: std::io::Error) -> Self {
        ImgmapError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for ImgmapError {
    fn from(err: serde_json::Error) -> Self {
        ImgmapError::Json {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl ImgmapError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        ImgmapError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create a JSON error with path context.
    pub fn json_with_path(err: serde_json::Error, path: impl Into<PathBuf>) -> Self {
        ImgmapError::Json {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// The file this error concerns, when known.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ImgmapError::Io { path, .. } | ImgmapError::Json { path, .. } => path.as_deref(),
        }
    }

    /// True for malformed or mis-shaped JSON, false for file access failures.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ImgmapError::Json { .. })
    }
}
