//! # Codex Error Types
//!
//! Errors raised by the glue around the pipeline: catalog loading,
//! configuration, key lookup and routing. The pipeline itself never fails.

use thiserror::Error;

/// Errors that can occur while loading or querying the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodexError {
    /// A catalog or config file could not be read, or an output file written.
    #[error("i/o error on {path}: {message}")]
    Io {
        /// The file involved.
        path: String,
        /// The underlying I/O error, rendered.
        message: String,
    },

    /// The catalog document is not a JSON array of records.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No record with this English name.
    #[error("champion not found: {0}")]
    NotFound(String),

    /// The path does not name a screen.
    #[error("invalid route: {0}")]
    InvalidRoute(String),
}

impl CodexError {
    /// Wraps an I/O failure for `path`.
    #[must_use]
    pub fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for codex operations.
pub type CodexResult<T> = Result<T, CodexError>;
