//! Error types for prio-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from tracker and store operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Underlying I/O failure (permission denied, disk full, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (write/save path). Deserialization failures
    /// at load time never reach this variant — corrupt store documents are
    /// reset to empty collections instead.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.prio/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Shorthand for wrapping an I/O error with the path it occurred at.
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> TrackerError {
    TrackerError::Io {
        path: path.into(),
        source,
    }
}
