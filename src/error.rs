use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by path normalization, directory reads and the
/// navigation engine.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: String },

    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Something the engine relies on does not hold, usually because the
    /// filesystem changed under us.
    #[error("inconsistent navigation state: {0}")]
    InconsistentState(String),
}

impl NavigationError {
    pub fn is_inconsistent(&self) -> bool {
        matches!(self, NavigationError::InconsistentState(_))
    }
}

pub type Result<T> = std::result::Result<T, NavigationError>;
