//! Error types for move operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`fs_move`](crate::fs_move) and its helpers.
///
/// Each variant carries the untouched `io::Error` as its source.
#[derive(Debug, Error)]
pub enum MoveError {
    /// The rename failed for a reason other than crossing devices.
    #[error("Failed to rename {from} to {to}: {error}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: io::Error,
    },

    /// Copying an entry during the cross-device fallback failed.
    #[error("Failed to copy {path}: {error}")]
    Copy {
        path: PathBuf,
        #[source]
        error: io::Error,
    },

    /// Removing the source after a fallback copy failed.
    #[error("Failed to remove {path}: {error}")]
    Remove {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
}

impl MoveError {
    /// The underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Rename { error, .. } | Self::Copy { error, .. } | Self::Remove { error, .. } => {
                error
            }
        }
    }

    pub(crate) fn copy(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Copy {
            path: path.into(),
            error,
        }
    }

    pub(crate) fn remove(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Remove {
            path: path.into(),
            error,
        }
    }
}
