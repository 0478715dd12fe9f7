//! Rename with a copy-and-remove fallback for cross-device moves.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::copy::copy_recursive;
use crate::error::MoveError;
use crate::remove::remove_recursive;

/// How a successful move was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A single atomic rename.
    Renamed,
    /// Copied to the destination, then the source was removed.
    CopiedAcrossDevices,
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Renamed => write!(f, "renamed"),
            MoveOutcome::CopiedAcrossDevices => write!(f, "copied across devices"),
        }
    }
}

/// Check whether an error means source and destination are on different devices.
pub fn is_cross_device(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::CrossesDevices
}

/// Move `source` to `destination`.
///
/// Tries a rename first. If that fails because the paths live on different
/// filesystems, copies `source` recursively (symlinks preserved, existing
/// destination content overwritten) and then removes `source`. Every other
/// rename failure is returned untouched.
pub fn fs_move(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<MoveOutcome, MoveError> {
    move_with(source.as_ref(), destination.as_ref(), |from, to| {
        fs::rename(from, to)
    })
}

fn move_with<F>(source: &Path, destination: &Path, rename: F) -> Result<MoveOutcome, MoveError>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    match rename(source, destination) {
        Ok(()) => {
            debug!(from = %source.display(), to = %destination.display(), "renamed");
            Ok(MoveOutcome::Renamed)
        }
        Err(err) if is_cross_device(&err) => {
            info!(
                from = %source.display(),
                to = %destination.display(),
                "rename crosses devices, copying instead"
            );
            // Not atomic: both copies exist until the remove completes
            copy_recursive(source, destination)?;
            remove_recursive(source)?;
            Ok(MoveOutcome::CopiedAcrossDevices)
        }
        Err(error) => Err(MoveError::Rename {
            from: source.to_path_buf(),
            to: destination.to_path_buf(),
            error,
        }),
    }
}
