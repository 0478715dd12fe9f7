//! Forced recursive removal.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::MoveError;

/// Remove `path` and everything below it.
///
/// A path that does not exist is not an error. Symlinks are removed, never
/// followed.
pub fn remove_recursive(path: impl AsRef<Path>) -> Result<(), MoveError> {
    let path = path.as_ref();

    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(MoveError::remove(path, e)),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(MoveError::remove(path, e)),
        _ => Ok(()),
    }
}
