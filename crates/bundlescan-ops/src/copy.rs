//! Recursive copy used when a rename cannot cross devices.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::MoveError;

/// Recursively copy `source` to `destination`.
///
/// - directories are created or merged into an existing directory
/// - regular files overwrite whatever file or link is at the destination
/// - symlinks are recreated with the same target text, never followed
///
/// Sockets, FIFOs and device nodes are rejected.
pub fn copy_recursive(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<(), MoveError> {
    copy_entry(source.as_ref(), destination.as_ref())
}

fn copy_entry(source: &Path, dest: &Path) -> Result<(), MoveError> {
    let metadata = fs::symlink_metadata(source).map_err(|e| MoveError::copy(source, e))?;
    let file_type = metadata.file_type();

    if file_type.is_symlink() {
        copy_symlink(source, dest)
    } else if file_type.is_dir() {
        let existing_dir = fs::symlink_metadata(dest).is_ok_and(|m| m.is_dir());
        if !existing_dir {
            fs::create_dir(dest).map_err(|e| MoveError::copy(dest, e))?;
        }

        let entries = fs::read_dir(source).map_err(|e| MoveError::copy(source, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| MoveError::copy(source, e))?;
            copy_entry(&entry.path(), &dest.join(entry.file_name()))?;
        }

        fs::set_permissions(dest, metadata.permissions()).map_err(|e| MoveError::copy(dest, e))
    } else if file_type.is_file() {
        replace_link(dest)?;
        fs::copy(source, dest).map_err(|e| MoveError::copy(source, e))?;
        Ok(())
    } else {
        Err(MoveError::copy(
            source,
            io::Error::new(io::ErrorKind::Unsupported, "cannot copy special file"),
        ))
    }
}

fn copy_symlink(source: &Path, dest: &Path) -> Result<(), MoveError> {
    let target = fs::read_link(source).map_err(|e| MoveError::copy(source, e))?;

    if let Ok(existing) = fs::symlink_metadata(dest) {
        if !existing.is_dir() {
            fs::remove_file(dest).map_err(|e| MoveError::copy(dest, e))?;
        }
    }

    make_symlink(source, &target, dest).map_err(|e| MoveError::copy(source, e))
}

/// Unlink a symlink at `dest` so the copy does not write through it.
fn replace_link(dest: &Path) -> Result<(), MoveError> {
    match fs::symlink_metadata(dest) {
        Ok(m) if m.file_type().is_symlink() => {
            fs::remove_file(dest).map_err(|e| MoveError::copy(dest, e))
        }
        _ => Ok(()),
    }
}

#[cfg(unix)]
fn make_symlink(_source: &Path, target: &Path, dest: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, dest)
}

#[cfg(windows)]
fn make_symlink(source: &Path, target: &Path, dest: &Path) -> io::Result<()> {
    // Windows needs to know the kind of link up front
    if fs::metadata(source).is_ok_and(|m| m.is_dir()) {
        std::os::windows::fs::symlink_dir(target, dest)
    } else {
        std::os::windows::fs::symlink_file(target, dest)
    }
}

#[cfg(not(any(unix, windows)))]
fn make_symlink(_source: &Path, _target: &Path, _dest: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symlinks are not supported on this platform",
    ))
}
