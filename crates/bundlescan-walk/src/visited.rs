//! Real-path tracking for a single walk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Tracks canonical paths already visited during one traversal.
///
/// Keys are expected to be canonical (symlink-resolved) paths, so two logical
/// paths aliasing the same physical file collapse to one entry.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: HashSet<PathBuf>,
}

impl VisitedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Track a path. Returns `true` if this is the first time seeing it.
    pub fn track(&mut self, path: PathBuf) -> bool {
        self.seen.insert(path)
    }

    /// Check if a path has been seen (without tracking).
    pub fn has_seen(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    /// Number of distinct paths tracked.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if nothing has been tracked.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
