//! Depth-first bundle walker.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use bundlescan_core::{AppFile, Inventory, InventoryConfig, InventoryError, InventoryStats};
use tracing::{debug, info};

use crate::classify::classify_path;
use crate::visited::VisitedSet;

/// Sequential walker that inventories an application bundle.
///
/// Children are visited in the order the OS returns them from `read_dir`;
/// the resulting order is not stable across filesystems.
#[derive(Debug, Default)]
pub struct BundleWalker;

impl BundleWalker {
    /// Create a new walker.
    pub fn new() -> Self {
        Self
    }

    /// Walk the bundle described by `config`.
    ///
    /// Any failure to resolve, stat, or list a visited path aborts the walk.
    /// Failures to read a file header are absorbed during classification.
    pub fn walk(&self, config: &InventoryConfig) -> Result<Inventory, InventoryError> {
        if config.root.as_os_str().is_empty() {
            return Err(InventoryError::InvalidConfig {
                message: "Root path cannot be empty".to_string(),
            });
        }

        let start = Instant::now();
        let root = fs::canonicalize(&config.root).map_err(|e| InventoryError::io(&config.root, e))?;

        let mut walk = Walk {
            config,
            root: &root,
            visited: VisitedSet::new(),
            files: Vec::new(),
            stats: InventoryStats::new(),
        };
        walk.traverse(&config.root, false)?;

        let Walk { files, stats, .. } = walk;
        let scan_duration = start.elapsed();

        info!(
            root = %root.display(),
            files = stats.total_files,
            dirs = stats.total_dirs,
            kept = files.len(),
            elapsed_ms = scan_duration.as_millis() as u64,
            "bundle walk complete"
        );

        Ok(Inventory::new(root, files, stats, scan_duration))
    }
}

/// List every file under `root` with its classification.
pub fn get_all_app_files(root: impl AsRef<Path>) -> Result<Vec<AppFile>, InventoryError> {
    let config = InventoryConfig::new(root.as_ref());
    BundleWalker::new().walk(&config).map(Inventory::into_files)
}

/// State for one traversal. Dropped, with the visited set, when the walk ends.
struct Walk<'a> {
    config: &'a InventoryConfig,
    root: &'a Path,
    visited: VisitedSet,
    files: Vec<AppFile>,
    stats: InventoryStats,
}

impl Walk<'_> {
    /// Visit `path`, recursing into directories.
    ///
    /// `via_link` is set when the directory entry for `path` is itself a
    /// symbolic link.
    fn traverse(&mut self, path: &Path, via_link: bool) -> Result<(), InventoryError> {
        if via_link {
            self.stats.record_symlink();
        }

        let real = match fs::canonicalize(path) {
            Ok(real) => real,
            // Dangling links and link loops cannot be resolved
            Err(err) if via_link => {
                debug!(path = %path.display(), error = %err, "skipping unresolvable symlink");
                return Ok(());
            }
            Err(err) => return Err(InventoryError::io(path, err)),
        };

        if !self.visited.track(real.clone()) {
            debug!(path = %path.display(), real = %real.display(), "already visited");
            self.stats.record_alias();
            return Ok(());
        }

        let metadata = fs::metadata(&real).map_err(|e| InventoryError::io(&real, e))?;
        let file_type = metadata.file_type();

        if file_type.is_symlink() {
            return Ok(());
        }

        if file_type.is_file() {
            let app_type = classify_path(&real);
            self.stats.record_file(app_type, metadata.len());
            if self.config.includes(app_type) {
                self.files
                    .push(AppFile::new(relative_to(&real, self.root), app_type));
            }
        } else if file_type.is_dir() {
            self.stats.record_dir();
            let entries = fs::read_dir(&real).map_err(|e| InventoryError::io(&real, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| InventoryError::io(&real, e))?;
                let child = real.join(entry.file_name());
                let is_link = entry
                    .file_type()
                    .map_err(|e| InventoryError::io(&child, e))?
                    .is_symlink();
                self.traverse(&child, is_link)?;
            }
        } else {
            debug!(path = %real.display(), "skipping special file");
            self.stats.record_other();
        }

        Ok(())
    }
}

/// Express `path` relative to `base`, using `..` when `path` lies outside it.
///
/// Both paths are expected to be absolute and canonical.
fn relative_to(path: &Path, base: &Path) -> PathBuf {
    if let Ok(rel) = path.strip_prefix(base) {
        return rel.to_path_buf();
    }

    let path_parts: Vec<_> = path.components().collect();
    let base_parts: Vec<_> = base.components().collect();
    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[common..] {
        rel.push(part);
    }
    rel
}
