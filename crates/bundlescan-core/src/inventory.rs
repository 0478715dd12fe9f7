//! Inventory container and statistics.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::kind::{AppFile, AppFileType};

/// Summary statistics for a bundle walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    /// Regular files classified.
    pub total_files: u64,
    /// Directories descended into, including the root.
    pub total_dirs: u64,
    /// Combined size of classified files in bytes.
    pub total_size: u64,
    /// Symbolic links encountered. A link never produces a record itself.
    pub symlinks: u64,
    /// Paths skipped because their real path was already visited.
    pub aliases_skipped: u64,
    /// Devices, sockets, FIFOs and other special entries.
    pub other_skipped: u64,
    /// Number of files per classification.
    pub by_type: BTreeMap<AppFileType, u64>,
}

impl InventoryStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classified regular file.
    pub fn record_file(&mut self, file_type: AppFileType, size: u64) {
        self.total_files += 1;
        self.total_size += size;
        *self.by_type.entry(file_type).or_default() += 1;
    }

    /// Record a directory.
    pub fn record_dir(&mut self) {
        self.total_dirs += 1;
    }

    /// Record a symlink.
    pub fn record_symlink(&mut self) {
        self.symlinks += 1;
    }

    /// Record a path whose real path was already visited.
    pub fn record_alias(&mut self) {
        self.aliases_skipped += 1;
    }

    /// Record a special file.
    pub fn record_other(&mut self) {
        self.other_skipped += 1;
    }

    /// Number of files classified as `file_type`.
    pub fn count(&self, file_type: AppFileType) -> u64 {
        self.by_type.get(&file_type).copied().unwrap_or(0)
    }
}

/// Complete inventory of an application bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// Canonical root that was walked.
    pub root: PathBuf,
    /// Classified files, in traversal order.
    pub files: Vec<AppFile>,
    /// Summary statistics.
    pub stats: InventoryStats,
    /// Duration of the walk.
    pub scan_duration: Duration,
}

impl Inventory {
    /// Create a new inventory.
    pub fn new(
        root: PathBuf,
        files: Vec<AppFile>,
        stats: InventoryStats,
        scan_duration: Duration,
    ) -> Self {
        Self {
            root,
            files,
            stats,
            scan_duration,
        }
    }

    /// Iterate over the files classified as `file_type`.
    pub fn files_of(&self, file_type: AppFileType) -> impl Iterator<Item = &AppFile> {
        self.files.iter().filter(move |f| f.file_type == file_type)
    }

    /// Number of files in the result.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the result holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Consume the inventory, keeping only the file list.
    pub fn into_files(self) -> Vec<AppFile> {
        self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_file() {
        let mut stats = InventoryStats::new();
        stats.record_file(AppFileType::MachO, 100);
        stats.record_file(AppFileType::MachO, 50);
        stats.record_file(AppFileType::Plain, 1);

        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.total_size, 151);
        assert_eq!(stats.count(AppFileType::MachO), 2);
        assert_eq!(stats.count(AppFileType::Snapshot), 0);
    }

    #[test]
    fn test_files_of() {
        let inventory = Inventory::new(
            PathBuf::from("/b"),
            vec![
                AppFile::new("Contents/MacOS/App", AppFileType::MachO),
                AppFile::new("Contents/Info.plist", AppFileType::InfoPlist),
            ],
            InventoryStats::new(),
            Duration::ZERO,
        );

        let binaries: Vec<_> = inventory.files_of(AppFileType::MachO).collect();
        assert_eq!(binaries.len(), 1);
        assert_eq!(binaries[0].path(), std::path::Path::new("Contents/MacOS/App"));
        assert_eq!(inventory.len(), 2);
    }
}
