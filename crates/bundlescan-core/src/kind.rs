//! Inventory record and file classification types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Classification of a file found inside an application bundle.
///
/// Exactly one tag is assigned per file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AppFileType {
    /// Mach-O executable or universal (fat) binary.
    #[serde(rename = "macho")]
    #[strum(serialize = "macho")]
    MachO,
    /// Anything not matched by another rule.
    Plain,
    /// A file named exactly `Info.plist`.
    InfoPlist,
    /// Precompiled `.bin` cache artifact.
    Snapshot,
    /// Archive-packed application code (`.asar`).
    AppCode,
}

impl AppFileType {
    /// Check if this type denotes a native binary.
    pub fn is_binary(&self) -> bool {
        matches!(self, AppFileType::MachO)
    }
}

/// A single classified file, relative to the scanned root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppFile {
    /// Path relative to the bundle root.
    pub relative_path: PathBuf,
    /// Classification tag.
    #[serde(rename = "type")]
    pub file_type: AppFileType,
}

impl AppFile {
    /// Create a new inventory record.
    pub fn new(relative_path: impl Into<PathBuf>, file_type: AppFileType) -> Self {
        Self {
            relative_path: relative_path.into(),
            file_type,
        }
    }

    /// Path relative to the bundle root.
    pub fn path(&self) -> &Path {
        &self.relative_path
    }
}
