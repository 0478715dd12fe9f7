//! Bundle walking and file classification for bundlescan.
//!
//! # Overview
//!
//! `bundlescan-walk` descends an application bundle depth-first and assigns
//! every regular file one [`AppFileType`]. Key properties:
//!
//! - **Real-path deduplication**: each physical file is visited once, however
//!   many symlinks point at it, and symlink cycles terminate
//! - **Symlinks never produce records** of their own
//! - **Best-effort header sniffing**: unreadable files fall back to
//!   name-based rules instead of failing the walk
//!
//! # Example
//!
//! ```rust,no_run
//! use bundlescan_walk::{BundleWalker, InventoryConfig};
//!
//! let config = InventoryConfig::new("/Applications/Demo.app");
//! let inventory = BundleWalker::new().walk(&config).unwrap();
//!
//! for file in &inventory.files {
//!     println!("{}\t{}", file.file_type, file.relative_path.display());
//! }
//! ```

mod classify;
mod header;
mod visited;
mod walker;

pub use classify::{classify, classify_path};
pub use header::{HEADER_LEN, read_header};
pub use visited::VisitedSet;
pub use walker::{BundleWalker, get_all_app_files};

// Re-export core types for convenience
pub use bundlescan_core::{
    AppFile, AppFileType, Inventory, InventoryConfig, InventoryError, InventoryStats,
};
