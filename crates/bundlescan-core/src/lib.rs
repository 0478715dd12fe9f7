//! Core types and classifiers for bundlescan.
//!
//! This crate provides the data structures shared across the bundlescan
//! workspace: the per-file inventory record, the closed set of file
//! classifications, the Mach-O magic-number classifier, and configuration.

mod config;
mod error;
mod inventory;
mod kind;
pub mod macho;

pub use config::{InventoryConfig, InventoryConfigBuilder};
pub use error::InventoryError;
pub use inventory::{Inventory, InventoryStats};
pub use kind::{AppFile, AppFileType};
