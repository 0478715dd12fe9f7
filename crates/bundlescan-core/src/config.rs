//! Inventory configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::kind::AppFileType;

/// Configuration for a bundle inventory.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct InventoryConfig {
    /// Root of the application bundle.
    pub root: PathBuf,

    /// Types to keep in the result (empty = all).
    #[builder(default)]
    #[serde(default)]
    pub include_types: Vec<AppFileType>,
}

impl InventoryConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                Err("Root path cannot be empty".to_string())
            }
            Some(_) => Ok(()),
            None => Err("Root path is required".to_string()),
        }
    }
}

impl InventoryConfig {
    /// Create a new config builder.
    pub fn builder() -> InventoryConfigBuilder {
        InventoryConfigBuilder::default()
    }

    /// Create a config that keeps every file under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_types: Vec::new(),
        }
    }

    /// Check whether files of `file_type` belong in the result.
    pub fn includes(&self, file_type: AppFileType) -> bool {
        self.include_types.is_empty() || self.include_types.contains(&file_type)
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
