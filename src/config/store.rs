//! Settings store configuration types.
//!
//! Selects where banner settings are persisted:
//! - `memory`: process-local, lost on exit (tests, previews)
//! - `file`: a JSON document on disk shared by every invocation
//!
//! Default: file backend at `crate::constants::DEFAULT_STORE_PATH`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_STORE_PATH;

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

/// Settings store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-process map
    Memory,
    /// JSON file on disk
    #[default]
    File,
}

/// Settings store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend type (default: file)
    #[serde(default)]
    pub backend: StoreBackend,
    /// Settings file path, used by the file backend
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.backend == StoreBackend::File && self.path.as_os_str().is_empty() {
            return Err("store.path cannot be empty when store.backend is 'file'".to_string());
        }
        Ok(())
    }
}
