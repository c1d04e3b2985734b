//! Configuration schema for localcart
//!
//! Configuration is stored at `~/.config/localcart/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Browsers commonly allow about 5 MiB per origin.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Storage settings
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Persistent store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Origin the store is scoped to
    pub origin: String,

    /// Maximum bytes of keys plus values per origin (0 = unlimited)
    pub quota_bytes: usize,

    /// Override for the directory holding store files
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost".to_string(),
            quota_bytes: DEFAULT_QUOTA_BYTES,
            data_dir: None,
        }
    }
}
