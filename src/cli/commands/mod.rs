//! CLI command implementations

pub mod add;
pub mod config;
pub mod list;
pub mod store;

pub use add::execute as add;
pub use config::execute as config;
pub use list::execute as list;
pub use store::execute as store;

use crate::config::{Config, ConfigManager};
use crate::error::LocalcartResult;
use crate::store::{FileStore, Origin};
use tracing::debug;

/// Open the persistent store selected by the configuration
pub(crate) fn open_store(config: &Config) -> LocalcartResult<FileStore> {
    let origin: Origin = config.storage.origin.parse()?;
    let data_dir = config
        .storage
        .data_dir
        .clone()
        .unwrap_or_else(ConfigManager::default_data_dir);

    debug!("Using data directory {}", data_dir.display());
    FileStore::open(&data_dir, origin, config.storage.quota_bytes)
}
