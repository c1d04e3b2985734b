//! File-backed persistent store
//!
//! Each origin gets one JSON object file under `<data_dir>/origins/`. The
//! file is read once when the store is opened and rewritten in full after
//! every mutation, before the mutation returns.

use super::{check_quota, Entries, KeyValueStore, Origin};
use crate::error::{LocalcartError, LocalcartResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Persistent [`KeyValueStore`] scoped to one origin
#[derive(Debug)]
pub struct FileStore {
    origin: Origin,
    path: PathBuf,
    quota: usize,
    entries: Entries,
}

impl FileStore {
    /// Store file path for `origin` under `data_dir`
    pub fn path_for(data_dir: &Path, origin: &Origin) -> PathBuf {
        data_dir
            .join("origins")
            .join(format!("{}.json", origin.file_stem()))
    }

    /// Open the store for `origin`, loading any existing contents.
    ///
    /// A missing file is an empty store; nothing is written until the
    /// first mutation.
    pub fn open(data_dir: &Path, origin: Origin, quota: usize) -> LocalcartResult<Self> {
        let path = Self::path_for(data_dir, &origin);

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| LocalcartError::io(format!("reading store {}", path.display()), e))?;
            serde_json::from_str(&content).map_err(|e| LocalcartError::StoreCorrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?
        } else {
            Entries::new()
        };

        debug!(
            "Opened store for {} at {} ({} entries)",
            origin,
            path.display(),
            entries.len()
        );

        Ok(Self {
            origin,
            path,
            quota,
            entries,
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes used by keys and values
    pub fn usage_bytes(&self) -> usize {
        self.entries.usage_bytes()
    }

    pub fn quota(&self) -> usize {
        self.quota
    }

    /// Write `entries` to a temporary file beside the store, then rename it
    /// over the store file. A failed write leaves the old file intact.
    fn persist(&self, entries: &Entries) -> LocalcartResult<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| {
            LocalcartError::io(format!("creating directory {}", parent.display()), e)
        })?;

        let content = serde_json::to_vec_pretty(entries)?;
        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| {
            LocalcartError::io(format!("creating temporary file in {}", parent.display()), e)
        })?;
        tmp.write_all(&content)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| LocalcartError::io(format!("writing store {}", self.path.display()), e))?;
        tmp.persist(&self.path).map_err(|e| {
            LocalcartError::io(format!("replacing store {}", self.path.display()), e.error)
        })?;
        Ok(())
    }

    /// Apply `f` to a copy of the entries, persist it, then adopt it.
    fn commit<F>(&mut self, f: F) -> LocalcartResult<()>
    where
        F: FnOnce(&mut Entries),
    {
        let mut next = self.entries.clone();
        f(&mut next);
        self.persist(&next)?;
        self.entries = next;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> LocalcartResult<()> {
        check_quota(
            &self.origin.to_string(),
            &self.entries,
            self.quota,
            key,
            value,
        )?;
        self.commit(|entries| {
            entries.insert(key, value);
        })?;
        debug!("Set {} ({} bytes) for {}", key, value.len(), self.origin);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> LocalcartResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        self.commit(|entries| {
            entries.remove(key);
        })?;
        debug!("Removed {} for {}", key, self.origin);
        Ok(())
    }

    fn clear(&mut self) -> LocalcartResult<()> {
        let count = self.entries.len();
        self.commit(Entries::clear)?;
        info!("Cleared {} entries for {}", count, self.origin);
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().map(str::to_string).collect()
    }

    fn key(&self, index: usize) -> Option<String> {
        self.entries.key(index).map(str::to_string)
    }
}
