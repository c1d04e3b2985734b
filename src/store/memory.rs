//! In-memory store

use super::{check_quota, Entries, KeyValueStore};
use crate::error::LocalcartResult;

/// Non-persistent [`KeyValueStore`], unlimited unless a quota is set.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Entries,
    quota: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit total key plus value bytes
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Entries::new(),
            quota,
        }
    }

    pub fn entries(&self) -> &Entries {
        &self.entries
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(str::to_string)
    }

    fn set(&mut self, key: &str, value: &str) -> LocalcartResult<()> {
        check_quota("memory", &self.entries, self.quota, key, value)?;
        self.entries.insert(key, value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> LocalcartResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> LocalcartResult<()> {
        self.entries.clear();
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
