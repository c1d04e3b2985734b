//! Origin-scoped persistent key-value storage
//!
//! A string-keyed, string-valued store with synchronous operations. Every
//! value is a string; structured data goes through [`set_json`] and
//! [`get_json`].
//!
//! # Implementations
//!
//! | Store | Persistence | Use |
//! |-------|-------------|-----|
//! | [`MemoryStore`] | none | tests, scratch work |
//! | [`FileStore`] | one JSON file per origin | the CLI |

pub mod entries;
pub mod file;
pub mod memory;
pub mod origin;

pub use entries::Entries;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use origin::Origin;

use crate::error::{LocalcartError, LocalcartResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Synchronous key-value storage area.
///
/// Mutations are visible to subsequent reads as soon as they return. A
/// failed mutation leaves the store unchanged.
pub trait KeyValueStore {
    /// Stored value for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Create or overwrite `key`
    fn set(&mut self, key: &str, value: &str) -> LocalcartResult<()>;

    /// Delete `key`; absent keys are not an error
    fn remove(&mut self, key: &str) -> LocalcartResult<()>;

    /// Delete every entry
    fn clear(&mut self) -> LocalcartResult<()>;

    /// Number of entries
    fn len(&self) -> usize;

    /// All keys in insertion order
    fn keys(&self) -> Vec<String>;

    /// Key at `index` in insertion order
    fn key(&self, index: usize) -> Option<String> {
        self.keys().into_iter().nth(index)
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> LocalcartResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> LocalcartResult<()> {
        (**self).remove(key)
    }

    fn clear(&mut self) -> LocalcartResult<()> {
        (**self).clear()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }

    fn key(&self, index: usize) -> Option<String> {
        (**self).key(index)
    }
}

/// Read `key` and decode it as JSON. Absent keys yield `None`.
pub fn get_json<T, S>(store: &S, key: &str) -> LocalcartResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key) {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn set_json<T, S>(store: &mut S, key: &str, value: &T) -> LocalcartResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Reject an insert that would push `entries` past `quota` bytes.
///
/// A quota of zero disables the check.
pub(crate) fn check_quota(
    origin: &str,
    entries: &Entries,
    quota: usize,
    key: &str,
    value: &str,
) -> LocalcartResult<()> {
    if quota == 0 {
        return Ok(());
    }
    let needed = entries.usage_after_insert(key, value);
    if needed > quota {
        return Err(LocalcartError::QuotaExceeded {
            origin: origin.to_string(),
            needed,
            quota,
        });
    }
    Ok(())
}
