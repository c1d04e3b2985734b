//! Insertion-ordered string map
//!
//! Both the store contents and the cart need a string-to-string mapping
//! whose iteration order is the order keys were first inserted, and whose
//! JSON form is a plain object in that same order.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// String-keyed, string-valued map that iterates in insertion order.
///
/// Overwriting an existing key keeps its position. Removing a key and
/// inserting it again moves it to the end. Integer-like keys get no
/// special ordering.
#[derive(Debug, Clone, Default)]
pub struct Entries {
    items: IndexMap<String, String>,
    usage: usize,
}

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Insert or overwrite, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        let key_len = key.len();
        self.usage += value.len();
        let previous = self.items.insert(key, value);
        match &previous {
            Some(old) => self.usage -= old.len(),
            None => self.usage += key_len,
        }
        previous
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let (k, v) = self.items.shift_remove_entry(key)?;
        self.usage -= k.len() + v.len();
        Some(v)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.usage = 0;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Key at `index` in insertion order
    pub fn key(&self, index: usize) -> Option<&str> {
        self.items.get_index(index).map(|(k, _)| k.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Bytes used by all keys and values.
    pub fn usage_bytes(&self) -> usize {
        self.usage
    }

    /// Bytes that would be used after `insert(key, value)`.
    pub fn usage_after_insert(&self, key: &str, value: &str) -> usize {
        match self.get(key) {
            Some(old) => self.usage - old.len() + value.len(),
            None => self.usage + key.len() + value.len(),
        }
    }
}

// Order-sensitive, unlike IndexMap's own equality
impl PartialEq for Entries {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().eq(other.items.iter())
    }
}

impl Eq for Entries {}

impl From<IndexMap<String, String>> for Entries {
    fn from(items: IndexMap<String, String>) -> Self {
        let usage = items.iter().map(|(k, v)| k.len() + v.len()).sum();
        Self { items, usage }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Entries {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries = Entries::new();
        for (k, v) in iter {
            entries.insert(k, v);
        }
        entries
    }
}

impl Serialize for Entries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Duplicate keys: later value wins, first position kept
        IndexMap::<String, String>::deserialize(deserializer).map(Entries::from)
    }
}
