//! Cart contents

use crate::store::Entries;
use serde::{Deserialize, Serialize};

/// Product name to quantity, in the order products were first added.
///
/// Quantities are kept exactly as entered; nothing here interprets them
/// as numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Entries,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity recorded for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items.get(name)
    }

    /// Record `quantity` for `name`, replacing any earlier quantity.
    ///
    /// Returns the replaced quantity.
    pub fn set(&mut self, name: &str, quantity: &str) -> Option<String> {
        self.items.insert(name, quantity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter()
    }

    /// Display lines, one per product, in iteration order
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|(name, quantity)| display_line(name, quantity))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Cart {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Render one cart entry
pub fn display_line(name: &str, quantity: &str) -> String {
    format!("{} : {} pcs.", name, quantity)
}
