use crate::errors::{LedgerError, Result};

/// Categories every new session starts with, in display order.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Transport", "Entertainment", "Books"];

/// Ordered, append-only set of unique category names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    names: Vec<String>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl CategorySet {
    /// Appends `name` unless it is already present.
    ///
    /// Returns `Ok(true)` when the set grew and `Ok(false)` for a duplicate.
    pub fn insert(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyCategoryName);
        }
        if self.contains(name) {
            return Ok(false);
        }
        self.names.push(name.to_string());
        Ok(true)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
