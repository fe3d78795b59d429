//! Ordered map type for VIMSON dictionaries.
//!
//! This module provides [`Dict`], a wrapper around [`IndexMap`] that maintains
//! insertion order for dictionary entries. The generator walks entries in
//! order, so a `Dict` built in a known order produces deterministic output.
//!
//! Inserting an existing key replaces its value and keeps its position,
//! which gives duplicate keys in the input "last write wins" semantics.
//!
//! ## Examples
//!
//! ```rust
//! use vimson::{Dict, Value};
//!
//! let mut dict = Dict::new();
//! dict.insert("name".to_string(), Value::from("Alice"));
//! dict.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(dict.len(), 2);
//! assert_eq!(dict.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to VIMSON values.
///
/// Keys are always strings; the format has no other key type. Iteration
/// follows insertion order.
///
/// # Examples
///
/// ```rust
/// use vimson::{Dict, Value};
///
/// let mut dict = Dict::new();
/// dict.insert("first".to_string(), Value::from(1));
/// dict.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = dict.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dict(IndexMap<String, crate::Value>);

impl Dict {
    /// Creates an empty `Dict`.
    #[must_use]
    pub fn new() -> Self {
        Dict(IndexMap::new())
    }

    /// Creates an empty `Dict` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dict(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the dictionary.
    ///
    /// If the key was already present, the old value is returned and the new
    /// value takes its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vimson::{Dict, Value};
    ///
    /// let mut dict = Dict::new();
    /// assert!(dict.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(dict.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the dictionary contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the dictionary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the dictionary contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Value>> for Dict {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        Dict(map.into_iter().collect())
    }
}

impl From<Dict> for HashMap<String, crate::Value> {
    fn from(dict: Dict) -> Self {
        dict.0.into_iter().collect()
    }
}

impl IntoIterator for Dict {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for Dict {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        Dict(IndexMap::from_iter(iter))
    }
}
