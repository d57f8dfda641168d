//! The provider registry value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::types::Provider;

/// A registry of named tile providers.
///
/// The table is an explicit value, not a global: build one (or take the
/// [`bundled`](Self::bundled) set), hand it to a
/// [`Resolver`](super::Resolver), and it is never mutated afterwards.
/// Provider names are case-sensitive unique keys.
///
/// The table serializes transparently as a name-to-provider mapping, so
/// hosts can version it as reference data in whatever format they already
/// use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderTable(BTreeMap<String, Provider>);

impl ProviderTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bundled provider set.
    pub fn bundled() -> Self {
        defaults::bundled_table()
    }

    /// Registers a provider under a name, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, provider: Provider) {
        self.0.insert(name.into(), provider);
    }

    /// Builder-style registration.
    pub fn with(mut self, name: impl Into<String>, provider: Provider) -> Self {
        self.insert(name, provider);
        self
    }

    /// Looks up a provider by name (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&Provider> {
        self.0.get(name)
    }

    /// Returns `true` if a provider with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of registered providers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table has no providers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over provider names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over `(name, provider)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Provider)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Provider)> for ProviderTable {
    fn from_iter<T: IntoIterator<Item = (K, Provider)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = ProviderTable::new().with("OpenStreetMap", Provider::new("https://x/{z}"));

        assert!(table.contains("OpenStreetMap"));
        assert!(!table.contains("openstreetmap"));
    }

    #[test]
    fn test_insert_replaces_previous_entry() {
        let mut table = ProviderTable::new();
        table.insert("A", Provider::new("https://old/{z}"));
        table.insert("A", Provider::new("https://new/{z}"));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("A").map(|p| p.url.as_str()), Some("https://new/{z}"));
    }

    #[test]
    fn test_bundled_table_is_not_empty() {
        let table = ProviderTable::bundled();
        assert!(table.contains("OpenStreetMap"));
        assert!(table.len() >= 4, "bundled table should carry the full set");
    }
}
