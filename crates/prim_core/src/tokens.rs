//! Token tables: named scalar design values

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::StyleValue;

/// Name → value mapping for one token category (spacing, palette, ...).
///
/// Names are unique. Insertion order is kept so generated categories list
/// their entries the way the configuration did, but nothing depends on it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenTable {
    entries: IndexMap<Arc<str>, StyleValue>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(name, value)` pairs; later duplicates replace
    /// earlier ones.
    pub fn from_pairs<N, V, I>(pairs: I) -> Self
    where
        N: Into<Arc<str>>,
        V: Into<StyleValue>,
        I: IntoIterator<Item = (N, V)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { entries }
    }

    /// Insert or replace a token
    pub fn insert(&mut self, name: impl Into<Arc<str>>, value: impl Into<StyleValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<Arc<str>>, value: impl Into<StyleValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &StyleValue)> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a TokenTable {
    type Item = (&'a Arc<str>, &'a StyleValue);
    type IntoIter = indexmap::map::Iter<'a, Arc<str>, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_from_pairs_and_lookup() {
        let table = TokenTable::from_pairs([("sm", 22.0), ("lg", 44.0)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("lg"), Some(&StyleValue::Number(44.0)));
        assert_eq!(table.get("xl"), None);
    }

    #[test]
    fn test_duplicate_names_keep_last_value() {
        let table = TokenTable::from_pairs([("sm", 1.0), ("sm", 2.0)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("sm"), Some(&StyleValue::Number(2.0)));
    }

    #[test]
    fn test_deserialize_mixed_values() {
        let table: TokenTable =
            serde_json::from_str(r##"{ "base": "#fff", "half": "50%", "sm": 4 }"##).unwrap();
        assert_eq!(table.get("base"), Some(&StyleValue::Color(Color::WHITE)));
        assert_eq!(table.get("half"), Some(&StyleValue::Percent(50.0)));
        assert_eq!(table.get("sm"), Some(&StyleValue::Number(4.0)));
    }
}
