//! Named fragment groups and the attribute expander

use std::ops::Index;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::attribute::StyleAttribute;
use crate::fragment::{Declaration, StyleFragment, StyleSheet, INERT};
use crate::tokens::TokenTable;
use crate::value::StyleValue;

/// A group of fragments addressed by name, e.g. every `width` fragment.
///
/// Indexing with a name the category does not hold yields the inert
/// fragment: a selector pointing at an unknown token renders as a no-op.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Category {
    fragments: IndexMap<Arc<str>, StyleFragment>,
}

impl Category {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragment for `name`, inert if absent
    pub fn get(&self, name: &str) -> &StyleFragment {
        self.fragments.get(name).unwrap_or(&INERT)
    }

    /// Fragment for `name`, `None` if the category has no such entry
    pub fn try_get(&self, name: &str) -> Option<&StyleFragment> {
        self.fragments.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    /// Insert or replace a fragment
    pub fn insert(&mut self, name: impl Into<Arc<str>>, fragment: StyleFragment) {
        self.fragments.insert(name.into(), fragment);
    }

    /// Merge another category on top of this one; `other` wins on collision
    pub fn extend(&mut self, other: Category) {
        self.fragments.extend(other.fragments);
    }

    /// Builder-style [`extend`](Self::extend)
    pub fn merged(mut self, other: Category) -> Self {
        self.extend(other);
        self
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.fragments.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &StyleFragment)> {
        self.fragments.iter()
    }
}

impl Index<&str> for Category {
    type Output = StyleFragment;

    fn index(&self, name: &str) -> &StyleFragment {
        self.get(name)
    }
}

impl FromIterator<(Arc<str>, StyleFragment)> for Category {
    fn from_iter<I: IntoIterator<Item = (Arc<str>, StyleFragment)>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}

/// Expand a token table into one fragment per token.
///
/// For every `name` in `table` the result holds exactly
/// `{ attribute: table[name] }`, created through `sheet`.
pub fn expand<S>(sheet: &S, table: &TokenTable, attribute: StyleAttribute) -> Category
where
    S: StyleSheet + ?Sized,
{
    table
        .iter()
        .map(|(name, value)| {
            let fragment = sheet.create(vec![Declaration::new(attribute, value.clone())]);
            (Arc::clone(name), fragment)
        })
        .collect()
}

/// Build a category from literal fragments, each given as a name plus its
/// declarations.
pub fn literals<S, I, N>(sheet: &S, entries: I) -> Category
where
    S: StyleSheet + ?Sized,
    I: IntoIterator<Item = (N, Vec<Declaration>)>,
    N: Into<Arc<str>>,
{
    entries
        .into_iter()
        .map(|(name, declarations)| (name.into(), sheet.create(declarations)))
        .collect()
}

/// Literal `full` (100%) and `half` (50%) fragments for a relative-size
/// attribute such as `width` or `padding`.
pub fn relative_sizes<S>(sheet: &S, attribute: StyleAttribute) -> Category
where
    S: StyleSheet + ?Sized,
{
    literals(
        sheet,
        [
            ("full", vec![Declaration::new(attribute, StyleValue::Percent(100.0))]),
            ("half", vec![Declaration::new(attribute, StyleValue::Percent(50.0))]),
        ],
    )
}
