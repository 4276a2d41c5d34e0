//! Static component metadata
//!
//! Components can carry arbitrary named values next to their render
//! function (sub-components, default values, lookup tables). A wrapper
//! copies these from the component it wraps so callers can keep reaching
//! them through the wrapper.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// Names owned by the component model itself; never copied between
/// components.
pub const RESERVED_STATICS: &[&str] = &[
    "display_name",
    "default_props",
    "prop_types",
    "context_type",
    "context_types",
];

/// A type-erased static value
pub type StaticValue = Arc<dyn Any + Send + Sync>;

/// Named static metadata of a component
#[derive(Clone, Default)]
pub struct Statics {
    entries: FxHashMap<String, StaticValue>,
}

impl Statics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: Any + Send + Sync>(&mut self, name: impl Into<String>, value: T) {
        self.entries.insert(name.into(), Arc::new(value));
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with<T: Any + Send + Sync>(mut self, name: impl Into<String>, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Typed lookup; `None` if absent or of another type
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.entries.get(name)?.downcast_ref()
    }

    /// Untyped lookup
    pub fn get_raw(&self, name: &str) -> Option<&StaticValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every non-reserved entry of `source`, sharing the same values
    pub fn hoisted_from(source: &Statics) -> Self {
        Self {
            entries: source
                .entries
                .iter()
                .filter(|(name, _)| !RESERVED_STATICS.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), Arc::clone(value)))
                .collect(),
        }
    }
}

impl fmt::Debug for Statics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
