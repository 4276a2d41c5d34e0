//! Atomic style fragments and the sheets that create them
//!
//! A fragment is the smallest unit of style the theme hands out: usually one
//! attribute set to one token value (`{ width: 44 }`). Fragments come in two
//! flavours:
//!
//! - **Live**: carries its declarations and takes part in style merging
//! - **Inert**: carries nothing; merging it is a no-op
//!
//! Which flavour is produced is decided by the [`StyleSheet`] passed to the
//! builder, never by the call site selecting a fragment. That is what lets a
//! breakpoint-scoped fragment set be switched off wholesale while keeping the
//! exact same shape.

use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::attribute::StyleAttribute;
use crate::value::StyleValue;

/// One attribute/value pair
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub attribute: StyleAttribute,
    pub value: StyleValue,
}

impl Declaration {
    pub fn new(attribute: StyleAttribute, value: impl Into<StyleValue>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }
}

/// Shorthand for [`Declaration::new`]
pub fn decl(attribute: StyleAttribute, value: impl Into<StyleValue>) -> Declaration {
    Declaration::new(attribute, value)
}

/// Immutable atomic style record
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StyleFragment {
    /// Real declarations, shared between every theme that holds them
    Live(Arc<[Declaration]>),
    /// Absent in every attribute; ignored by style merging
    #[default]
    Inert,
}

/// Shared inert fragment, handed out for lookups that miss
pub static INERT: StyleFragment = StyleFragment::Inert;

impl StyleFragment {
    /// Live fragment from a list of declarations
    pub fn live(declarations: impl IntoIterator<Item = Declaration>) -> Self {
        StyleFragment::Live(declarations.into_iter().collect())
    }

    /// Live fragment with a single declaration
    pub fn single(attribute: StyleAttribute, value: impl Into<StyleValue>) -> Self {
        Self::live([Declaration::new(attribute, value)])
    }

    pub fn is_live(&self) -> bool {
        matches!(self, StyleFragment::Live(_))
    }

    pub fn is_inert(&self) -> bool {
        matches!(self, StyleFragment::Inert)
    }

    /// Declarations carried by the fragment (empty when inert)
    pub fn declarations(&self) -> &[Declaration] {
        match self {
            StyleFragment::Live(declarations) => declarations,
            StyleFragment::Inert => &[],
        }
    }

    /// Value for an attribute, if the fragment is live and sets it
    pub fn get(&self, attribute: StyleAttribute) -> Option<&StyleValue> {
        self.declarations()
            .iter()
            .rev()
            .find(|d| d.attribute == attribute)
            .map(|d| &d.value)
    }
}

impl Serialize for StyleFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleFragment::Live(declarations) => {
                let mut map = serializer.serialize_map(Some(declarations.len()))?;
                for declaration in declarations.iter() {
                    map.serialize_entry(declaration.attribute.name(), &declaration.value)?;
                }
                map.end()
            }
            StyleFragment::Inert => serializer.serialize_none(),
        }
    }
}

/// Fragment constructor used by the theme builder.
///
/// The builder describes every fragment it wants; the sheet decides what
/// actually gets stored.
pub trait StyleSheet {
    /// Turn a set of declarations into a fragment
    fn create(&self, declarations: Vec<Declaration>) -> StyleFragment;

    /// Whether fragments from this sheet carry real values
    fn is_live(&self) -> bool;
}

/// Pass-through sheet: fragments keep their declarations
#[derive(Clone, Copy, Debug, Default)]
pub struct LiveSheet;

impl StyleSheet for LiveSheet {
    fn create(&self, declarations: Vec<Declaration>) -> StyleFragment {
        StyleFragment::live(declarations)
    }

    fn is_live(&self) -> bool {
        true
    }
}

/// Disabled sheet: every fragment comes out inert
#[derive(Clone, Copy, Debug, Default)]
pub struct InertSheet;

impl StyleSheet for InertSheet {
    fn create(&self, _declarations: Vec<Declaration>) -> StyleFragment {
        StyleFragment::Inert
    }

    fn is_live(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sheets() {
        let declarations = vec![decl(StyleAttribute::Width, 44.0)];
        let live = LiveSheet.create(declarations.clone());
        let inert = InertSheet.create(declarations);

        assert!(live.is_live());
        assert_eq!(live.get(StyleAttribute::Width), Some(&StyleValue::Number(44.0)));
        assert!(inert.is_inert());
        assert!(inert.declarations().is_empty());
        assert_eq!(inert.get(StyleAttribute::Width), None);
    }

    #[test]
    fn test_serialize_live_and_inert() {
        let fragment = StyleFragment::live([
            decl(StyleAttribute::TextDecorationStyle, StyleValue::keyword("solid")),
            decl(StyleAttribute::TextDecorationLine, StyleValue::keyword("underline")),
        ]);
        assert_eq!(
            serde_json::to_value(&fragment).unwrap(),
            json!({ "textDecorationStyle": "solid", "textDecorationLine": "underline" })
        );
        assert_eq!(serde_json::to_value(&INERT).unwrap(), json!(null));
    }
}
