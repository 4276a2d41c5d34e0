//! Style props as handed to components, and their flattening
//!
//! A [`StyleProp`] mirrors what a component receives in its `style` slot:
//! nothing, a fragment, an inline declaration list, or a (possibly nested)
//! list of any of those. [`StyleProp::resolve`] flattens it the way the host
//! renderer merges style arrays: left to right, later entries overriding
//! earlier ones, inert fragments and empty slots skipped.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::attribute::StyleAttribute;
use crate::fragment::{Declaration, StyleFragment};
use crate::value::StyleValue;

/// Value of a component's `style` slot
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StyleProp {
    /// No style
    #[default]
    None,
    /// A theme fragment (possibly inert)
    Fragment(StyleFragment),
    /// Caller-written inline declarations
    Inline(SmallVec<[Declaration; 2]>),
    /// Ordered list; later entries win
    List(Vec<StyleProp>),
}

impl StyleProp {
    /// Inline style from declarations
    pub fn inline(declarations: impl IntoIterator<Item = Declaration>) -> Self {
        StyleProp::Inline(declarations.into_iter().collect())
    }

    /// Ordered list of style entries
    pub fn list(entries: impl IntoIterator<Item = StyleProp>) -> Self {
        StyleProp::List(entries.into_iter().collect())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, StyleProp::None)
    }

    /// Entries of a list, or the prop itself as a single entry
    pub fn entries(&self) -> &[StyleProp] {
        match self {
            StyleProp::List(entries) => entries,
            other => std::slice::from_ref(other),
        }
    }

    /// Flatten into the final attribute map
    pub fn resolve(&self) -> ResolvedStyle {
        let mut resolved = ResolvedStyle::default();
        self.resolve_into(&mut resolved);
        resolved
    }

    fn resolve_into(&self, out: &mut ResolvedStyle) {
        match self {
            StyleProp::None | StyleProp::Fragment(StyleFragment::Inert) => {}
            StyleProp::Fragment(fragment) => out.apply(fragment.declarations()),
            StyleProp::Inline(declarations) => out.apply(declarations),
            StyleProp::List(entries) => {
                for entry in entries {
                    entry.resolve_into(out);
                }
            }
        }
    }
}

impl From<StyleFragment> for StyleProp {
    fn from(fragment: StyleFragment) -> Self {
        StyleProp::Fragment(fragment)
    }
}

impl From<&StyleFragment> for StyleProp {
    fn from(fragment: &StyleFragment) -> Self {
        StyleProp::Fragment(fragment.clone())
    }
}

impl From<Vec<StyleProp>> for StyleProp {
    fn from(entries: Vec<StyleProp>) -> Self {
        StyleProp::List(entries)
    }
}

impl<const N: usize> From<[&StyleFragment; N]> for StyleProp {
    fn from(fragments: [&StyleFragment; N]) -> Self {
        StyleProp::list(fragments.into_iter().map(StyleProp::from))
    }
}

impl Serialize for StyleProp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleProp::None => serializer.serialize_none(),
            StyleProp::Fragment(fragment) => fragment.serialize(serializer),
            StyleProp::Inline(declarations) => {
                let mut map = serializer.serialize_map(Some(declarations.len()))?;
                for declaration in declarations {
                    map.serialize_entry(declaration.attribute.name(), &declaration.value)?;
                }
                map.end()
            }
            StyleProp::List(entries) => entries.serialize(serializer),
        }
    }
}

/// Flattened style: one value per attribute
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    values: IndexMap<StyleAttribute, StyleValue>,
}

impl ResolvedStyle {
    fn apply(&mut self, declarations: &[Declaration]) {
        for declaration in declarations {
            self.values
                .insert(declaration.attribute, declaration.value.clone());
        }
    }

    pub fn get(&self, attribute: StyleAttribute) -> Option<&StyleValue> {
        self.values.get(&attribute)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleAttribute, &StyleValue)> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::fragment::decl;

    #[test]
    fn test_later_entries_win() {
        let selected = StyleFragment::single(StyleAttribute::BackgroundColor, Color::WHITE);
        let caller = StyleProp::inline([decl(
            StyleAttribute::BackgroundColor,
            StyleValue::keyword("coral"),
        )]);
        let style = StyleProp::list([StyleProp::from(selected), caller]);

        assert_eq!(
            style.resolve().get(StyleAttribute::BackgroundColor),
            Some(&StyleValue::keyword("coral"))
        );
    }

    #[test]
    fn test_inert_entries_are_skipped() {
        let width = StyleFragment::single(StyleAttribute::Width, 22.0);
        let style = StyleProp::list([
            StyleProp::from(width),
            StyleProp::Fragment(StyleFragment::Inert),
            StyleProp::None,
        ]);

        let resolved = style.resolve();
        assert_eq!(resolved.len(), 1);
        assert_eq!(
            resolved.get(StyleAttribute::Width),
            Some(&StyleValue::Number(22.0))
        );
    }

    #[test]
    fn test_nested_lists_flatten_in_order() {
        let inner = StyleProp::list([
            StyleProp::from(StyleFragment::single(StyleAttribute::Height, 1.0)),
            StyleProp::from(StyleFragment::single(StyleAttribute::Height, 2.0)),
        ]);
        let outer = StyleProp::list([
            inner,
            StyleProp::inline([decl(StyleAttribute::Width, 3.0)]),
        ]);

        let resolved = outer.resolve();
        assert_eq!(
            resolved.get(StyleAttribute::Height),
            Some(&StyleValue::Number(2.0))
        );
        assert_eq!(
            resolved.get(StyleAttribute::Width),
            Some(&StyleValue::Number(3.0))
        );
    }
}
