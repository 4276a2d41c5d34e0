//! Prim Core
//!
//! The style vocabulary shared by the Prim theme engine and its widgets:
//!
//! - **Values and attributes**: [`StyleValue`], [`StyleAttribute`], [`Color`]
//! - **Fragments**: immutable atomic style records, live or inert
//! - **Token tables**: named design values read from configuration
//! - **Expansion**: [`expand`] turns a token table into one fragment per token
//! - **Style props**: what a component's `style` slot holds, and how it flattens
//! - **Reactivity**: [`Signal`] inputs and the [`Memo`] cache
//!
//! # Example
//!
//! ```rust
//! use prim_core::{expand, LiveSheet, StyleAttribute, StyleValue, TokenTable};
//!
//! let spacing = TokenTable::from_pairs([("sm", 22.0), ("lg", 44.0)]);
//! let width = expand(&LiveSheet, &spacing, StyleAttribute::Width);
//!
//! assert_eq!(
//!     width["lg"].get(StyleAttribute::Width),
//!     Some(&StyleValue::Number(44.0))
//! );
//! assert!(width["xl"].is_inert());
//! ```

pub mod attribute;
pub mod category;
pub mod color;
pub mod error;
pub mod fragment;
pub mod memo;
pub mod signal;
pub mod style;
pub mod tokens;
pub mod value;

pub use attribute::StyleAttribute;
pub use category::{expand, literals, relative_sizes, Category};
pub use color::Color;
pub use error::StyleError;
pub use fragment::{decl, Declaration, InertSheet, LiveSheet, StyleFragment, StyleSheet, INERT};
pub use memo::Memo;
pub use signal::{DirtyFlag, Signal};
pub use style::{ResolvedStyle, StyleProp};
pub use tokens::TokenTable;
pub use value::StyleValue;
