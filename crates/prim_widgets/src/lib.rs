//! Prim Widgets
//!
//! A minimal component model (props with a style slot, refs, static
//! metadata, an in-memory render tree) and [`primmed`], which binds any
//! component's style to the current Prim theme.

pub mod primitives;
pub mod primmed;
pub mod statics;
pub mod widget;

pub use primitives::{Text, TextHandle, TextProps, View, ViewHandle, ViewProps};
pub use primmed::{primmed, Primmed};
pub use statics::{StaticValue, Statics, RESERVED_STATICS};
pub use widget::{Component, Node, Ref, RenderTree, Styled, WidgetId};

pub use prim_theme::{configure_prim, use_prim, PrimProvider};
