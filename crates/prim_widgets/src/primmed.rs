//! Style-binding wrapper
//!
//! [`primmed`] wraps a component with a selector over the current theme. On
//! every render the selector's output is placed in front of whatever style
//! the caller passed, so caller styles win on conflicts:
//!
//! ```rust
//! use prim_core::{decl, Signal, StyleAttribute, StyleValue};
//! use prim_theme::{configure_prim, default_options, Mode};
//! use prim_widgets::{primmed, Component, RenderTree, Styled, View, ViewProps};
//!
//! let provider = configure_prim(default_options(Signal::new(Mode::Light), Signal::new(390.0))).unwrap();
//! let card = primmed(View::new(), |prim| [&prim.p["md"], &prim.bg["base"]].into());
//! assert_eq!(card.display_name(), "Primmed.View");
//!
//! let mut tree = RenderTree::new();
//! let props = ViewProps::new().with_style(prim_core::StyleProp::inline([decl(StyleAttribute::Padding, 2.0)]));
//! let id = provider.provide(|| card.render(props, None, &mut tree));
//!
//! let style = tree.style(id).unwrap();
//! assert_eq!(style.get(StyleAttribute::Padding), Some(&StyleValue::Number(2.0)));
//! assert!(style.get(StyleAttribute::BackgroundColor).is_some());
//! ```

use std::fmt;

use prim_core::StyleProp;
use prim_theme::{use_prim, Theme};

use crate::statics::Statics;
use crate::widget::{Component, Ref, RenderTree, Styled, WidgetId};

/// A component whose style slot is pre-filled from the theme
pub struct Primmed<C, F> {
    target: C,
    selector: F,
    display_name: String,
    statics: Statics,
}

/// Wrap `target` so it renders with `selector(theme)` ahead of the caller's
/// style.
///
/// The wrapper has the target's props and instance types, forwards refs to
/// the target, and exposes the target's non-reserved statics.
pub fn primmed<C, F>(target: C, selector: F) -> Primmed<C, F>
where
    C: Component,
    F: Fn(&Theme) -> StyleProp,
{
    let display_name = format!("Primmed.{}", target.display_name());
    let statics = Statics::hoisted_from(target.statics());
    tracing::debug!(
        "primmed - wrapping {} with {} hoisted statics",
        display_name,
        statics.len()
    );
    Primmed {
        target,
        selector,
        display_name,
        statics,
    }
}

impl<C, F> Primmed<C, F> {
    /// The wrapped component
    pub fn target(&self) -> &C {
        &self.target
    }
}

impl<C, F> Component for Primmed<C, F>
where
    C: Component,
    F: Fn(&Theme) -> StyleProp,
{
    type Props = C::Props;
    type Instance = C::Instance;

    fn display_name(&self) -> String {
        self.display_name.clone()
    }

    fn statics(&self) -> &Statics {
        &self.statics
    }

    /// # Panics
    ///
    /// Panics outside a provider scope, like [`use_prim`].
    fn render(
        &self,
        mut props: C::Props,
        instance_ref: Option<&Ref<C::Instance>>,
        tree: &mut RenderTree,
    ) -> WidgetId {
        let prim = use_prim();
        let selected = (self.selector)(&prim);
        let caller = std::mem::take(props.style_mut());
        *props.style_mut() = StyleProp::list([selected, caller]);
        tracing::trace!(
            "{}::render - mode {}, screen size `{}`",
            self.display_name,
            prim.mode(),
            prim.screen_size()
        );
        self.target.render(props, instance_ref, tree)
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Primmed<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Primmed")
            .field("display_name", &self.display_name)
            .field("target", &self.target)
            .field("statics", &self.statics)
            .finish_non_exhaustive()
    }
}
