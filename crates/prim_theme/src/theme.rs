//! Theme snapshot
//!
//! A [`Theme`] is immutable once built. The provider shares it behind an
//! `Arc` and swaps in a new one when the mode, palette or screen-size class
//! changes.

use std::ops::Deref;
use std::sync::Arc;

use indexmap::IndexMap;
use prim_core::{StyleProp, TokenTable};
use serde::{Serialize, Serializer};

use crate::builder::FragmentSet;
use crate::config::TokenConfig;
use crate::gate::gate;
use crate::mode::Mode;

/// Named composite styles computed from a theme
pub type Atoms = IndexMap<Arc<str>, StyleProp>;

/// Collect `(name, style)` pairs into an atom set
pub fn atoms<N, P>(entries: impl IntoIterator<Item = (N, P)>) -> Atoms
where
    N: Into<Arc<str>>,
    P: Into<StyleProp>,
{
    entries
        .into_iter()
        .map(|(name, style)| (name.into(), style.into()))
        .collect()
}

static NO_ATOM: StyleProp = StyleProp::None;

/// One consistent view of every fragment for a (mode, palette, screen size)
/// triple.
///
/// Dereferences to the ungated [`FragmentSet`], so `theme.w["lg"]` and
/// `theme.bg["base"]` work directly.
#[derive(Clone, Debug)]
pub struct Theme {
    mode: Mode,
    screen_size: Arc<str>,
    colors: Arc<TokenTable>,
    fragments: Arc<FragmentSet>,
    inert: Arc<FragmentSet>,
    breakpoints: IndexMap<Arc<str>, Arc<FragmentSet>>,
    atoms: Atoms,
}

impl Theme {
    /// Build a theme for one input triple
    pub fn build(
        tokens: &TokenConfig,
        mode: Mode,
        colors: Arc<TokenTable>,
        screen_size: Arc<str>,
    ) -> Self {
        let gated = gate(tokens, &colors, &screen_size);
        Self {
            mode,
            screen_size,
            colors,
            fragments: gated.live,
            inert: gated.inert,
            breakpoints: gated.breakpoints,
            atoms: Atoms::new(),
        }
    }

    /// Merge custom atoms; an atom with an existing name replaces it
    pub fn with_atoms(mut self, atoms: Atoms) -> Self {
        self.atoms.extend(atoms);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Active screen-size class
    pub fn screen_size(&self) -> &str {
        &self.screen_size
    }

    /// Palette of the current mode
    pub fn colors(&self) -> &Arc<TokenTable> {
        &self.colors
    }

    /// The ungated fragments, live regardless of screen size
    pub fn fragments(&self) -> &Arc<FragmentSet> {
        &self.fragments
    }

    /// Fragment set for a breakpoint: live when `name` is the active class,
    /// inert otherwise (including names that are not configured)
    pub fn breakpoint(&self, name: &str) -> &FragmentSet {
        self.breakpoints.get(name).unwrap_or(&self.inert)
    }

    /// Every configured breakpoint in configuration order
    pub fn breakpoints(&self) -> impl Iterator<Item = (&Arc<str>, &Arc<FragmentSet>)> {
        self.breakpoints.iter()
    }

    /// Breakpoint currently holding the live set
    pub fn live_breakpoint(&self) -> Option<&str> {
        self.breakpoints
            .iter()
            .find(|(_, set)| Arc::ptr_eq(set, &self.fragments))
            .map(|(name, _)| &**name)
    }

    /// Custom atom by name; unknown names yield an empty style
    pub fn atom(&self, name: &str) -> &StyleProp {
        self.atoms.get(name).unwrap_or(&NO_ATOM)
    }

    pub fn atoms(&self) -> &Atoms {
        &self.atoms
    }
}

impl Deref for Theme {
    type Target = FragmentSet;

    fn deref(&self) -> &FragmentSet {
        &self.fragments
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct View<'a> {
            mode: Mode,
            screen_size: &'a str,
            colors: &'a TokenTable,
            #[serde(flatten)]
            fragments: &'a FragmentSet,
            breakpoints: &'a IndexMap<Arc<str>, Arc<FragmentSet>>,
            atoms: &'a Atoms,
        }

        View {
            mode: self.mode,
            screen_size: &self.screen_size,
            colors: &self.colors,
            fragments: &self.fragments,
            breakpoints: &self.breakpoints,
            atoms: &self.atoms,
        }
        .serialize(serializer)
    }
}
