//! Breakpoint gating
//!
//! Every breakpoint gets a full fragment set, but only the breakpoint named
//! by the active screen-size class gets the live one. All others share a
//! single inert set of identical shape, so `theme.breakpoint("tablet").w["lg"]`
//! is always addressable and only applies on tablets.

use std::sync::Arc;

use indexmap::IndexMap;
use prim_core::{InertSheet, LiveSheet, TokenTable};

use crate::builder::{build_fragment_set, FragmentSet};
use crate::config::TokenConfig;

/// Result of one gating pass
#[derive(Clone, Debug)]
pub struct GatedSets {
    /// Set built with the live sheet; also the theme's ungated fragments
    pub live: Arc<FragmentSet>,
    /// Set built with the inert sheet
    pub inert: Arc<FragmentSet>,
    /// One entry per configured breakpoint, in configuration order
    pub breakpoints: IndexMap<Arc<str>, Arc<FragmentSet>>,
}

impl GatedSets {
    /// Name of the breakpoint holding the live set, if any
    pub fn live_breakpoint(&self) -> Option<&Arc<str>> {
        self.breakpoints
            .iter()
            .find(|(_, set)| Arc::ptr_eq(set, &self.live))
            .map(|(name, _)| name)
    }
}

/// Build the live and inert sets once and assign them to the breakpoints.
///
/// An `active` class that matches no breakpoint leaves every breakpoint
/// inert. That is a valid state, not an error.
pub fn gate(tokens: &TokenConfig, palette: &TokenTable, active: &str) -> GatedSets {
    let live = Arc::new(build_fragment_set(tokens, palette, &LiveSheet));
    let inert = Arc::new(build_fragment_set(tokens, palette, &InertSheet));

    let breakpoints: IndexMap<_, _> = tokens
        .screen_sizes
        .names()
        .map(|name| {
            let set = if &**name == active { &live } else { &inert };
            (Arc::clone(name), Arc::clone(set))
        })
        .collect();

    if !tokens.screen_sizes.contains(active) {
        tracing::warn!(
            "gate - screen size `{}` matches none of {} breakpoints; all breakpoint styles are inert",
            active,
            breakpoints.len()
        );
    }

    GatedSets {
        live,
        inert,
        breakpoints,
    }
}
