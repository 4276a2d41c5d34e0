//! Named screen-size classes (breakpoints)

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One screen-size class
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Class name, also the key of the class's fragment set in the theme
    pub name: Arc<str>,
    /// Widest window (logical pixels) still in this class; `None` means
    /// unbounded.
    #[serde(default)]
    pub max_width: Option<f32>,
}

impl Breakpoint {
    pub fn new(name: impl Into<Arc<str>>, max_width: Option<f32>) -> Self {
        Self {
            name: name.into(),
            max_width,
        }
    }
}

/// Ordered set of screen-size classes, narrowest first
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenSizes {
    breakpoints: Vec<Breakpoint>,
}

impl ScreenSizes {
    pub fn new(breakpoints: Vec<Breakpoint>) -> Self {
        Self { breakpoints }
    }

    /// Classes identified by name only, with no width classification
    pub fn named<N: Into<Arc<str>>>(names: impl IntoIterator<Item = N>) -> Self {
        Self::new(
            names
                .into_iter()
                .map(|name| Breakpoint::new(name, None))
                .collect(),
        )
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.breakpoints.iter().map(|bp| &bp.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.breakpoints.iter().any(|bp| &*bp.name == name)
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Class for a window width.
    ///
    /// The first class whose `max_width` is unset or not exceeded wins; a
    /// width wider than every bound falls into the last class.
    pub fn classify(&self, width: f32) -> Option<&Arc<str>> {
        self.breakpoints
            .iter()
            .find(|bp| bp.max_width.map_or(true, |max| width <= max))
            .or_else(|| self.breakpoints.last())
            .map(|bp| &bp.name)
    }
}
