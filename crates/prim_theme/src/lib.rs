//! Prim Theme
//!
//! Turns design tokens into a [`Theme`]: hundreds of precomputed atomic style
//! fragments (`w["lg"]`, `bg["base"]`, `border["sm"]`, ...) plus one copy of
//! the whole set per screen-size class, live only for the active class.
//!
//! # Pieces
//!
//! - [`TokenConfig`]: the token tables, loadable from TOML
//! - [`build_fragment_set`]: tokens and a palette to a [`FragmentSet`]
//! - [`gate`]: live and inert sets assigned to breakpoints
//! - [`PrimProvider`]: reactive store that rebuilds only when mode, palette
//!   or screen-size class change
//! - [`use_prim`]: read the current theme inside a provider scope
//!
//! # Example
//!
//! ```rust
//! use prim_core::Signal;
//! use prim_theme::{atoms, configure_prim, default_options, use_prim, Mode};
//!
//! let width = Signal::new(375.0);
//! let provider = configure_prim(default_options(Signal::new(Mode::Light), width.clone()))
//!     .unwrap()
//!     .with_custom_atoms(|prim| {
//!         atoms([(
//!             "card",
//!             [&prim.bg["surface0"], &prim.rounded["lg"], &prim.breakpoint("tablet").p["xl"]],
//!         )])
//!     });
//!
//! provider.provide(|| {
//!     let prim = use_prim();
//!     assert_eq!(prim.screen_size(), "x");
//!     assert_eq!(prim.atom("card").resolve().len(), 2);
//! });
//!
//! width.set(700.0);
//! provider.provide(|| assert_eq!(use_prim().atom("card").resolve().len(), 3));
//! ```

pub mod builder;
pub mod config;
pub mod defaults;
pub mod gate;
pub mod mode;
pub mod provider;
pub mod screen;
pub mod theme;

pub use builder::{
    build_fragment_set, ContentAtoms, FlexAtoms, FragmentSet, InsetAtoms, ItemsAtoms,
    JustifyAtoms, OverflowAtoms, SelfAtoms,
};
pub use config::{ColorModes, ConfigError, PrimOptions, TextStyles, TokenConfig};
pub use defaults::{default_options, default_tokens};
pub use gate::{gate, GatedSets};
pub use mode::Mode;
pub use provider::{configure_prim, try_use_prim, use_prim, AtomFn, PrimProvider, ThemeKey};
pub use screen::{Breakpoint, ScreenSizes};
pub use theme::{atoms, Atoms, Theme};
