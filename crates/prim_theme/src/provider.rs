//! Reactive theme store
//!
//! [`PrimProvider`] reads the mode and screen-size sources, builds a
//! [`Theme`] for the resulting input triple and caches it. The cached theme
//! is reused until one of the three inputs changes. The palette is compared
//! by reference, so replacing the palette `Arc` counts as a change even when
//! its contents are equal.
//!
//! Rendering code reaches the current theme through [`use_prim`] inside a
//! [`PrimProvider::provide`] scope:
//!
//! ```rust
//! use prim_core::Signal;
//! use prim_theme::{configure_prim, default_options, use_prim, Mode};
//!
//! let mode = Signal::new(Mode::Light);
//! let provider = configure_prim(default_options(mode.clone(), Signal::new(820.0))).unwrap();
//!
//! provider.provide(|| {
//!     let prim = use_prim();
//!     assert_eq!(prim.live_breakpoint(), Some("lg"));
//!     assert!(prim.bg["base"].is_live());
//! });
//!
//! mode.set(Mode::Dark);
//! assert_eq!(provider.theme().mode(), Mode::Dark);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::sync::{Arc, Mutex};

use prim_core::{Memo, TokenTable};

use crate::config::{ConfigError, PrimOptions, TokenConfig};
use crate::mode::Mode;
use crate::theme::{Atoms, Theme};

/// Custom atom function: computes named composite styles from a theme
pub type AtomFn = Box<dyn Fn(&Theme) -> Atoms + Send + Sync>;

/// The inputs a theme depends on
#[derive(Clone, Debug)]
pub struct ThemeKey {
    pub mode: Mode,
    pub palette: Arc<TokenTable>,
    pub screen_size: Arc<str>,
}

impl PartialEq for ThemeKey {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && Arc::ptr_eq(&self.palette, &other.palette)
            && self.screen_size == other.screen_size
    }
}

/// Owns the configuration and the cached theme
pub struct PrimProvider {
    options: PrimOptions,
    custom_atoms: Option<AtomFn>,
    memo: Mutex<Memo<ThemeKey, Arc<Theme>>>,
}

impl PrimProvider {
    /// Validate the tokens and create a provider
    pub fn new(options: PrimOptions) -> Result<Self, ConfigError> {
        options.tokens.validate()?;
        tracing::debug!(
            "PrimProvider::new - {} screen sizes, {} palette colors",
            options.tokens.screen_sizes.len(),
            options.tokens.colors.light.len()
        );
        Ok(Self {
            options,
            custom_atoms: None,
            memo: Mutex::new(Memo::new()),
        })
    }

    /// Compute custom atoms for every theme this provider builds.
    ///
    /// The function sees the fully built theme, so atoms can combine any
    /// fragments, breakpoint-scoped ones included.
    pub fn with_custom_atoms<F>(mut self, atoms: F) -> Self
    where
        F: Fn(&Theme) -> Atoms + Send + Sync + 'static,
    {
        self.custom_atoms = Some(Box::new(atoms));
        self.memo.lock().unwrap().invalidate();
        self
    }

    pub fn tokens(&self) -> &TokenConfig {
        &self.options.tokens
    }

    /// Read both sources and resolve the palette
    pub fn current_key(&self) -> ThemeKey {
        let mode = (self.options.use_dark_mode)();
        ThemeKey {
            mode,
            palette: Arc::clone(self.options.tokens.colors.for_mode(mode)),
            screen_size: (self.options.use_screen_size)(),
        }
    }

    /// Current theme; rebuilt only when the input triple changed
    pub fn theme(&self) -> Arc<Theme> {
        let key = self.current_key();
        if let Some(theme) = self.memo.lock().unwrap().lookup(&key) {
            tracing::trace!(
                "PrimProvider::theme - reusing {} / {}",
                theme.mode(),
                theme.screen_size()
            );
            return theme;
        }

        // Built unlocked: custom atoms run caller code that may panic
        let theme = Arc::new(self.build(&key));
        self.memo.lock().unwrap().store(key, Arc::clone(&theme));
        theme
    }

    fn build(&self, key: &ThemeKey) -> Theme {
        tracing::debug!(
            "PrimProvider::theme - rebuilding for mode {} and screen size `{}`",
            key.mode,
            key.screen_size
        );
        let theme = Theme::build(
            &self.options.tokens,
            key.mode,
            Arc::clone(&key.palette),
            Arc::clone(&key.screen_size),
        );
        match &self.custom_atoms {
            Some(atoms) => {
                let atoms = atoms(&theme);
                theme.with_atoms(atoms)
            }
            None => theme,
        }
    }

    /// Run `f` with the current theme visible to [`use_prim`].
    ///
    /// Scopes nest; the innermost provider wins.
    pub fn provide<R>(&self, f: impl FnOnce() -> R) -> R {
        let _scope = Scope::enter(self.theme());
        f()
    }

    /// Number of theme rebuilds so far
    pub fn recomputations(&self) -> u64 {
        self.memo.lock().unwrap().misses()
    }
}

impl fmt::Debug for PrimProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimProvider")
            .field("options", &self.options)
            .field("custom_atoms", &self.custom_atoms.is_some())
            .finish_non_exhaustive()
    }
}

thread_local! {
    static SCOPES: RefCell<Vec<Arc<Theme>>> = const { RefCell::new(Vec::new()) };
}

/// Pops its theme off the scope stack when dropped, unwinding included
struct Scope;

impl Scope {
    fn enter(theme: Arc<Theme>) -> Self {
        SCOPES.with(|scopes| scopes.borrow_mut().push(theme));
        Scope
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}

/// Theme of the innermost [`PrimProvider::provide`] scope, if any
pub fn try_use_prim() -> Option<Arc<Theme>> {
    SCOPES.with(|scopes| scopes.borrow().last().cloned())
}

/// Theme of the innermost [`PrimProvider::provide`] scope.
///
/// # Panics
///
/// Panics when called outside every provider scope.
pub fn use_prim() -> Arc<Theme> {
    try_use_prim().expect("use_prim() called outside a PrimProvider scope. Wrap rendering in PrimProvider::provide")
}

/// Create a provider from options.
///
/// Attach custom atoms with [`PrimProvider::with_custom_atoms`].
pub fn configure_prim(options: PrimOptions) -> Result<PrimProvider, ConfigError> {
    PrimProvider::new(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorModes;
    use crate::screen::ScreenSizes;
    use prim_core::{Color, Signal};

    fn options(mode: Signal<Mode>, size: Signal<Arc<str>>) -> PrimOptions {
        let tokens = TokenConfig {
            colors: ColorModes::new(
                TokenTable::from_pairs([("base", Color::WHITE)]),
                TokenTable::from_pairs([("base", Color::BLACK)]),
            ),
            screen_sizes: ScreenSizes::named(["se", "tablet"]),
            ..Default::default()
        };
        PrimOptions::with_signals(tokens, mode, size)
    }

    #[test]
    fn test_key_compares_palette_by_reference() {
        let a = Arc::new(TokenTable::from_pairs([("base", Color::WHITE)]));
        let b = Arc::new((*a).clone());
        let key = |palette: &Arc<TokenTable>| ThemeKey {
            mode: Mode::Light,
            palette: Arc::clone(palette),
            screen_size: "se".into(),
        };
        assert_eq!(key(&a), key(&a));
        assert_ne!(key(&a), key(&b));
    }

    #[test]
    fn test_scopes_nest() {
        let light = configure_prim(options(Signal::new(Mode::Light), Signal::new("se".into()))).unwrap();
        let dark = configure_prim(options(Signal::new(Mode::Dark), Signal::new("se".into()))).unwrap();

        assert!(try_use_prim().is_none());
        light.provide(|| {
            assert_eq!(use_prim().mode(), Mode::Light);
            dark.provide(|| assert_eq!(use_prim().mode(), Mode::Dark));
            assert_eq!(use_prim().mode(), Mode::Light);
        });
        assert!(try_use_prim().is_none());
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let mut options = options(Signal::new(Mode::Light), Signal::new("se".into()));
        options.tokens.screen_sizes = ScreenSizes::default();
        assert!(matches!(
            configure_prim(options),
            Err(ConfigError::NoScreenSizes)
        ));
    }

    #[test]
    fn test_with_custom_atoms_invalidates_cache() {
        let provider = configure_prim(options(Signal::new(Mode::Light), Signal::new("se".into()))).unwrap();
        let before = provider.theme();
        let provider = provider.with_custom_atoms(|theme| {
            crate::theme::atoms([("surface", &theme.bg["base"])])
        });
        let after = provider.theme();

        assert!(!Arc::ptr_eq(&before, &after));
        assert!(after.atom("surface").resolve().len() == 1);
    }
}
