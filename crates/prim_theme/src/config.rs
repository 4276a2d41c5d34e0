//! Token configuration and the reactive inputs the provider reads
//!
//! A [`TokenConfig`] is plain data and can be written in TOML:
//!
//! ```toml
//! spacing = { sm = 22, lg = 44 }
//! border_width = { hairline = 0.5, sm = 1 }
//!
//! [colors.light]
//! base = "#fff"
//! fg = "#000"
//!
//! [colors.dark]
//! base = "#000"
//! fg = "#fff"
//!
//! [[screen_sizes]]
//! name = "phone"
//! max_width = 500
//!
//! [[screen_sizes]]
//! name = "tablet"
//!
//! [text_styles.title]
//! fontSize = 24
//! fontWeight = "600"
//! ```
//!
//! [`PrimOptions`] pairs the tokens with the two reactive inputs: the current
//! appearance mode and the current screen-size class.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use prim_core::{Declaration, Signal, StyleAttribute, StyleError, StyleValue, TokenTable};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mode::Mode;
use crate::screen::ScreenSizes;

/// Errors detected while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("token name must not be empty in `{table}`")]
    EmptyTokenName { table: &'static str },

    #[error("palette token `{name}` is not a color")]
    NotAColor { name: String },

    #[error("light and dark palettes differ: `{name}` is missing from the {missing_from} palette")]
    PaletteMismatch {
        name: String,
        missing_from: Mode,
    },

    #[error("at least one screen size must be configured")]
    NoScreenSizes,

    #[error("screen size name must not be empty")]
    EmptyScreenSizeName,

    #[error("screen size `{0}` is configured more than once")]
    DuplicateScreenSize(String),

    #[error("failed to parse token config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read token config: {0}")]
    Io(#[from] std::io::Error),
}

/// Light and dark palettes. Both must define the same token names so the
/// theme keeps its shape across mode switches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorModes {
    pub light: Arc<TokenTable>,
    pub dark: Arc<TokenTable>,
}

impl ColorModes {
    pub fn new(light: TokenTable, dark: TokenTable) -> Self {
        Self {
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    /// Palette for a mode. The returned `Arc` is stable for the lifetime of
    /// the configuration, which is what the theme cache compares.
    pub fn for_mode(&self, mode: Mode) -> &Arc<TokenTable> {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Named multi-attribute text styles merged into the `text` category
pub type TextStyles = IndexMap<Arc<str>, IndexMap<StyleAttribute, StyleValue>>;

/// Every token table the theme is built from
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub colors: ColorModes,
    pub screen_sizes: ScreenSizes,
    pub spacing: TokenTable,
    pub border_radius: TokenTable,
    pub border_width: TokenTable,
    pub font_size: TokenTable,
    pub font_weight: TokenTable,
    pub opacity: TokenTable,
    pub text_styles: TextStyles,
}

impl TokenConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: TokenConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!("TokenConfig::load - reading {}", path.display());
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }

    /// Check the invariants the theme builder relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_sizes.is_empty() {
            return Err(ConfigError::NoScreenSizes);
        }
        let mut seen = FxHashSet::default();
        for name in self.screen_sizes.names() {
            if name.is_empty() {
                return Err(ConfigError::EmptyScreenSizeName);
            }
            if !seen.insert(name) {
                return Err(ConfigError::DuplicateScreenSize(name.to_string()));
            }
        }

        for (table, tokens) in [
            ("colors.light", &*self.colors.light),
            ("colors.dark", &*self.colors.dark),
            ("spacing", &self.spacing),
            ("border_radius", &self.border_radius),
            ("border_width", &self.border_width),
            ("font_size", &self.font_size),
            ("font_weight", &self.font_weight),
            ("opacity", &self.opacity),
        ] {
            if tokens.names().any(|name| name.is_empty()) {
                return Err(ConfigError::EmptyTokenName { table });
            }
        }
        if self.text_styles.keys().any(|name| name.is_empty()) {
            return Err(ConfigError::EmptyTokenName {
                table: "text_styles",
            });
        }

        for palette in [&self.colors.light, &self.colors.dark] {
            for (name, value) in palette.iter() {
                // Named colors stay keywords; numbers never make a color
                if matches!(value, StyleValue::Number(_) | StyleValue::Percent(_)) {
                    return Err(ConfigError::NotAColor {
                        name: name.to_string(),
                    });
                }
            }
        }
        palette_names_match(&self.colors.light, &self.colors.dark, Mode::Dark)?;
        palette_names_match(&self.colors.dark, &self.colors.light, Mode::Light)?;

        Ok(())
    }

    /// Text styles as declaration lists, in configuration order
    pub fn text_style_declarations(&self) -> impl Iterator<Item = (&Arc<str>, Vec<Declaration>)> {
        self.text_styles.iter().map(|(name, attributes)| {
            let declarations = attributes
                .iter()
                .map(|(attribute, value)| Declaration::new(*attribute, value.clone()))
                .collect();
            (name, declarations)
        })
    }
}

fn palette_names_match(
    from: &TokenTable,
    other: &TokenTable,
    other_mode: Mode,
) -> Result<(), ConfigError> {
    match from.names().find(|name| !other.contains(name)) {
        Some(name) => Err(ConfigError::PaletteMismatch {
            name: name.to_string(),
            missing_from: other_mode,
        }),
        None => Ok(()),
    }
}

/// Reactive source of the current appearance mode
pub type ModeSource = Box<dyn Fn() -> Mode + Send + Sync>;

/// Reactive source of the current screen-size class name
pub type ScreenSizeSource = Box<dyn Fn() -> Arc<str> + Send + Sync>;

/// Tokens plus the two reactive inputs
pub struct PrimOptions {
    pub tokens: TokenConfig,
    pub use_dark_mode: ModeSource,
    pub use_screen_size: ScreenSizeSource,
}

impl PrimOptions {
    pub fn new<M, S>(tokens: TokenConfig, use_dark_mode: M, use_screen_size: S) -> Self
    where
        M: Fn() -> Mode + Send + Sync + 'static,
        S: Fn() -> Arc<str> + Send + Sync + 'static,
    {
        Self {
            tokens,
            use_dark_mode: Box::new(use_dark_mode),
            use_screen_size: Box::new(use_screen_size),
        }
    }

    /// Inputs driven by a mode signal and a screen-size-class signal
    pub fn with_signals(tokens: TokenConfig, mode: Signal<Mode>, screen_size: Signal<Arc<str>>) -> Self {
        Self::new(tokens, move || mode.get(), move || screen_size.get())
    }

    /// Inputs driven by a mode signal and a window-width signal; the width is
    /// classified against the configured screen sizes on every read.
    pub fn with_window_width(tokens: TokenConfig, mode: Signal<Mode>, width: Signal<f32>) -> Self {
        let screen_sizes = tokens.screen_sizes.clone();
        Self::new(
            tokens,
            move || mode.get(),
            move || {
                screen_sizes
                    .classify(width.get())
                    .cloned()
                    .unwrap_or_else(|| Arc::from(""))
            },
        )
    }
}

impl std::fmt::Debug for PrimOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimOptions")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prim_core::Color;

    const TOML: &str = r##"
spacing = { sm = 22, lg = 44 }
border_width = { hairline = 0.5, sm = 1 }
font_weight = { regular = "400", bold = "600" }

[colors.light]
base = "#fff"
fg = "#000"

[colors.dark]
base = "#000"
fg = "#fff"

[[screen_sizes]]
name = "phone"
max_width = 500

[[screen_sizes]]
name = "tablet"

[text_styles.title]
fontSize = 24
fontWeight = "600"
"##;

    #[test]
    fn test_from_toml_str() {
        let config = TokenConfig::from_toml_str(TOML).unwrap();

        assert_eq!(config.spacing.get("lg"), Some(&StyleValue::Number(44.0)));
        assert_eq!(
            config.colors.for_mode(Mode::Dark).get("base"),
            Some(&StyleValue::Color(Color::BLACK))
        );
        assert_eq!(config.screen_sizes.len(), 2);
        assert_eq!(config.screen_sizes.breakpoints()[0].max_width, Some(500.0));
        assert_eq!(
            config.font_weight.get("bold"),
            Some(&StyleValue::keyword("600"))
        );

        let (name, declarations) = config.text_style_declarations().next().unwrap();
        assert_eq!(&**name, "title");
        assert_eq!(declarations[0].attribute, StyleAttribute::FontSize);
    }

    #[test]
    fn test_unknown_text_style_attribute_is_rejected() {
        let src = format!("{TOML}\n[text_styles.bad]\ncolour = \"#fff\"\n");
        assert!(matches!(
            TokenConfig::from_toml_str(&src),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_palette_mismatch() {
        let mut config = TokenConfig::from_toml_str(TOML).unwrap();
        config.colors = ColorModes::new(
            TokenTable::from_pairs([("base", Color::WHITE), ("trim", Color::WHITE)]),
            TokenTable::from_pairs([("base", Color::BLACK)]),
        );
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::PaletteMismatch { ref name, missing_from: Mode::Dark } if name == "trim"
        ));
    }

    #[test]
    fn test_numeric_palette_value_is_rejected() {
        let mut config = TokenConfig::from_toml_str(TOML).unwrap();
        let palette = TokenTable::from_pairs([("base", 4.0)]);
        config.colors = ColorModes::new(palette.clone(), palette);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotAColor { .. })
        ));
    }

    #[test]
    fn test_screen_size_rules() {
        let mut config = TokenConfig::from_toml_str(TOML).unwrap();

        config.screen_sizes = ScreenSizes::default();
        assert!(matches!(config.validate(), Err(ConfigError::NoScreenSizes)));

        config.screen_sizes = ScreenSizes::named(["se", "se"]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateScreenSize(ref name)) if name == "se"
        ));
    }

    #[test]
    fn test_invalid_color_in_toml() {
        let src = TOML.replace("base = \"#fff\"", "base = \"#ffff\"");
        assert!(TokenConfig::from_toml_str(&src).is_err());
    }
}
