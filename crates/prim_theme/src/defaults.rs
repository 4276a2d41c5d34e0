//! Default token configuration
//!
//! The palettes are Catppuccin: Latte for light mode and Mocha for dark
//! mode. Both palettes use the same token names, so switching modes only
//! changes color-derived fragments.
//!
//! Nothing here is global. Build the defaults where the app starts and pass
//! them to [`PrimProvider::new`](crate::PrimProvider::new):
//!
//! ```rust
//! use prim_core::Signal;
//! use prim_theme::{default_options, Mode, PrimProvider};
//!
//! let mode = Signal::new(Mode::Light);
//! let width = Signal::new(390.0);
//! let provider = PrimProvider::new(default_options(mode, width)).unwrap();
//! assert_eq!(provider.theme().screen_size(), "x");
//! ```

use prim_core::{Color, Signal, StyleAttribute, StyleValue, TokenTable};

use crate::config::{ColorModes, PrimOptions, TextStyles, TokenConfig};
use crate::mode::Mode;
use crate::screen::{Breakpoint, ScreenSizes};

/// Catppuccin Latte (light)
const LATTE: [(&str, u32); 26] = [
    ("rosewater", 0xDC8A78),
    ("flamingo", 0xDD7878),
    ("pink", 0xEA76CB),
    ("mauve", 0x8839EF),
    ("red", 0xD20F39),
    ("maroon", 0xE64553),
    ("peach", 0xFE640B),
    ("yellow", 0xDF8E1D),
    ("green", 0x40A02B),
    ("teal", 0x179299),
    ("sky", 0x04A5E5),
    ("sapphire", 0x209FB5),
    ("blue", 0x1E66F5),
    ("lavender", 0x7287FD),
    ("text", 0x4C4F69),
    ("subtext1", 0x5C5F77),
    ("subtext0", 0x6C6F85),
    ("overlay2", 0x7C7F93),
    ("overlay1", 0x8C8FA1),
    ("overlay0", 0x9CA0B0),
    ("surface2", 0xACB0BE),
    ("surface1", 0xBCC0CC),
    ("surface0", 0xCCD0DA),
    ("base", 0xEFF1F5),
    ("mantle", 0xE6E9EF),
    ("crust", 0xDCE0E8),
];

/// Catppuccin Mocha (dark)
const MOCHA: [(&str, u32); 26] = [
    ("rosewater", 0xF5E0DC),
    ("flamingo", 0xF2CDCD),
    ("pink", 0xF5C2E7),
    ("mauve", 0xCBA6F7),
    ("red", 0xF38BA8),
    ("maroon", 0xEBA0AC),
    ("peach", 0xFAB387),
    ("yellow", 0xF9E2AF),
    ("green", 0xA6E3A1),
    ("teal", 0x94E2D5),
    ("sky", 0x89DCEB),
    ("sapphire", 0x74C7EC),
    ("blue", 0x89B4FA),
    ("lavender", 0xB4BEFE),
    ("text", 0xCDD6F4),
    ("subtext1", 0xBAC2DE),
    ("subtext0", 0xA6ADC8),
    ("overlay2", 0x9399B2),
    ("overlay1", 0x7F849C),
    ("overlay0", 0x6C7086),
    ("surface2", 0x585B70),
    ("surface1", 0x45475A),
    ("surface0", 0x313244),
    ("base", 0x1E1E2E),
    ("mantle", 0x181825),
    ("crust", 0x11111B),
];

fn palette(colors: &[(&str, u32)]) -> TokenTable {
    TokenTable::from_pairs(colors.iter().map(|&(name, hex)| (name, Color::from_hex(hex))))
        .with("white", Color::WHITE)
        .with("black", Color::BLACK)
        .with("transparent", Color::TRANSPARENT)
}

/// Light and dark palettes
pub fn default_colors() -> ColorModes {
    ColorModes::new(palette(&LATTE), palette(&MOCHA))
}

/// Screen-size classes, narrowest first
pub fn default_screen_sizes() -> ScreenSizes {
    ScreenSizes::new(vec![
        Breakpoint::new("mini", Some(350.0)),
        Breakpoint::new("x", Some(400.0)),
        Breakpoint::new("max", Some(500.0)),
        Breakpoint::new("tablet", Some(800.0)),
        Breakpoint::new("lg", Some(1100.0)),
        Breakpoint::new("xl", Some(1300.0)),
        Breakpoint::new("xxl", None),
    ])
}

pub fn default_spacing() -> TokenTable {
    TokenTable::from_pairs([
        ("none", 0.0),
        ("px", 1.0),
        ("xxs", 2.0),
        ("xs", 4.0),
        ("sm", 8.0),
        ("md", 12.0),
        ("lg", 16.0),
        ("xl", 24.0),
        ("xxl", 32.0),
        ("xxxl", 48.0),
    ])
}

pub fn default_border_radius() -> TokenTable {
    TokenTable::from_pairs([
        ("none", 0.0),
        ("sm", 2.0),
        ("default", 4.0),
        ("md", 6.0),
        ("lg", 8.0),
        ("xl", 12.0),
        ("xxl", 16.0),
        ("xxxl", 24.0),
    ])
}

pub fn default_border_width() -> TokenTable {
    TokenTable::from_pairs([
        ("none", 0.0),
        // One physical pixel on a 2x display
        ("hairline", 0.5),
        ("sm", 1.0),
        ("md", 2.0),
        ("lg", 4.0),
        ("xl", 8.0),
    ])
}

pub fn default_font_size() -> TokenTable {
    TokenTable::from_pairs([
        ("xs", 12.0),
        ("sm", 14.0),
        ("base", 16.0),
        ("lg", 18.0),
        ("xl", 20.0),
        ("xxl", 24.0),
        ("xxxl", 30.0),
    ])
}

pub fn default_font_weight() -> TokenTable {
    TokenTable::from_pairs(
        [
            ("thin", "100"),
            ("extraLight", "200"),
            ("light", "300"),
            ("normal", "400"),
            ("medium", "500"),
            ("semiBold", "600"),
            ("bold", "700"),
            ("extraBold", "800"),
            ("black", "900"),
        ]
        .map(|(name, weight)| (name, StyleValue::keyword(weight))),
    )
}

pub fn default_opacity() -> TokenTable {
    TokenTable::from_pairs([
        ("0", 0.0),
        ("5", 0.05),
        ("10", 0.1),
        ("25", 0.25),
        ("50", 0.5),
        ("75", 0.75),
        ("90", 0.9),
        ("100", 1.0),
    ])
}

/// Typographic roles available as `text["h1"]` and friends
pub fn default_text_styles() -> TextStyles {
    [
        ("h1", 30.0, "700"),
        ("h2", 24.0, "700"),
        ("h3", 20.0, "600"),
        ("body", 16.0, "400"),
        ("caption", 12.0, "400"),
    ]
    .into_iter()
    .map(|(name, size, weight)| {
        let attributes = [
            (StyleAttribute::FontSize, StyleValue::Number(size)),
            (StyleAttribute::FontWeight, StyleValue::keyword(weight)),
        ]
        .into_iter()
        .collect();
        (name.into(), attributes)
    })
    .collect()
}

/// The complete default token set
pub fn default_tokens() -> TokenConfig {
    TokenConfig {
        colors: default_colors(),
        screen_sizes: default_screen_sizes(),
        spacing: default_spacing(),
        border_radius: default_border_radius(),
        border_width: default_border_width(),
        font_size: default_font_size(),
        font_weight: default_font_weight(),
        opacity: default_opacity(),
        text_styles: default_text_styles(),
    }
}

/// Default tokens driven by a mode signal and a window-width signal
pub fn default_options(mode: Signal<Mode>, window_width: Signal<f32>) -> PrimOptions {
    PrimOptions::with_window_width(default_tokens(), mode, window_width)
}
