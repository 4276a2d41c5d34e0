//! Appearance mode (light/dark)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Current appearance mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Mode::Dark
    }

    /// Map a platform color-scheme answer onto a mode; anything that is not
    /// explicitly dark is light.
    pub fn from_scheme_name(name: Option<&str>) -> Self {
        match name {
            Some(s) if s.eq_ignore_ascii_case("dark") => Mode::Dark,
            _ => Mode::Light,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        })
    }
}
