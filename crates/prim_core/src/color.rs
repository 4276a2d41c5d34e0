//! Color type used by color tokens

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let unit = |channel: u8| f32::from(channel) / 255.0;
        Self::rgba(unit(r), unit(g), unit(b), unit(a))
    }

    /// Color from `0xRRGGBB`, or `0xRRGGBBAA` when the top byte is set
    pub fn from_hex(hex: u32) -> Self {
        match hex.to_be_bytes() {
            [0, r, g, b] => Self::from_rgba8(r, g, b, 255),
            [r, g, b, a] => Self::from_rgba8(r, g, b, a),
        }
    }

    /// Parse a CSS-style hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// `transparent` is accepted as well since palettes commonly carry it.
    pub fn parse_hex(input: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::InvalidColor(input.to_string());

        if input.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            3 => {
                // #rgb expands each nibble: #fa0 == #ffaa00
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let r = ((value >> 8) & 0xF) as u8 * 17;
                let g = ((value >> 4) & 0xF) as u8 * 17;
                let b = (value & 0xF) as u8 * 17;
                Ok(Self::from_rgba8(r, g, b, 255))
            }
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self::from_hex(value))
            }
            8 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let [r, g, b, a] = value.to_be_bytes();
                Ok(Self::from_rgba8(r, g, b, a))
            }
            _ => Err(invalid()),
        }
    }

    /// 8-bit channels, `[r, g, b, a]`
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        if self.a < 1.0 {
            write!(f, "rgba({},{},{},{})", r, g, b, self.a)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_hex() {
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse_hex("#000000").unwrap(), Color::BLACK);
        assert_eq!(
            Color::parse_hex("#ff000080").unwrap().to_rgba8(),
            [255, 0, 0, 128]
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Color::parse_hex("fff").is_err());
        assert!(Color::parse_hex("#ffff").is_err());
        assert!(Color::parse_hex("#gggggg").is_err());
        assert!(Color::parse_hex("coral").is_err());
    }

    #[test]
    fn test_from_hex_reads_alpha_only_when_present() {
        assert_eq!(Color::from_hex(0xFE640B).to_rgba8(), [0xFE, 0x64, 0x0B, 255]);
        assert_eq!(Color::from_hex(0xFE640B80).to_rgba8(), [0xFE, 0x64, 0x0B, 0x80]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::from_hex(0xDDDDDD).to_string(), "#dddddd");
        assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0,0,0,0)");
    }
}
