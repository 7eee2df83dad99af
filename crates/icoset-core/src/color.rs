//! Opaque RGB colors parsed from hex strings.

use std::fmt;
use std::str::FromStr;

use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::IconError;

/// An opaque color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl FromStr for Color {
    type Err = IconError;

    /// Accepts `#rrggbb`, `rrggbb`, `#rgb` and `rgb`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IconError::InvalidColor {
            value: s.to_string(),
        };

        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #abc is shorthand for #aabbcc
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 0x11)
                        .map_err(|_| invalid())
                };
                Ok(Color::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = IconError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_form() {
        let color: Color = "#1A2b3C".parse().unwrap();
        assert_eq!(color, Color::new(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn parse_without_hash() {
        let color: Color = "ff8000".parse().unwrap();
        assert_eq!(color, Color::new(0xff, 0x80, 0x00));
    }

    #[test]
    fn parse_short_form() {
        let color: Color = "#fa0".parse().unwrap();
        assert_eq!(color, Color::new(0xff, 0xaa, 0x00));
    }

    #[test]
    fn parse_rejects_garbage() {
        for value in ["", "#", "#12345", "#1234567", "#gggggg", "white", "#+1+2+3"] {
            let result = value.parse::<Color>();
            assert!(
                matches!(result, Err(IconError::InvalidColor { .. })),
                "expected {:?} to be rejected",
                value
            );
        }
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Color::new(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let color: Color = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(color, Color::new(0, 0xff, 0));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#00ff00\"");

        let bad = serde_json::from_str::<Color>("\"nope\"");
        assert!(bad.is_err());
    }
}
