/// Color values and random color generation.
use std::{fmt, str::FromStr};

use rand::RngExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest value representable by a `#rrggbb` color.
const MAX_RGB24: u32 = 0xFF_FFFF;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color '{0}', expected a hex code like #rrggbb")]
pub struct InvalidColor(pub String);

/// A `#rrggbb` color code, always stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl Color {
    /// Draw a color uniformly from the full 24-bit space.
    pub fn random_with<R: RngExt>(rng: &mut R) -> Self {
        Self::from_rgb24(rng.random_range(0..=MAX_RGB24))
    }

    /// Formats the low 24 bits of `value` as a zero-padded color code.
    pub fn from_rgb24(value: u32) -> Self {
        Self(format!("#{:06x}", value & MAX_RGB24))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let value = u32::from_str_radix(&self.0[1..], 16).unwrap_or_default();
        (
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Whether dark text reads better than light text on top of this color.
    pub fn is_light(&self) -> bool {
        let (r, g, b) = self.rgb();
        // ITU-R BT.601 luma
        let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
        luma > 128_000
    }
}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !is_valid_hex(trimmed) {
            return Err(InvalidColor(s.to_string()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
