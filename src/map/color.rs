//! Country colours and hex string parsing.

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

use super::error::ColorParseError;

/// 8-bit RGBA colour assigned to a country's prisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CountryColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque colour from three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for CountryColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for CountryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for CountryColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

impl From<CountryColor> for Color {
    fn from(color: CountryColor) -> Self {
        Color::srgba_u8(color.r, color.g, color.b, color.a)
    }
}

/// Parse a 6-digit hex string such as `"ffffb3"` into an opaque colour.
///
/// No leading `#` is accepted. Each pair of digits is one channel, in
/// red/green/blue order.
pub fn parse_hex_color(hex: &str) -> Result<CountryColor, ColorParseError> {
    let chars: Vec<char> = hex.chars().collect();
    if chars.len() != 6 {
        return Err(ColorParseError::InvalidLength {
            hex: hex.to_string(),
            len: chars.len(),
        });
    }

    let channel = |offset: usize, label: &'static str| {
        let pair = &chars[offset..offset + 2];
        match (pair[0].to_digit(16), pair[1].to_digit(16)) {
            (Some(high), Some(low)) => Ok((high * 16 + low) as u8),
            _ => Err(ColorParseError::InvalidFormat {
                hex: hex.to_string(),
                channel: label,
                digits: pair.iter().collect(),
            }),
        }
    };

    Ok(CountryColor::rgb(
        channel(0, "red")?,
        channel(2, "green")?,
        channel(4, "blue")?,
    ))
}
