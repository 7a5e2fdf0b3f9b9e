//! Model a color with 8-bit RGB channels, the notation hex strings
//! encode.

use crate::color::{Component, Components};
use crate::error::InvalidFormat;
use crate::math::round_clamped;
use std::fmt;
use std::str::FromStr;

tincture_macros::gen_model! {
    /// A color specified with red, green and blue channels, each in
    /// the range [0, 255]. The conversions produce whole channel
    /// values; [`Rgb::to_hex`] clamps and rounds whatever it is given.
    pub struct Rgb {
        /// The red channel of the color.
        red: Component,
        /// The green channel of the color.
        green: Component,
        /// The blue channel of the color.
        blue: Component,
    }
}

impl Rgb {
    /// Parse a hexadecimal color string into RGB channels.
    ///
    /// The leading `#` is optional and digits are case-insensitive.
    /// Both the 6-digit `rrggbb` form and the 3-digit shorthand are
    /// accepted; the shorthand repeats each digit, so `f0a` reads as
    /// `ff00aa`. Anything else fails with [`InvalidFormat`].
    pub fn from_hex(hex: &str) -> Result<Self, InvalidFormat> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 3 | 6) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidFormat::new(hex));
        }

        let channel = |i: usize| -> Result<Component, InvalidFormat> {
            let value = if digits.len() == 3 {
                u8::from_str_radix(&digits[i..i + 1].repeat(2), 16)
            } else {
                u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            };
            value
                .map(|v| v as Component)
                .map_err(|_| InvalidFormat::new(hex))
        };

        Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
    }

    /// Format the color as a canonical lowercase `#rrggbb` string,
    /// clamping each channel into [0, 255] and rounding it first.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Rgb {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Components(red, green, blue) =
            self.to_components().map(|c| round_clamped(c, 0.0, 255.0));
        write!(f, "#{:02x}{:02x}{:02x}", red as u8, green as u8, blue as u8)
    }
}
