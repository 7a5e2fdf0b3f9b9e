//! Model a color with the CMYK notation surfaced by print-oriented
//! palettes.

use crate::color::Component;
use crate::error::InvalidFormat;
use crate::Rgb;

/// A color specified with cyan, magenta, yellow and black components,
/// each in [0, 100] percent.
///
/// CMYK values are always derived from RGB channels: black is taken
/// from the strongest channel first and the chromatic components
/// measure what ink remains. There is no conversion back to RGB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    /// The cyan component of the color, in percent.
    pub cyan: Component,
    /// The magenta component of the color, in percent.
    pub magenta: Component,
    /// The yellow component of the color, in percent.
    pub yellow: Component,
    /// The black component of the color, in percent.
    pub black: Component,
}

impl Cmyk {
    /// Create a new color with CMYK components.
    pub fn new(cyan: Component, magenta: Component, yellow: Component, black: Component) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            black,
        }
    }

    /// Derive the CMYK components of a hexadecimal color string.
    pub fn from_hex(hex: &str) -> Result<Self, InvalidFormat> {
        Ok(Rgb::from_hex(hex)?.to_cmyk())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_black_is_full_key() {
        assert_eq!(Cmyk::from_hex("#000000"), Ok(Cmyk::new(0.0, 0.0, 0.0, 100.0)));
    }

    #[test]
    fn pure_white_carries_no_ink() {
        assert_eq!(Cmyk::from_hex("#ffffff"), Ok(Cmyk::new(0.0, 0.0, 0.0, 0.0)));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert!(Cmyk::from_hex("#ggg").is_err());
    }
}
