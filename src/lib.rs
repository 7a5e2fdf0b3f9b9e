//! tincture provides the color primitives and conversions behind a
//! palette-based color picker: hexadecimal, RGB, HSL and CMYK
//! notations, tint blending and saved-swatch palettes.

#![deny(missing_docs)]

mod cmyk;
mod color;
mod convert;
mod error;
mod hsl;
mod math;
mod palette;
mod rgb;
#[cfg(test)]
mod test;
mod tint;

pub use cmyk::Cmyk;
pub use color::{Component, Components};
pub use error::InvalidFormat;
pub use hsl::Hsl;
pub use palette::{Palette, Swatch, SwatchFlags};
pub use rgb::Rgb;
pub use tint::tint_hex;
