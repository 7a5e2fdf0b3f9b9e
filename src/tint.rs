//! Tinting blends a color toward white, the way print palettes
//! lighten a spot color by a percentage.

use num_traits::Float;

use crate::error::InvalidFormat;
use crate::math::{normalize, round_clamped};
use crate::{Component, Rgb};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

impl Rgb {
    /// Blend this color toward white by the given percentage.
    ///
    /// Zero leaves the color unchanged and 100 produces pure white;
    /// the percentage is clamped into [0, 100]. Channels are rounded
    /// to whole values.
    pub fn tint(&self, percent: Component) -> Rgb {
        let t = normalize(percent).clamp(0.0, 100.0) / 100.0;
        self.to_components()
            .map(|channel| round_clamped(lerp(channel, 255.0, t), 0.0, 255.0))
            .into()
    }
}

/// Blend a hexadecimal color toward white by the given percentage and
/// return the canonical hex form of the result.
pub fn tint_hex(hex: &str, percent: Component) -> Result<String, InvalidFormat> {
    Ok(Rgb::from_hex(hex)?.tint(percent).to_hex())
}
