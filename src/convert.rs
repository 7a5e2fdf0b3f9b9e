//! Each notation is modeled with its own type. Conversions are only
//! implemented in the directions the picker needs: RGB and HSL
//! convert both ways, CMYK is derived from RGB.
//!
//! Every conversion rounds its result to whole channel, degree or
//! percent values, which keeps outputs inside the canonical ranges
//! and makes repeated conversion deterministic.
//!
//! ```rust
//! use tincture::Rgb;
//! let hsl = Rgb::from_hex("#d2691e")?.to_hsl();
//! assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (25.0, 75.0, 47.0));
//! # Ok::<(), tincture::InvalidFormat>(())
//! ```

use crate::{Cmyk, Hsl, Rgb};

impl Rgb {
    /// Convert this color from the RGB notation to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }

    /// Derive the CMYK components of this color.
    pub fn to_cmyk(&self) -> Cmyk {
        util::rgb_to_cmyk(&self.to_components())
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the RGB notation.
    ///
    /// The hue is taken modulo 360 degrees, wrapping negative values
    /// positive; saturation and lightness are clamped to [0, 100].
    pub fn to_rgb(&self) -> Rgb {
        util::hsl_to_rgb(&self.to_components()).into()
    }
}

mod util {
    use crate::color::{Component, Components};
    use crate::math::{normalize, normalize_hue, round_clamped};
    use crate::Cmyk;

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = from.map(|c| normalize(c).clamp(0.0, 255.0) / 255.0);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            // Achromatic; hue is undefined and pinned to zero.
            return Components(0.0, 0.0, round_clamped(lightness * 100.0, 0.0, 100.0));
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        // Rounding can land on a full turn, which wraps back to zero.
        Components(
            normalize_hue(hue.round()),
            round_clamped(saturation * 100.0, 0.0, 100.0),
            round_clamped(lightness * 100.0, 0.0, 100.0),
        )
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = from.map(normalize);

        let hue = normalize_hue(hue);
        let saturation = saturation.clamp(0.0, 100.0) / 100.0;
        let lightness = lightness.clamp(0.0, 100.0) / 100.0;

        if saturation <= 0.0 {
            let gray = round_clamped(lightness * 255.0, 0.0, 255.0);
            return Components(gray, gray, gray);
        }

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                let channel = lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
                round_clamped(channel * 255.0, 0.0, 255.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Derive CMYK components from RGB channels.
    ///
    /// Black comes from the strongest channel first; cyan, magenta
    /// and yellow then measure the ink each channel still needs on
    /// top of black. Pure black short-circuits so the division stays
    /// defined.
    pub fn rgb_to_cmyk(from: &Components) -> Cmyk {
        let Components(red, green, blue) = from.map(|c| normalize(c).clamp(0.0, 255.0) / 255.0);

        let max = red.max(green).max(blue);
        if max == 0.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0);
        }

        let black = 1.0 - max;
        let ink = |channel: Component| {
            round_clamped((1.0 - channel - black) / (1.0 - black) * 100.0, 0.0, 100.0)
        };

        Cmyk::new(
            ink(red),
            ink(green),
            ink(blue),
            round_clamped(black * 100.0, 0.0, 100.0),
        )
    }
}
