//! Model a color with the HSL notation.

use crate::color::Component;

tincture_macros::gen_model! {
    /// A color specified with the HSL notation. The canonical ranges
    /// are [0, 360) degrees for hue and [0, 100] percent for
    /// saturation and lightness; [`Hsl::to_rgb`](crate::Hsl::to_rgb)
    /// wraps and clamps whatever the model holds, so out-of-range
    /// values can be stored while a caller is still editing them.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color, in percent.
        saturation: Component,
        /// The lightness component of the color, in percent.
        lightness: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Components;

    #[test]
    fn components_keep_their_order() {
        let hsl = Hsl::new(120.0, 50.0, 25.0);
        assert_eq!(hsl.hue, 120.0);
        assert_eq!(hsl.saturation, 50.0);
        assert_eq!(hsl.lightness, 25.0);
        assert_eq!(hsl.to_components(), Components(120.0, 50.0, 25.0));
    }
}
