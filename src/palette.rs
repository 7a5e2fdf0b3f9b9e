//! Saved swatches and the palettes a picker presents.
//!
//! A [`Palette`] is a plain in-memory value; whichever layer embeds
//! the picker owns loading and saving it.

use bitflags::bitflags;

use crate::error::InvalidFormat;
use crate::{Cmyk, Component, Rgb};

bitflags! {
    /// Attribute flags for a [`Swatch`].
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct SwatchFlags: u8 {
        /// Set when the swatch was created by the user rather than
        /// seeded from the stock palette.
        const CUSTOM = 1 << 0;
        /// Set when the swatch is the stock black.
        const BLACK = 1 << 1;
        /// Set when the swatch is the stock white.
        const WHITE = 1 << 2;
    }
}

/// A named, saved color together with its derived channel values.
///
/// The RGB and CMYK channels always agree with the hex value; every
/// mutation of the value recomputes them.
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    id: String,
    name: String,
    value: String,
    rgb: Rgb,
    cmyk: Cmyk,
    alpha: u8,
    tint: Component,
    flags: SwatchFlags,
}

impl Swatch {
    /// Create a new swatch from a hexadecimal color value. The value
    /// is stored in canonical form and the RGB and CMYK channels are
    /// derived from it.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        value: &str,
        flags: SwatchFlags,
    ) -> Result<Self, InvalidFormat> {
        Ok(Self::from_rgb(id, name, Rgb::from_hex(value)?, flags))
    }

    fn from_rgb(
        id: impl Into<String>,
        name: impl Into<String>,
        rgb: Rgb,
        flags: SwatchFlags,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: rgb.to_hex(),
            rgb,
            cmyk: rgb.to_cmyk(),
            alpha: u8::MAX,
            tint: 0.0,
            flags,
        }
    }

    /// The identifier of the swatch, unique within its palette.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name of the swatch.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical `#rrggbb` value of the swatch.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The RGB channels derived from the value.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The CMYK components derived from the value.
    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    /// The opacity of the swatch, 255 for fully opaque.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// The tint percentage applied when the swatch is picked.
    pub fn tint(&self) -> Component {
        self.tint
    }

    /// The attribute flags of the swatch.
    pub fn flags(&self) -> SwatchFlags {
        self.flags
    }

    /// Rename the swatch.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the color value. Every derived channel is recomputed
    /// from the new value; stale channels are never kept.
    pub fn set_value(&mut self, value: &str) -> Result<(), InvalidFormat> {
        let rgb = Rgb::from_hex(value)?;
        self.value = rgb.to_hex();
        self.rgb = rgb;
        self.cmyk = rgb.to_cmyk();
        Ok(())
    }

    /// Set the tint percentage applied when the swatch is picked,
    /// clamped into [0, 100].
    pub fn set_tint(&mut self, percent: Component) {
        self.tint = percent.clamp(0.0, 100.0);
    }

    /// The swatch color with its tint applied.
    pub fn tinted(&self) -> Rgb {
        self.rgb.tint(self.tint)
    }
}

/// An ordered collection of saved swatches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the stock palette a picker starts out with: the eight
    /// corner colors of the RGB cube plus a middle gray.
    pub fn stock() -> Self {
        let seed: [(&str, Rgb, SwatchFlags); 9] = [
            ("Black", Rgb::new(0.0, 0.0, 0.0), SwatchFlags::BLACK),
            ("White", Rgb::new(255.0, 255.0, 255.0), SwatchFlags::WHITE),
            ("Red", Rgb::new(255.0, 0.0, 0.0), SwatchFlags::empty()),
            ("Green", Rgb::new(0.0, 255.0, 0.0), SwatchFlags::empty()),
            ("Blue", Rgb::new(0.0, 0.0, 255.0), SwatchFlags::empty()),
            ("Yellow", Rgb::new(255.0, 255.0, 0.0), SwatchFlags::empty()),
            ("Cyan", Rgb::new(0.0, 255.0, 255.0), SwatchFlags::empty()),
            ("Magenta", Rgb::new(255.0, 0.0, 255.0), SwatchFlags::empty()),
            ("Gray", Rgb::new(128.0, 128.0, 128.0), SwatchFlags::empty()),
        ];

        Self {
            swatches: seed
                .iter()
                .enumerate()
                .map(|(i, (name, rgb, flags))| {
                    Swatch::from_rgb(format!("c{}", i + 1), *name, *rgb, *flags)
                })
                .collect(),
        }
    }

    /// The number of swatches in the palette.
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// Whether the palette holds no swatches.
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Iterate over the swatches in palette order.
    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }

    /// Append a swatch to the palette.
    pub fn push(&mut self, swatch: Swatch) {
        self.swatches.push(swatch);
    }

    /// Look up a swatch by its identifier.
    pub fn get(&self, id: &str) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.id == id)
    }

    /// Look up a swatch by its identifier for mutation.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Swatch> {
        self.swatches.iter_mut().find(|s| s.id == id)
    }

    /// Remove a swatch by its identifier, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Swatch> {
        let index = self.swatches.iter().position(|s| s.id == id)?;
        Some(self.swatches.remove(index))
    }

    /// Look up a swatch whose value matches the given hex color,
    /// comparing canonical forms.
    pub fn find_by_value(&self, value: &str) -> Option<&Swatch> {
        let canonical = Rgb::from_hex(value).ok()?.to_hex();
        self.swatches.iter().find(|s| s.value == canonical)
    }

    /// The swatch closest to the given color by euclidean distance
    /// over the RGB channels.
    pub fn nearest(&self, target: Rgb) -> Option<&Swatch> {
        let distance = |s: &Swatch| {
            let dr = s.rgb.red - target.red;
            let dg = s.rgb.green - target.green;
            let db = s.rgb.blue - target.blue;
            dr * dr + dg * dg + db * db
        };
        self.swatches
            .iter()
            .min_by(|a, b| distance(a).total_cmp(&distance(b)))
    }

    /// The swatch naming the given value: an exact value match when
    /// one exists, otherwise the nearest swatch by channel distance.
    /// This is how a picker labels a selection that was never saved.
    pub fn matching(&self, value: &str) -> Option<&Swatch> {
        let rgb = Rgb::from_hex(value).ok()?;
        self.find_by_value(value).or_else(|| self.nearest(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_derives_channels_from_its_value() {
        let swatch = Swatch::new("c1", "Chocolate", "#D2691E", SwatchFlags::CUSTOM).unwrap();
        assert_eq!(swatch.value(), "#d2691e");
        assert_eq!(swatch.rgb(), Rgb::new(210.0, 105.0, 30.0));
        assert_eq!(swatch.cmyk(), Cmyk::new(0.0, 50.0, 86.0, 18.0));
        assert_eq!(swatch.alpha(), 255);
        assert_eq!(swatch.tint(), 0.0);
        assert!(swatch.flags().contains(SwatchFlags::CUSTOM));
    }

    #[test]
    fn swatch_rejects_malformed_values() {
        assert!(Swatch::new("c1", "Bad", "#nope", SwatchFlags::empty()).is_err());
    }

    #[test]
    fn set_value_recomputes_every_derived_channel() {
        let mut swatch = Swatch::new("c1", "Edited", "#000000", SwatchFlags::empty()).unwrap();
        swatch.set_value("ff0000").unwrap();
        assert_eq!(swatch.value(), "#ff0000");
        assert_eq!(swatch.rgb(), Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(swatch.cmyk(), Cmyk::new(0.0, 100.0, 100.0, 0.0));
    }

    #[test]
    fn set_value_keeps_the_old_value_on_error() {
        let mut swatch = Swatch::new("c1", "Kept", "#123456", SwatchFlags::empty()).unwrap();
        assert!(swatch.set_value("zz").is_err());
        assert_eq!(swatch.value(), "#123456");
        assert_eq!(swatch.rgb(), Rgb::new(0x12 as Component, 0x34 as Component, 0x56 as Component));
    }

    #[test]
    fn tinted_applies_the_stored_percentage() {
        let mut swatch = Swatch::new("c1", "Tinted", "#ff0000", SwatchFlags::empty()).unwrap();
        swatch.set_tint(50.0);
        assert_eq!(swatch.tinted(), Rgb::new(255.0, 128.0, 128.0));
        swatch.set_tint(250.0);
        assert_eq!(swatch.tint(), 100.0);
    }

    #[test]
    fn new_and_default_palettes_are_empty() {
        assert!(Palette::new().is_empty());
        assert!(Palette::default().is_empty());
        assert_eq!(Palette::new(), Palette::default());
    }

    #[test]
    fn stock_palette_flags_black_and_white() {
        let palette = Palette::stock();
        assert_eq!(palette.len(), 9);
        assert!(palette
            .find_by_value("#000000")
            .is_some_and(|s| s.flags().contains(SwatchFlags::BLACK)));
        assert!(palette
            .find_by_value("#ffffff")
            .is_some_and(|s| s.flags().contains(SwatchFlags::WHITE)));
        assert!(palette.iter().all(|s| !s.flags().contains(SwatchFlags::CUSTOM)));
    }

    #[test]
    fn lookup_and_removal_by_id() {
        let mut palette = Palette::stock();
        assert_eq!(palette.get("c3").map(Swatch::name), Some("Red"));

        palette.get_mut("c3").unwrap().set_name("Crimson");
        assert_eq!(palette.get("c3").map(Swatch::name), Some("Crimson"));

        let removed = palette.remove("c3").unwrap();
        assert_eq!(removed.value(), "#ff0000");
        assert!(palette.get("c3").is_none());
        assert!(palette.remove("c3").is_none());
    }

    #[test]
    fn find_by_value_compares_canonical_forms() {
        let palette = Palette::stock();
        assert_eq!(palette.find_by_value("F00").map(Swatch::name), Some("Red"));
        assert!(palette.find_by_value("#102030").is_none());
        assert!(palette.find_by_value("junk").is_none());
    }

    #[test]
    fn matching_prefers_exact_value_then_nearest() {
        let palette = Palette::stock();
        assert_eq!(palette.matching("#00ff00").map(Swatch::name), Some("Green"));
        // Darkish red is nearest to the stock red.
        assert_eq!(palette.matching("#e01010").map(Swatch::name), Some("Red"));
        assert!(palette.matching("bogus").is_none());
        assert!(Palette::new().matching("#ff0000").is_none());
    }
}
