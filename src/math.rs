//! Math utility functions.

use crate::color::Component;

/// Map NaN to zero, leaving every other value untouched.
pub fn normalize(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Wrap a hue in degrees into the range [0, 360). Negative hues wrap
/// around to positive.
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}

/// Clamp a value into the given range and round it to the nearest
/// whole value, half away from zero.
pub fn round_clamped(value: Component, min: Component, max: Component) -> Component {
    value.clamp(min, max).round()
}
