/// Check for equality between two channel values, allowing the one
/// unit of error that rounding intermediate notations to whole
/// degrees and percents introduces.
#[macro_export]
macro_rules! assert_channel_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1.0);
    }};
}
