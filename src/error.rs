//! Parse errors for textual color notations.

/// A malformed hexadecimal color string.
///
/// Produced when an input is not 3 or 6 hexadecimal digits after an
/// optional leading `#` is stripped. The offending input is kept for
/// diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidFormat {
    input: String,
}

impl InvalidFormat {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for InvalidFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "invalid hex color {:?}", self.input)
    }
}

impl std::error::Error for InvalidFormat {}
