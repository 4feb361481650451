//! Error returned when a metric or color space is selected by name.

use std::fmt;

/// An unrecognized name for a closed set of choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError {
    kind: &'static str,
    name: String,
}

impl ParseNameError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }

    /// What was being named, e.g. `"metric"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} \"{}\"", self.kind, self.name)
    }
}

impl std::error::Error for ParseNameError {}
