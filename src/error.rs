//! Error types for scale generation

use thiserror::Error;

use crate::color::parse::ColorParseError;

/// Input did not match `#` followed by 3 or 6 hex digits.
///
/// This is the only way scale generation can fail. The rejected input is
/// kept for the caller, and the specific parse failure is the `source()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("input must be a valid hex color (e.g. #000000), got {input:?}")]
pub struct ValidationError {
    input: String,
    #[source]
    reason: ColorParseError,
}

impl ValidationError {
    pub(crate) fn new(input: &str, reason: ColorParseError) -> Self {
        Self {
            input: input.to_owned(),
            reason,
        }
    }

    /// The string that failed validation.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> ColorParseError {
        self.reason
    }
}
