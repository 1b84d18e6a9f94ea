use thiserror::Error;

/// Indicates that a coefficient or exponent falls outside the range that the decimal128
/// encoding can represent.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{description}")]
pub struct OutOfRangeError {
    description: String,
}

impl OutOfRangeError {
    pub(crate) fn new(description: impl Into<String>) -> Self {
        OutOfRangeError {
            description: description.into(),
        }
    }
}
