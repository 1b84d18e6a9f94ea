use thiserror::Error;

/// Indicates that a string could not be read as a decimal128 value.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{description}")]
pub struct ParseError {
    description: String,
}

impl ParseError {
    pub(crate) fn new(description: impl Into<String>) -> Self {
        ParseError {
            description: description.into(),
        }
    }
}
