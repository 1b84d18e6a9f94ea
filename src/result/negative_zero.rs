use std::borrow::Cow;
use thiserror::Error;

/// Indicates an attempt to convert a negative zero into a representation that cannot
/// express the sign of a zero.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{operation}")]
pub struct NegativeZeroError {
    operation: Cow<'static, str>,
}

impl NegativeZeroError {
    pub(crate) fn new(operation: impl Into<Cow<'static, str>>) -> Self {
        NegativeZeroError {
            operation: operation.into(),
        }
    }
}
