use std::borrow::Cow;
use thiserror::Error;

/// Indicates an attempt to read a numeric quantity out of a NaN or infinite value.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{operation}")]
pub struct NotFiniteError {
    operation: Cow<'static, str>,
}

impl NotFiniteError {
    pub(crate) fn new(operation: impl Into<Cow<'static, str>>) -> Self {
        NotFiniteError {
            operation: operation.into(),
        }
    }
}
