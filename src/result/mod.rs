use thiserror::Error;

pub use decoding_error::DecodingError;
pub use negative_zero::NegativeZeroError;
pub use not_finite::NotFiniteError;
pub use out_of_range::OutOfRangeError;
pub use parse_error::ParseError;

mod decoding_error;
mod negative_zero;
mod not_finite;
mod out_of_range;
mod parse_error;

/// A unified Result type representing the outcome of method calls that may fail.
pub type DecimalResult<T> = Result<T, DecimalError>;

/// Represents the different types of high-level failures that might occur when converting
/// decimal128 values between their binary, textual, and arbitrary-precision forms.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DecimalError {
    /// Indicates that the input text was not a well-formed decimal128 string.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Indicates that a coefficient or exponent fell outside the representable range.
    #[error("{0}")]
    OutOfRange(#[from] OutOfRangeError),

    /// Indicates an attempt to project NaN or an infinity onto a type that can only
    /// represent finite values.
    #[error("{0}")]
    NotFinite(#[from] NotFiniteError),

    /// Indicates an attempt to project a signed zero onto a type that cannot express the
    /// sign of a zero.
    #[error("{0}")]
    NegativeZero(#[from] NegativeZeroError),

    /// Indicates that a byte payload did not hold a readable decimal128 encoding.
    #[error("{0}")]
    Decoding(#[from] DecodingError),
}
