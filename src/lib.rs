//! # bson-decimal128
//!
//! An implementation of the IEEE 754-2008 **decimal128** floating-point value type as it
//! is stored in the BSON binary document format.
//!
//! A [`Decimal128`] represents every finite signed decimal with up to 34 significant
//! digits and an exponent in `[-6176, 6111]`, plus signed zeros, signed infinities, and
//! NaN. Values are immutable 16-byte pairs of 64-bit halves in the Binary Integer Decimal
//! (BID) encoding; they convert losslessly to and from a canonical textual form and to and
//! from the arbitrary-precision [`BigDecimal`] type, and travel on the wire as a fixed
//! 16-byte little-endian payload.
//!
//! ```
//! use bson_decimal128::{Decimal128, DecimalResult};
//! # fn main() -> DecimalResult<()> {
//! // Parse the liberal textual grammar; render the canonical form.
//! let value: Decimal128 = "120E-2".parse()?;
//! assert_eq!(value.to_string(), "1.20");
//!
//! // The 16-byte little-endian wire representation round-trips bit-exactly.
//! let bytes = value.to_le_bytes();
//! assert_eq!(Decimal128::from_le_bytes(bytes), value);
//!
//! // Bridge to an arbitrary-precision decimal.
//! use bson_decimal128::external::bigdecimal::BigDecimal;
//! let big_decimal: BigDecimal = value.try_into()?;
//! assert_eq!(big_decimal.to_string(), "1.20");
//! # Ok(())
//! # }
//! ```
//!
//! Equality and hashing are bitwise over the two halves, so `0` and `-0` — and `0` and
//! `0E+3` — are distinct values. All operations are side-effect free and deterministic;
//! values are safe to share across threads without coordination.
//!
//! [`BigDecimal`]: bigdecimal::BigDecimal

pub mod binary;
pub mod result;
pub mod text;
pub mod types;

pub use result::{DecimalError, DecimalResult};
pub use types::decimal128::coefficient::{Coefficient, Sign};
pub use types::decimal128::Decimal128;

/// Re-exports of third party dependencies that are part of our public API.
pub mod external {
    pub use bigdecimal;
    pub use num_bigint;
}
