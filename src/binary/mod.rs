//! Reading and writing the fixed 16-byte little-endian decimal128 wire representation.
//!
//! A decimal128 element payload in a BSON document is exactly sixteen bytes: `low` in bytes
//! 0 through 7 and `high` in bytes 8 through 15, each little-endian. Every bit pattern is a
//! readable value; NaN and infinity payloads round-trip bit-exactly, and no normalization
//! happens at this layer.

use crate::result::{DecimalError, DecodingError};
use crate::types::decimal128::Decimal128;

/// The encoded size of every decimal128 value.
pub const ENCODED_SIZE_IN_BYTES: usize = 16;

impl Decimal128 {
    /// Reads a value from its 16-byte little-endian wire representation.
    ///
    /// ```
    /// use bson_decimal128::Decimal128;
    /// let bytes = [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x40, 0x30];
    /// assert_eq!(Decimal128::from_le_bytes(bytes).to_string(), "1");
    /// ```
    pub const fn from_le_bytes(bytes: [u8; ENCODED_SIZE_IN_BYTES]) -> Decimal128 {
        let bits = u128::from_le_bytes(bytes);
        Decimal128::new((bits >> 64) as u64, bits as u64)
    }

    /// Writes this value to its 16-byte little-endian wire representation.
    pub const fn to_le_bytes(&self) -> [u8; ENCODED_SIZE_IN_BYTES] {
        (((self.high() as u128) << 64) | self.low() as u128).to_le_bytes()
    }
}

impl TryFrom<&[u8]> for Decimal128 {
    type Error = DecimalError;

    /// Attempts to read a value from a byte slice, which must be exactly sixteen bytes long.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; ENCODED_SIZE_IN_BYTES] = bytes.try_into().map_err(|_| {
            DecodingError::new(format!(
                "expected a {ENCODED_SIZE_IN_BYTES}-byte decimal128 encoding, found {} byte(s)",
                bytes.len()
            ))
        })?;
        Ok(Decimal128::from_le_bytes(bytes))
    }
}
