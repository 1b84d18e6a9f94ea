use num_bigint::{BigInt, BigUint};

use crate::result::{DecimalError, NegativeZeroError};
use std::fmt::{Display, Formatter};

/// Indicates whether the Coefficient's magnitude is less than 0 (negative) or not (positive).
/// When the magnitude is zero, the Sign can be used to distinguish between -0 and 0.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Sign {
    Negative,
    Positive,
}

/// A signed integer that can be used as the coefficient of a [`Decimal128`] value. This type
/// does not consider `0` and `-0` to be equal; the distinction is what carries a negative
/// zero through encoding, where the unscaled integer alone cannot represent it.
///
/// A decimal128 coefficient never legitimately occupies more than 113 bits, so the
/// magnitude is held in a `u128`.
///
/// [`Decimal128`]: crate::Decimal128
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Coefficient {
    sign: Sign,
    magnitude: u128,
}

impl Coefficient {
    pub const ZERO: Coefficient = Coefficient {
        sign: Sign::Positive,
        magnitude: 0,
    };

    pub const NEGATIVE_ZERO: Coefficient = Coefficient {
        sign: Sign::Negative,
        magnitude: 0,
    };

    pub const fn new(sign: Sign, magnitude: u128) -> Self {
        Coefficient { sign, magnitude }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn magnitude(&self) -> u128 {
        self.magnitude
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns the number of bits in the magnitude's minimal binary representation.
    /// A zero magnitude has a bit length of zero.
    pub(crate) fn bit_length(&self) -> u32 {
        u128::BITS - self.magnitude.leading_zeros()
    }

    /// Returns true if the Coefficient represents negative zero.
    pub fn is_negative_zero(&self) -> bool {
        self.is_zero_with_sign(Sign::Negative)
    }

    /// Returns true if the Coefficient represents positive zero.
    pub fn is_positive_zero(&self) -> bool {
        self.is_zero_with_sign(Sign::Positive)
    }

    pub(crate) fn is_zero_with_sign(&self, test_sign: Sign) -> bool {
        self.magnitude == 0 && self.sign == test_sign
    }

    /// Returns true if the Coefficient represents a zero of any sign.
    pub fn is_zero(&self) -> bool {
        self.magnitude == 0
    }
}

// This macro makes it possible to turn unsigned integers into a Coefficient using `.into()`.
macro_rules! impl_coefficient_from_unsigned_int_types {
    ($($t:ty),*) => ($(
        impl From<$t> for Coefficient {
            fn from(value: $t) -> Coefficient {
                Coefficient::new(Sign::Positive, value as u128)
            }
        }
    )*)
}
impl_coefficient_from_unsigned_int_types!(u8, u16, u32, u64, u128, usize);

// This macro makes it possible to turn signed integers into a Coefficient using `.into()`.
macro_rules! impl_coefficient_from_signed_int_types {
    ($($t:ty),*) => ($(
        impl From<$t> for Coefficient {
            fn from(value: $t) -> Coefficient {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                Coefficient::new(sign, value.unsigned_abs() as u128)
            }
        }
    )*)
}
impl_coefficient_from_signed_int_types!(i8, i16, i32, i64, i128, isize);

// `BigInt` can't represent -0, so this is technically a lossy operation.
impl TryFrom<Coefficient> for BigInt {
    type Error = DecimalError;

    /// Attempts to create a BigInt from a Coefficient. Returns an Error if the Coefficient
    /// being converted is a negative zero, which BigInt cannot represent. Returns Ok
    /// otherwise.
    fn try_from(value: Coefficient) -> Result<Self, Self::Error> {
        if value.is_negative_zero() {
            return Err(NegativeZeroError::new(
                "cannot convert a negative zero Coefficient to a BigInt",
            )
            .into());
        }
        let sign = match value.sign {
            Sign::Negative => num_bigint::Sign::Minus,
            Sign::Positive => num_bigint::Sign::Plus,
        };
        Ok(BigInt::from_biguint(sign, BigUint::from(value.magnitude)))
    }
}

impl Display for Coefficient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.sign {
            Sign::Positive => {}
            Sign::Negative => write!(f, "-")?,
        };
        write!(f, "{}", self.magnitude)
    }
}
