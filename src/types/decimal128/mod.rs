//! Types related to [`Decimal128`], the in-memory representation of a BSON decimal128 value.

use std::fmt::{Debug, Formatter};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::result::{DecimalError, DecimalResult, NotFiniteError, OutOfRangeError};
use crate::types::decimal128::coefficient::{Coefficient, Sign};

pub mod coefficient;

/// Bit 127 of the encoding: set for negative values, including -0, -Infinity, and
/// negative NaN.
const SIGN_BIT_MASK: u64 = 1 << 63;
/// Matches the `11110` combination prefix that marks an infinity. The NaN prefix also
/// matches this mask; classification cascades must test for NaN first.
const INFINITY_MASK: u64 = 0x78 << 56;
/// Matches the `11111` combination prefix that marks a NaN, quiet or signaling.
const NAN_MASK: u64 = 0x7c << 56;
/// The two leading combination bits that select the non-canonical (Form B) finite layout.
const FORM_B_MASK: u64 = 0b11 << 61;
/// The 49 bits of `high` that hold the top of a canonical (Form A) coefficient.
const COEFFICIENT_CONTINUATION_MASK: u64 = 0x0001_FFFF_FFFF_FFFF;

/// The bias added to an exponent to produce the unsigned 14-bit field in the encoding.
const EXPONENT_OFFSET: i64 = 6176;
/// Where the biased exponent sits within `high` in the Form A layout.
const FORM_A_EXPONENT_SHIFT: u32 = 49;
/// Where the biased exponent sits within `high` in the Form B layout.
const FORM_B_EXPONENT_SHIFT: u32 = 47;
const BIASED_EXPONENT_MASK: u64 = 0x3fff;

pub(crate) const MIN_EXPONENT: i64 = -6176;
pub(crate) const MAX_EXPONENT: i64 = 6111;

/// The widest magnitude the encoding can hold: every 34-digit coefficient fits in 113 bits.
pub(crate) const MAX_COEFFICIENT_BIT_LENGTH: u32 = 113;

/// An IEEE 754-2008 decimal128 value in the Binary Integer Decimal (BID) encoding used by
/// the BSON binary document format.
///
/// A `Decimal128` is an immutable pair of 64-bit halves and is cheap to copy. It represents
/// every finite signed decimal with up to 34 significant digits and an exponent in
/// `[-6176, 6111]`, plus signed zeros, signed infinities, and NaN.
///
/// Equality and hashing are bitwise over the `(high, low)` pair: `0` and `-0` are distinct
/// values, as are two encodings of the same mathematical value with different exponents
/// (for example `0` and `0E+3`). The hash is the standard field-order fold of `high` then
/// `low`; this choice is frozen as part of the type's contract.
///
/// ```
/// use bson_decimal128::Decimal128;
/// # use bson_decimal128::DecimalResult;
/// # fn main() -> DecimalResult<()> {
/// let value: Decimal128 = "-12.25".parse()?;
/// assert!(value.is_finite());
/// assert!(value.is_negative());
/// assert_eq!(value.exponent(), -2);
/// assert_eq!(value.coefficient().magnitude(), 1225);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal128 {
    high: u64,
    low: u64,
}

impl Decimal128 {
    /// A positive zero with a zero exponent.
    pub const POSITIVE_ZERO: Decimal128 =
        Decimal128::new((EXPONENT_OFFSET as u64) << FORM_A_EXPONENT_SHIFT, 0);

    /// A negative zero with a zero exponent.
    pub const NEGATIVE_ZERO: Decimal128 =
        Decimal128::new(((EXPONENT_OFFSET as u64) << FORM_A_EXPONENT_SHIFT) | SIGN_BIT_MASK, 0);

    /// The canonical positive infinity.
    pub const POSITIVE_INFINITY: Decimal128 = Decimal128::new(INFINITY_MASK, 0);

    /// The canonical negative infinity.
    pub const NEGATIVE_INFINITY: Decimal128 = Decimal128::new(INFINITY_MASK | SIGN_BIT_MASK, 0);

    /// The canonical (quiet, unsigned, zero-payload) NaN.
    pub const NAN: Decimal128 = Decimal128::new(NAN_MASK, 0);

    /// Constructs a Decimal128 from its raw 64-bit halves. No validation is performed;
    /// the caller is responsible for supplying a meaningful encoding.
    pub const fn new(high: u64, low: u64) -> Decimal128 {
        Decimal128 { high, low }
    }

    /// Returns the high-order 64 bits of this value's encoding.
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Returns the low-order 64 bits of this value's encoding.
    pub const fn low(&self) -> u64 {
        self.low
    }

    /// Returns true if this value's sign bit is set. NaN and the infinities carry a sign
    /// bit like any finite value.
    pub const fn is_negative(&self) -> bool {
        self.high & SIGN_BIT_MASK == SIGN_BIT_MASK
    }

    /// Returns true if this value is an infinity of either sign.
    ///
    /// The infinity bit pattern is a subset of the NaN pattern, so this is also true of
    /// NaN; call [`is_nan`](Self::is_nan) first to tell the two apart.
    pub const fn is_infinite(&self) -> bool {
        self.high & INFINITY_MASK == INFINITY_MASK
    }

    /// Returns true if this value is neither an infinity nor NaN.
    pub const fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    /// Returns true if this value is NaN, whether quiet or signaling.
    pub const fn is_nan(&self) -> bool {
        self.high & NAN_MASK == NAN_MASK
    }

    /// Returns the sign of this value's coefficient.
    pub fn sign(&self) -> Sign {
        if self.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Returns this value's decoded exponent.
    ///
    /// The exponent field is read from the combination bits regardless of classification,
    /// so this method is total; for NaN and the infinities the result carries no meaning.
    pub fn exponent(&self) -> i64 {
        let biased_exponent = if self.two_highest_combination_bits_are_set() {
            (self.high >> FORM_B_EXPONENT_SHIFT) & BIASED_EXPONENT_MASK
        } else {
            (self.high >> FORM_A_EXPONENT_SHIFT) & BIASED_EXPONENT_MASK
        };
        biased_exponent as i64 - EXPONENT_OFFSET
    }

    /// Returns this value's coefficient: the signed unscaled integer that, together with
    /// the exponent, defines the numeric value.
    ///
    /// A Form B encoding declares a significand wider than 34 decimal digits; such
    /// encodings are never canonical and always decode to a zero coefficient with the
    /// encoded sign.
    pub fn coefficient(&self) -> Coefficient {
        Coefficient::new(self.sign(), self.significand())
    }

    // The 113-bit magnitude: 49 continuation bits of `high` above all 64 bits of `low`.
    fn significand(&self) -> u128 {
        if self.two_highest_combination_bits_are_set() {
            return 0;
        }
        (u128::from(self.high & COEFFICIENT_CONTINUATION_MASK) << 64) | u128::from(self.low)
    }

    const fn two_highest_combination_bits_are_set(&self) -> bool {
        self.high & FORM_B_MASK == FORM_B_MASK
    }

    /// Encodes the provided coefficient and exponent, always producing the canonical
    /// (Form A) layout.
    ///
    /// ```
    /// use bson_decimal128::{Coefficient, Decimal128, Sign};
    /// # use bson_decimal128::DecimalResult;
    /// # fn main() -> DecimalResult<()> {
    /// let value = Decimal128::from_parts(Coefficient::new(Sign::Negative, 1225), -2)?;
    /// assert_eq!(value.to_string(), "-12.25");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::OutOfRange`] if the exponent falls outside `[-6176, 6111]`
    /// or the coefficient's magnitude occupies more than 113 bits.
    pub fn from_parts(coefficient: Coefficient, exponent: i64) -> DecimalResult<Decimal128> {
        if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
            return Err(OutOfRangeError::new(format!(
                "exponent is out of range for the decimal128 encoding: {exponent}"
            ))
            .into());
        }
        if coefficient.bit_length() > MAX_COEFFICIENT_BIT_LENGTH {
            return Err(OutOfRangeError::new(format!(
                "coefficient is out of range for the decimal128 encoding: {coefficient}"
            ))
            .into());
        }

        let magnitude = coefficient.magnitude();
        let low = magnitude as u64;
        let mut high = (magnitude >> 64) as u64;
        high |= ((exponent + EXPONENT_OFFSET) as u64) << FORM_A_EXPONENT_SHIFT;
        if coefficient.is_negative() {
            high |= SIGN_BIT_MASK;
        }
        Ok(Decimal128::new(high, low))
    }

    /// Encodes a BigDecimal along with an explicit negative flag.
    ///
    /// The flag is authoritative for zeros: a BigDecimal cannot carry `-0`, so the text
    /// parser passes the presence of a leading `'-'` alongside the parsed value. For
    /// non-zero values the flag and the unscaled integer's own sign always agree.
    pub(crate) fn from_big_decimal_with_sign(
        value: &BigDecimal,
        is_negative: bool,
    ) -> DecimalResult<Decimal128> {
        let (unscaled, scale) = value.as_bigint_and_exponent();
        // A positive scale indicates a negative power of ten.
        let exponent = scale.checked_neg().ok_or_else(|| {
            OutOfRangeError::new(format!(
                "scale is out of range for the decimal128 encoding: {scale}"
            ))
        })?;
        if unscaled.bits() > u64::from(MAX_COEFFICIENT_BIT_LENGTH) {
            return Err(OutOfRangeError::new(format!(
                "unscaled value is out of range for the decimal128 encoding: {unscaled}"
            ))
            .into());
        }
        let is_unscaled_negative = unscaled.sign() == num_bigint::Sign::Minus;
        debug_assert!(
            !is_unscaled_negative || is_negative,
            "a negative unscaled value must arrive with the negative flag set"
        );
        let sign = if is_unscaled_negative || is_negative {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let magnitude = unscaled.magnitude().to_u128().ok_or_else(|| {
            OutOfRangeError::new("unscaled value is out of range for the decimal128 encoding")
        })?;
        Decimal128::from_parts(Coefficient::new(sign, magnitude), exponent)
    }
}

impl Debug for Decimal128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Decimal128({:#018x}, {:#018x})", self.high, self.low)
    }
}

impl TryFrom<&BigDecimal> for Decimal128 {
    type Error = DecimalError;

    /// Attempts to encode a BigDecimal as a Decimal128. This is lossless whenever the
    /// unscaled value fits in 113 bits and the exponent is within `[-6176, 6111]`.
    ///
    /// A BigDecimal cannot represent a negative zero, so this conversion never produces
    /// one; parse text through [`FromStr`](std::str::FromStr) to preserve `-0`.
    fn try_from(value: &BigDecimal) -> Result<Self, Self::Error> {
        Decimal128::from_big_decimal_with_sign(value, value.sign() == num_bigint::Sign::Minus)
    }
}

impl TryFrom<BigDecimal> for Decimal128 {
    type Error = DecimalError;

    fn try_from(value: BigDecimal) -> Result<Self, Self::Error> {
        Decimal128::try_from(&value)
    }
}

impl TryFrom<Decimal128> for BigDecimal {
    type Error = DecimalError;

    /// Attempts to create a BigDecimal that is numerically equal to the provided value.
    ///
    /// # Errors
    ///
    /// Returns [`DecimalError::NotFinite`] if the value is NaN or an infinity, and
    /// [`DecimalError::NegativeZero`] if it is a zero with its sign bit set, which a
    /// BigDecimal cannot represent. Callers that need to tolerate signed zeros must
    /// inspect the [`Decimal128`] directly before converting.
    fn try_from(value: Decimal128) -> Result<Self, Self::Error> {
        // The NaN combination bits also match the infinity mask; NaN is tested first.
        if value.is_nan() {
            return Err(NotFiniteError::new("NaN cannot be converted to a BigDecimal").into());
        }
        if value.is_infinite() {
            return Err(NotFiniteError::new("Infinity cannot be converted to a BigDecimal").into());
        }
        let unscaled: BigInt = value.coefficient().try_into()?;
        Ok(BigDecimal::new(unscaled, -value.exponent()))
    }
}

impl TryFrom<&Decimal128> for BigDecimal {
    type Error = DecimalError;

    fn try_from(value: &Decimal128) -> Result<Self, Self::Error> {
        BigDecimal::try_from(*value)
    }
}

#[cfg(test)]
mod decimal128_tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::str::FromStr;

    use rstest::*;

    #[rstest]
    #[case::positive_zero(Decimal128::POSITIVE_ZERO, 0x3040_0000_0000_0000, 0)]
    #[case::negative_zero(Decimal128::NEGATIVE_ZERO, 0xB040_0000_0000_0000, 0)]
    #[case::positive_infinity(Decimal128::POSITIVE_INFINITY, 0x7800_0000_0000_0000, 0)]
    #[case::negative_infinity(Decimal128::NEGATIVE_INFINITY, 0xF800_0000_0000_0000, 0)]
    #[case::nan(Decimal128::NAN, 0x7C00_0000_0000_0000, 0)]
    fn constants_have_reference_encodings(
        #[case] value: Decimal128,
        #[case] high: u64,
        #[case] low: u64,
    ) {
        assert_eq!(value.high(), high);
        assert_eq!(value.low(), low);
    }

    #[rstest]
    #[case::quiet_nan(Decimal128::new(0x7C00_0000_0000_0000, 0), true, true, false)]
    #[case::signaling_nan(Decimal128::new(0x7E00_0000_0000_0000, 0), true, true, false)]
    #[case::negative_nan(Decimal128::new(0xFC00_0000_0000_0000, 0), true, true, false)]
    #[case::nan_with_payload(Decimal128::new(0x7C00_0000_0000_0000, 12), true, true, false)]
    #[case::positive_infinity(Decimal128::POSITIVE_INFINITY, false, true, false)]
    #[case::negative_infinity(Decimal128::NEGATIVE_INFINITY, false, true, false)]
    #[case::zero(Decimal128::POSITIVE_ZERO, false, false, true)]
    #[case::one(Decimal128::new(0x3040_0000_0000_0000, 1), false, false, true)]
    #[case::form_b_zero(Decimal128::new(0x6C10_0000_0000_0000, 0), false, false, true)]
    fn classification(
        #[case] value: Decimal128,
        #[case] nan: bool,
        #[case] infinite: bool,
        #[case] finite: bool,
    ) {
        // NaN's combination bits are a superset of the infinity mask, so is_infinite is
        // true for NaN as well; callers distinguish the two by testing is_nan first.
        assert_eq!(value.is_nan(), nan);
        assert_eq!(value.is_infinite(), infinite);
        assert_eq!(value.is_finite(), finite);
    }

    #[test]
    fn classification_ignores_low_bits() {
        let nan = Decimal128::new(0x7C00_0000_0000_0000, u64::MAX);
        assert!(nan.is_nan());
        let infinity = Decimal128::new(0x7800_0000_0000_0000, u64::MAX);
        assert!(infinity.is_infinite() && !infinity.is_nan());
    }

    #[rstest]
    #[case::zero_exponent(Decimal128::POSITIVE_ZERO, 0)]
    #[case::min_exponent(Decimal128::new(0, 1), -6176)]
    #[case::max_exponent(Decimal128::new(0x5FFE_0000_0000_0000, 0), 6111)]
    #[case::form_b_zero_exponent(Decimal128::new(0x6C10_0000_0000_0000, 0), 0)]
    #[case::form_b_nonzero_exponent(
        Decimal128::new(0x6C11_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF),
        3
    )]
    fn exponent_extraction(#[case] value: Decimal128, #[case] expected: i64) {
        assert_eq!(value.exponent(), expected);
    }

    #[rstest]
    #[case::one(Decimal128::new(0x3040_0000_0000_0000, 1), 1)]
    #[case::seventeen_digits(
        Decimal128::new(0x3040_0000_0000_0000, 0x002B_DC54_5D6B_4B87),
        12_345_678_901_234_567
    )]
    #[case::largest_coefficient(
        Decimal128::new(0x5FFF_ED09_BEAD_87C0, 0x378D_8E63_FFFF_FFFF),
        9_999_999_999_999_999_999_999_999_999_999_999
    )]
    #[case::form_b_is_zero(
        Decimal128::new(0x6C11_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF),
        0
    )]
    fn coefficient_extraction(#[case] value: Decimal128, #[case] expected: u128) {
        assert_eq!(value.coefficient().magnitude(), expected);
    }

    #[rstest]
    #[case(Coefficient::ZERO, 0, Decimal128::POSITIVE_ZERO)]
    #[case(Coefficient::NEGATIVE_ZERO, 0, Decimal128::NEGATIVE_ZERO)]
    #[case(Coefficient::new(Sign::Positive, 1), 0, Decimal128::new(0x3040_0000_0000_0000, 1))]
    #[case(Coefficient::new(Sign::Negative, 1), 0, Decimal128::new(0xB040_0000_0000_0000, 1))]
    #[case(Coefficient::new(Sign::Positive, 1), -6176, Decimal128::new(0, 1))]
    #[case(
        Coefficient::new(Sign::Positive, 9_999_999_999_999_999_999_999_999_999_999_999),
        6111,
        Decimal128::new(0x5FFF_ED09_BEAD_87C0, 0x378D_8E63_FFFF_FFFF)
    )]
    fn from_parts_produces_reference_encodings(
        #[case] coefficient: Coefficient,
        #[case] exponent: i64,
        #[case] expected: Decimal128,
    ) {
        assert_eq!(Decimal128::from_parts(coefficient, exponent), Ok(expected));
    }

    #[rstest]
    #[case::exponent_too_large(Coefficient::new(Sign::Positive, 1), 6112)]
    #[case::exponent_too_small(Coefficient::new(Sign::Positive, 1), -6177)]
    // 2^113 is the first magnitude whose bit length exceeds the 113-bit limit
    #[case::coefficient_too_wide(Coefficient::new(Sign::Positive, 1u128 << 113), 0)]
    fn from_parts_rejects_out_of_range_inputs(
        #[case] coefficient: Coefficient,
        #[case] exponent: i64,
    ) {
        let result = Decimal128::from_parts(coefficient, exponent);
        assert!(matches!(result, Err(DecimalError::OutOfRange(_))));
    }

    #[test]
    fn round_trip_through_parts() {
        let value = Decimal128::new(0x3032_0000_0000_0000, 0x3039);
        let reencoded = Decimal128::from_parts(value.coefficient(), value.exponent()).unwrap();
        assert_eq!(reencoded, value);
    }

    #[test]
    fn form_b_reencodes_as_form_a() {
        let non_canonical = Decimal128::new(0x6C11_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF);
        let reencoded =
            Decimal128::from_parts(non_canonical.coefficient(), non_canonical.exponent()).unwrap();
        assert_eq!(reencoded, Decimal128::new(0x3046_0000_0000_0000, 0));
        assert_ne!(reencoded, non_canonical);
    }

    #[rstest]
    #[case("12.25", 1225, -2)]
    #[case("-12.25", -1225, -2)]
    #[case("1E6", 1, 6)]
    #[case("123E-9", 123, -9)]
    fn encode_from_big_decimal(
        #[case] text: &str,
        #[case] unscaled: i64,
        #[case] expected_exponent: i64,
    ) {
        let big_decimal = BigDecimal::from_str(text).unwrap();
        let value = Decimal128::try_from(&big_decimal).unwrap();
        let expected =
            Decimal128::from_parts(unscaled.into(), expected_exponent).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn decode_to_big_decimal() {
        let value = Decimal128::new(0x3032_0000_0000_0000, 0x3039);
        let big_decimal: BigDecimal = value.try_into().unwrap();
        assert_eq!(big_decimal, BigDecimal::from_str("0.0012345").unwrap());
    }

    #[test]
    fn form_b_decodes_to_a_zero_big_decimal() {
        let non_canonical = Decimal128::new(0x6C11_FFFF_FFFF_FFFF, 0xFFFF_FFFF_FFFF_FFFF);
        let big_decimal: BigDecimal = non_canonical.try_into().unwrap();
        assert_eq!(big_decimal, BigDecimal::new(0.into(), -3));
    }

    #[rstest]
    #[case::nan(Decimal128::NAN)]
    #[case::signaling_nan(Decimal128::new(0x7E00_0000_0000_0000, 0))]
    #[case::positive_infinity(Decimal128::POSITIVE_INFINITY)]
    #[case::negative_infinity(Decimal128::NEGATIVE_INFINITY)]
    fn non_finite_values_do_not_convert_to_big_decimal(#[case] value: Decimal128) {
        let result = BigDecimal::try_from(value);
        assert!(matches!(result, Err(DecimalError::NotFinite(_))));
    }

    #[rstest]
    #[case::negative_zero(Decimal128::NEGATIVE_ZERO)]
    #[case::negative_zero_with_exponent(Decimal128::new(0xB046_0000_0000_0000, 0))]
    #[case::form_b_negative_zero(Decimal128::new(0xEC10_0000_0000_0000, 0))]
    fn negative_zeros_do_not_convert_to_big_decimal(#[case] value: Decimal128) {
        let result = BigDecimal::try_from(value);
        assert!(matches!(result, Err(DecimalError::NegativeZero(_))));
    }

    fn hash_of(value: Decimal128) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_and_hashing_are_bitwise() {
        assert_ne!(Decimal128::POSITIVE_ZERO, Decimal128::NEGATIVE_ZERO);
        // The same mathematical zero with different exponents is a different value.
        assert_ne!(
            Decimal128::POSITIVE_ZERO,
            Decimal128::new(0x3046_0000_0000_0000, 0)
        );
        let one = Decimal128::new(0x3040_0000_0000_0000, 1);
        assert_eq!(one, Decimal128::new(0x3040_0000_0000_0000, 1));
        assert_eq!(hash_of(one), hash_of(Decimal128::new(0x3040_0000_0000_0000, 1)));
    }

    #[test]
    fn debug_shows_raw_halves() {
        let value = Decimal128::new(0x3040_0000_0000_0000, 1);
        assert_eq!(
            format!("{value:?}"),
            "Decimal128(0x3040000000000000, 0x0000000000000001)"
        );
    }
}
