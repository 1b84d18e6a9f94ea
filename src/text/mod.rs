//! Parsing and formatting of the decimal128 textual form.
//!
//! Parsing is liberal: any string the [`BigDecimal`] grammar accepts is accepted here,
//! along with the NaN and infinity tokens below in any ASCII case. Formatting produces the
//! canonical form shared by extended JSON implementations: plain notation when the value
//! sits close to the decimal point, scientific notation elsewhere, with the encoded
//! precision preserved in both.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::result::{DecimalError, ParseError};
use crate::types::decimal128::Decimal128;

const NAN_TOKENS: &[&str] = &["nan"];
const POSITIVE_INFINITY_TOKENS: &[&str] = &["inf", "+inf", "infinity", "+infinity"];
const NEGATIVE_INFINITY_TOKENS: &[&str] = &["-inf", "-infinity"];

// Rendering switches from plain to scientific notation when the adjusted exponent drops
// below this threshold.
const MIN_PLAIN_ADJUSTED_EXPONENT: i64 = -6;

impl FromStr for Decimal128 {
    type Err = DecimalError;

    /// Parses a decimal128 value from text.
    ///
    /// ```
    /// use bson_decimal128::Decimal128;
    /// # use bson_decimal128::DecimalResult;
    /// # fn main() -> DecimalResult<()> {
    /// let value: Decimal128 = "2.000".parse()?;
    /// assert_eq!(value.to_string(), "2.000");
    ///
    /// let infinity: Decimal128 = "-inf".parse()?;
    /// assert_eq!(infinity, Decimal128::NEGATIVE_INFINITY);
    /// # Ok(())
    /// # }
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let folded = text.to_ascii_lowercase();
        if NAN_TOKENS.contains(&folded.as_str()) {
            return Ok(Decimal128::NAN);
        }
        if POSITIVE_INFINITY_TOKENS.contains(&folded.as_str()) {
            return Ok(Decimal128::POSITIVE_INFINITY);
        }
        if NEGATIVE_INFINITY_TOKENS.contains(&folded.as_str()) {
            return Ok(Decimal128::NEGATIVE_INFINITY);
        }
        let value = BigDecimal::from_str(text).map_err(|error| {
            ParseError::new(format!("not a valid decimal128 string {text:?}: {error}"))
        })?;
        // A leading '-' is the only signal that distinguishes -0 from 0; the parsed
        // value cannot carry it.
        Decimal128::from_big_decimal_with_sign(&value, text.starts_with('-'))
    }
}

impl Display for Decimal128 {
    /// Renders this value's canonical textual form.
    ///
    /// Every distinct finite encoding renders distinctly except the non-canonical zeros,
    /// which render as a zero with their encoded exponent. NaN renders as `"NaN"`
    /// regardless of its sign or payload bits.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        if self.is_infinite() {
            let rendered = if self.is_negative() {
                "-Infinity"
            } else {
                "Infinity"
            };
            return f.write_str(rendered);
        }

        let digits = self.coefficient().magnitude().to_string();
        let length = digits.len() as i64;
        let exponent = self.exponent();
        let adjusted_exponent = exponent + (length - 1);

        if self.is_negative() {
            f.write_str("-")?;
        }

        if exponent <= 0 && adjusted_exponent >= MIN_PLAIN_ADJUSTED_EXPONENT {
            if exponent == 0 {
                return f.write_str(&digits);
            }
            let pad = -exponent - length;
            if pad >= 0 {
                // Every digit falls to the right of the decimal point, e.g. 0.00123.
                f.write_str("0.")?;
                for _ in 0..pad {
                    f.write_str("0")?;
                }
                f.write_str(&digits)
            } else {
                // The decimal point falls inside the digits, e.g. 12.3.
                let dot_index = (length + exponent) as usize;
                write!(f, "{}.{}", &digits[..dot_index], &digits[dot_index..])
            }
        } else {
            f.write_str(&digits[..1])?;
            if length > 1 {
                write!(f, ".{}", &digits[1..])?;
            }
            if adjusted_exponent > 0 {
                write!(f, "E+{adjusted_exponent}")
            } else {
                write!(f, "E{adjusted_exponent}")
            }
        }
    }
}
