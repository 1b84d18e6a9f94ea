//! This module provides an in-memory representation of the decimal128 value type described
//! by IEEE 754-2008 and stored in BSON documents.

pub mod decimal128;

pub use decimal128::coefficient::{Coefficient, Sign};
pub use decimal128::Decimal128;
