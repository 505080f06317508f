//! Value normalization
//!
//! Coerces a raw number or numeral string into a sign and an absolute magnitude.

use rust_decimal::Decimal;

use crate::error::{MoneyError, Result};
use crate::parser::parse_decimal;
use crate::types::{MoneyValue, Sign};

/// A raw amount as supplied by a caller
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A binary floating point number
    Float(f64),
    /// An exact decimal
    Decimal(Decimal),
    /// A base-10 numeral, optionally signed, possibly padded with whitespace
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Float(f64::from(value))
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        RawValue::Decimal(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(value: $t) -> Self {
                    RawValue::Decimal(Decimal::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Normalize a raw amount into a `MoneyValue`
///
/// The sign is negative only when the value is strictly below zero, so `-0` is
/// positive. Floats are read through their shortest round-trip representation,
/// which keeps `1234.56` as exactly `1234.56`.
///
/// # Errors
/// `InvalidValue` for malformed text, NaN and infinities. Values outside the
/// `Decimal` range (about ±7.9e28) are rejected too, including finite floats
/// such as `1e300` and text with too many digits.
///
/// # Examples
/// ```
/// use money_fragments::normalize_value;
/// use money_fragments::types::Sign;
/// use rust_decimal::Decimal;
///
/// let value = normalize_value("-1234.5").unwrap();
/// assert_eq!(value.sign, Sign::Negative);
/// assert_eq!(value.magnitude, Decimal::new(12345, 1));
/// ```
pub fn normalize_value(raw: impl Into<RawValue>) -> Result<MoneyValue> {
    let decimal = match raw.into() {
        RawValue::Decimal(value) => value,
        RawValue::Float(value) => {
            if !value.is_finite() {
                return Err(MoneyError::InvalidValue(value.to_string()));
            }
            parse_decimal(&value.to_string()).map_err(MoneyError::InvalidValue)?
        }
        RawValue::Text(text) => parse_decimal(&text).map_err(MoneyError::InvalidValue)?,
    };

    let sign = if decimal < Decimal::ZERO {
        Sign::Negative
    } else {
        Sign::Positive
    };

    Ok(MoneyValue {
        sign,
        magnitude: decimal.abs(),
    })
}
