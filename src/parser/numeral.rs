use std::str::FromStr;

use rust_decimal::Decimal;
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt, preceded};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

/// Largest power of ten a `Decimal` can scale by
const MAX_EXPONENT: i64 = 28;

/// The pieces of a base-10 numeral
#[derive(Debug)]
struct Numeral<'s> {
    negative: bool,
    integer: &'s str,
    fraction: &'s str,
    exponent: Option<(bool, &'s str)>,
}

fn parse_sign(input: &mut &str) -> ModalResult<bool> {
    opt(one_of(['+', '-']))
        .map(|sign| sign == Some('-'))
        .parse_next(input)
}

/// `digits ('.' digits?)?` or `'.' digits`
fn parse_mantissa<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    alt((
        (digit1, opt(preceded('.', digit0))).map(|(int, frac)| (int, frac.unwrap_or(""))),
        preceded('.', digit1).map(|frac| ("", frac)),
    ))
    .parse_next(input)
}

fn parse_exponent<'s>(input: &mut &'s str) -> ModalResult<(bool, &'s str)> {
    preceded(one_of(['e', 'E']), (parse_sign, digit1)).parse_next(input)
}

fn parse_numeral<'s>(input: &mut &'s str) -> ModalResult<Numeral<'s>> {
    (parse_sign, parse_mantissa, opt(parse_exponent))
        .map(|(negative, (integer, fraction), exponent)| Numeral {
            negative,
            integer,
            fraction,
            exponent,
        })
        .parse_next(input)
}

/// Parse an optionally signed base-10 numeral into a `Decimal`
///
/// Leading and trailing whitespace is ignored. Exponents are accepted (`1.5e3`).
///
/// # Returns
/// * `Result<Decimal, String>` - The value, or an error message for malformed or
///   out-of-range input
///
/// # Examples
/// ```
/// use money_fragments::parser::parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal(" -12.50 ").unwrap(), Decimal::new(-1250, 2));
/// assert!(parse_decimal("12abc").is_err());
/// ```
pub fn parse_decimal(text: &str) -> Result<Decimal, String> {
    let mut input = text.trim();
    let numeral = parse_numeral
        .parse_next(&mut input)
        .map_err(|e| format!("Not a numeral: '{text}' ({e:?})"))?;
    if !input.is_empty() {
        return Err(format!("Trailing characters in numeral: '{input}'"));
    }

    let integer = if numeral.integer.is_empty() {
        "0"
    } else {
        numeral.integer
    };
    let canonical = if numeral.fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{}", numeral.fraction)
    };
    let mut value = Decimal::from_str(&canonical)
        .map_err(|e| format!("Numeral out of range: '{text}' ({e})"))?;

    if let Some((negative_exponent, digits)) = numeral.exponent {
        let exponent = digits
            .parse::<i64>()
            .ok()
            .filter(|e| *e <= MAX_EXPONENT * 2)
            .ok_or_else(|| format!("Exponent out of range: '{text}'"))?;
        value = apply_exponent(value, if negative_exponent { -exponent } else { exponent })
            .ok_or_else(|| format!("Numeral out of range: '{text}'"))?;
    }

    if numeral.negative {
        value.set_sign_negative(true);
    }
    Ok(value)
}

fn apply_exponent(mut value: Decimal, exponent: i64) -> Option<Decimal> {
    if exponent >= 0 {
        for _ in 0..exponent {
            value = value.checked_mul(Decimal::TEN)?;
        }
        Some(value.normalize())
    } else {
        let scale = i64::from(value.scale()) - exponent;
        if scale > MAX_EXPONENT {
            // More fractional digits than a Decimal holds; division rounds the excess
            for _ in 0..-exponent {
                value = value.checked_div(Decimal::TEN)?;
            }
            return Some(value);
        }
        value.set_scale(u32::try_from(scale).ok()?).ok()?;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_numerals() {
        assert_eq!(parse_decimal("0").unwrap(), dec!(0));
        assert_eq!(parse_decimal("1234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("+7").unwrap(), dec!(7));
        assert_eq!(parse_decimal("-0.5").unwrap(), dec!(-0.5));
        assert_eq!(parse_decimal(".25").unwrap(), dec!(0.25));
        assert_eq!(parse_decimal("5.").unwrap(), dec!(5));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse_decimal("1.5e3").unwrap(), dec!(1500));
        assert_eq!(parse_decimal("25E-2").unwrap(), dec!(0.25));
        assert_eq!(parse_decimal("-1e+2").unwrap(), dec!(-100));
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        assert_eq!(parse_decimal("\t 42 \n").unwrap(), dec!(42));
    }

    #[test]
    fn test_rejects_garbage() {
        for text in ["", "abc", "1,000", "12px", "--1", "NaN", "inf", ".", "1e", "1 2"] {
            assert!(parse_decimal(text).is_err(), "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(parse_decimal("1e300").is_err());
        assert!(parse_decimal("99999999999999999999999999999999").is_err());
    }
}
