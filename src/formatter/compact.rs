use rust_decimal::{Decimal, RoundingStrategy};

/// Abbreviation suffixes, largest first, with their power of ten
const UNITS: [(u32, &str); 4] = [(12, "t"), (9, "b"), (6, "m"), (3, "k")];

/// Render a magnitude in abbreviated form, such as `1k` or `12m`
///
/// The value is divided by the largest unit it reaches and rounded half away from
/// zero to a whole number. A result that rounds up to 1000 of a unit moves to the
/// next unit, so `999_999` becomes `1m` rather than `1000k`.
///
/// # Examples
/// ```
/// use money_fragments::formatter::compact_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compact_number(Decimal::from(1_500)), "2k");
/// assert_eq!(compact_number(Decimal::from(999)), "999");
/// ```
pub fn compact_number(value: Decimal) -> String {
    let magnitude = value.abs();
    let sign = if value < Decimal::ZERO { "-" } else { "" };

    // Index into UNITS, or UNITS.len() for no abbreviation
    let mut unit = UNITS
        .iter()
        .position(|(exponent, _)| magnitude >= power_of_ten(*exponent))
        .unwrap_or(UNITS.len());

    loop {
        let (divisor, suffix) = match UNITS.get(unit) {
            Some((exponent, suffix)) => (power_of_ten(*exponent), *suffix),
            None => (Decimal::ONE, ""),
        };
        let rounded = (magnitude / divisor)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize();

        if rounded >= Decimal::ONE_THOUSAND && unit > 0 {
            unit -= 1;
            continue;
        }
        if rounded.is_zero() {
            return "0".to_string();
        }
        return format!("{sign}{rounded}{suffix}");
    }
}

fn power_of_ten(exponent: u32) -> Decimal {
    Decimal::from(10u64.pow(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_units() {
        assert_eq!(compact_number(dec!(0)), "0");
        assert_eq!(compact_number(dec!(12.4)), "12");
        assert_eq!(compact_number(dec!(1234.56)), "1k");
        assert_eq!(compact_number(dec!(1234567)), "1m");
        assert_eq!(compact_number(dec!(25000000000)), "25b");
        assert_eq!(compact_number(dec!(3200000000000)), "3t");
        assert_eq!(compact_number(dec!(4500000000000000)), "4500t");
    }

    #[test]
    fn test_rounding_promotes_to_next_unit() {
        assert_eq!(compact_number(dec!(999.5)), "1k");
        assert_eq!(compact_number(dec!(999999)), "1m");
        assert_eq!(compact_number(dec!(2500)), "3k");
    }

    #[test]
    fn test_negative_values_keep_their_sign() {
        assert_eq!(compact_number(dec!(-1500)), "-2k");
        assert_eq!(compact_number(dec!(-0.2)), "0");
    }
}
