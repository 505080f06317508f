//! Currency formatting module
//!
//! This module turns a locale, a currency code and a non-negative magnitude into the
//! canonical formatted string the fragment extractor works on.
//! Formatting is a capability behind the `CurrencyFormatter` trait; the built-in
//! `LocaleCurrencyFormatter` renders from the embedded locale and currency data.

mod compact;
mod grouping;

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::currency::{CurrencyInfo, CurrencyTable};
use crate::error::{MoneyError, Result};
use crate::locale::LocaleManager;
use crate::types::{Affix, CurrencyDisplay, CurrencyPattern, LocaleSettings};

pub use compact::compact_number;
use grouping::group_integer;

/// Inserted between a letter-edged symbol and the digits, e.g. `CHF 100.00`
const CURRENCY_SPACING: char = '\u{a0}';

/// The output of a currency formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedCurrency {
    /// The locale tag the formatter actually used
    pub locale: String,
    /// The formatted amount, e.g. `$1,234.56`
    pub text: String,
    /// Decimal separator, present only when the text has a fractional part
    pub decimal_separator: Option<char>,
}

/// A locale-aware currency formatting capability
///
/// Implementations render a non-negative magnitude the way a standard currency
/// number format does: grouping, decimal separator, symbol choice and placement.
pub trait CurrencyFormatter {
    /// Format `magnitude` as an amount of `currency` for `locale`
    ///
    /// # Errors
    /// `UnsupportedCurrency` for codes outside ISO-4217, `UnsupportedLocale` when the
    /// locale cannot be resolved.
    fn format(
        &self,
        locale: &str,
        currency: &str,
        magnitude: Decimal,
        display: CurrencyDisplay,
    ) -> Result<FormattedCurrency>;

    /// Whether the formatter knows the currency code
    fn supports_currency(&self, currency: &str) -> bool;
}

/// Formatter backed by the embedded locale and ISO-4217 tables
#[derive(Debug, Clone)]
pub struct LocaleCurrencyFormatter {
    locales: Arc<LocaleManager>,
    currencies: Arc<CurrencyTable>,
}

impl Default for LocaleCurrencyFormatter {
    fn default() -> Self {
        Self::new(LocaleManager::builtin(), CurrencyTable::builtin())
    }
}

impl LocaleCurrencyFormatter {
    pub fn new(locales: Arc<LocaleManager>, currencies: Arc<CurrencyTable>) -> Self {
        Self {
            locales,
            currencies,
        }
    }

    /// Use custom locale data with the embedded currency table
    pub fn with_locales(locales: LocaleManager) -> Self {
        Self::new(Arc::new(locales), CurrencyTable::builtin())
    }

    pub fn locales(&self) -> &LocaleManager {
        &self.locales
    }

    fn currency(&self, code: &str) -> Result<&CurrencyInfo> {
        self.currencies
            .get(code)
            .ok_or_else(|| MoneyError::UnsupportedCurrency(code.to_string()))
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format(
        &self,
        locale: &str,
        currency: &str,
        magnitude: Decimal,
        display: CurrencyDisplay,
    ) -> Result<FormattedCurrency> {
        let info = self.currency(currency)?;
        if magnitude.is_sign_negative() && !magnitude.is_zero() {
            return Err(MoneyError::InvalidValue(format!(
                "Magnitude must not be negative: {magnitude}"
            )));
        }

        let (tag, settings) = self
            .locales
            .resolve(locale)
            .map_err(|_| MoneyError::UnsupportedLocale(locale.to_string()))?;

        let symbol = match display {
            CurrencyDisplay::Symbol => settings.symbol_for(&info.code).unwrap_or(info.symbol()),
            CurrencyDisplay::NarrowSymbol => info.narrow_symbol(),
            CurrencyDisplay::Code => info.code.as_str(),
        };

        let number = format_magnitude(magnitude, info.digits, settings);
        let text = apply_pattern(&settings.currency_pattern, symbol, &number);
        debug!("Formatted {} {} for {} as {:?}", magnitude, currency, tag, text);

        Ok(FormattedCurrency {
            locale: tag.to_string(),
            text,
            decimal_separator: (info.digits > 0).then_some(settings.decimal_separator),
        })
    }

    fn supports_currency(&self, currency: &str) -> bool {
        self.currencies.contains(currency)
    }
}

/// Round to the currency's minor units and render with locale separators
fn format_magnitude(magnitude: Decimal, digits: u8, settings: &LocaleSettings) -> String {
    let scale = u32::from(digits);
    let mut rounded = magnitude
        .abs()
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);

    let plain = rounded.to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let pattern = &settings.currency_pattern;
    let min_integer_digits = usize::from(pattern.min_integer_digits);
    let int_digits = if int_part.len() < min_integer_digits {
        format!("{int_part:0>min_integer_digits$}")
    } else {
        int_part.to_string()
    };

    let mut result = group_integer(
        &int_digits,
        pattern.primary_grouping,
        pattern.secondary_grouping,
        settings.min_grouping,
        settings.group_separator,
    );
    if digits > 0 {
        // Near Decimal::MAX the rescale stops short of the currency's digits
        let width = usize::from(digits);
        result.push(settings.decimal_separator);
        result.push_str(&format!("{frac_part:0<width$}"));
    }
    result
}

/// Lay out the number between the pattern affixes
fn apply_pattern(pattern: &CurrencyPattern, symbol: &str, number: &str) -> String {
    let mut result = String::with_capacity(symbol.len() + number.len() + 4);

    push_affixes(&mut result, &pattern.prefix, symbol);
    if pattern.prefix.last() == Some(&Affix::Currency)
        && symbol.chars().next_back().is_some_and(needs_spacing)
    {
        result.push(CURRENCY_SPACING);
    }

    result.push_str(number);

    if pattern.suffix.first() == Some(&Affix::Currency)
        && symbol.chars().next().is_some_and(needs_spacing)
    {
        result.push(CURRENCY_SPACING);
    }
    push_affixes(&mut result, &pattern.suffix, symbol);

    result
}

fn push_affixes(result: &mut String, affixes: &[Affix], symbol: &str) {
    for affix in affixes {
        match affix {
            Affix::Currency => result.push_str(symbol),
            Affix::Literal(text) => result.push_str(text),
        }
    }
}

/// Symbols ending in a letter are separated from adjacent digits
fn needs_spacing(c: char) -> bool {
    c.is_alphabetic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn format(locale: &str, currency: &str, magnitude: Decimal) -> Result<String> {
        LocaleCurrencyFormatter::default()
            .format(locale, currency, magnitude, CurrencyDisplay::Symbol)
            .map(|formatted| formatted.text)
    }

    #[test]
    fn test_symbol_first_locale() {
        assert_eq!(format("en-US", "USD", dec!(1234.56)).unwrap(), "$1,234.56");
        assert_eq!(format("en-US", "USD", dec!(0)).unwrap(), "$0.00");
        assert_eq!(format("en-US", "USD", dec!(0.005)).unwrap(), "$0.01");
    }

    #[test]
    fn test_symbol_last_locale() {
        assert_eq!(
            format("de-DE", "EUR", dec!(1234.56)).unwrap(),
            "1.234,56\u{a0}€"
        );
    }

    #[test]
    fn test_zero_digit_currency() {
        assert_eq!(format("en-US", "JPY", dec!(1234.5)).unwrap(), "¥1,235");
        assert_eq!(format("ja-JP", "JPY", dec!(100)).unwrap(), "￥100");
    }

    #[test]
    fn test_currency_spacing() {
        assert_eq!(format("en-US", "CHF", dec!(100)).unwrap(), "CHF\u{a0}100.00");
        assert_eq!(format("de-CH", "CHF", dec!(1234.5)).unwrap(), "CHF\u{a0}1’234.50");
    }

    #[test]
    fn test_display_styles() {
        let formatter = LocaleCurrencyFormatter::default();
        let code = formatter
            .format("en-US", "EUR", dec!(5), CurrencyDisplay::Code)
            .unwrap();
        assert_eq!(code.text, "EUR\u{a0}5.00");

        let narrow = formatter
            .format("en-US", "CAD", dec!(5), CurrencyDisplay::NarrowSymbol)
            .unwrap();
        assert_eq!(narrow.text, "$5.00");

        let symbol = formatter
            .format("en-US", "CAD", dec!(5), CurrencyDisplay::Symbol)
            .unwrap();
        assert_eq!(symbol.text, "CA$5.00");
    }

    #[test]
    fn test_reports_decimal_separator() {
        let formatter = LocaleCurrencyFormatter::default();
        let brl = formatter
            .format("pt-BR", "BRL", dec!(1), CurrencyDisplay::Symbol)
            .unwrap();
        assert_eq!(brl.decimal_separator, Some(','));
        assert_eq!(brl.locale, "pt-BR");

        let krw = formatter
            .format("ko-KR", "KRW", dec!(1), CurrencyDisplay::Symbol)
            .unwrap();
        assert_eq!(krw.decimal_separator, None);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            format("en-US", "ZZZ", dec!(1)),
            Err(MoneyError::UnsupportedCurrency("ZZZ".to_string()))
        );
        assert_eq!(
            format("xx-XX", "USD", dec!(1)),
            Err(MoneyError::UnsupportedLocale("xx-XX".to_string()))
        );
        assert!(matches!(
            format("en-US", "USD", dec!(-1)),
            Err(MoneyError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_huge_magnitudes_keep_minor_units() {
        assert_eq!(
            format("en-US", "USD", Decimal::MAX).unwrap(),
            "$79,228,162,514,264,337,593,543,950,335.00"
        );
        let magnitude = Decimal::from_i128_with_scale(10i128.pow(27), 0);
        let text = format("en-US", "USD", magnitude).unwrap();
        assert!(text.ends_with(",000.00"), "{text}");
        let text = format("en-US", "KWD", Decimal::MAX).unwrap();
        assert_eq!(text.split('.').nth(1), Some("000"));
    }

    #[test]
    fn test_currency_checked_before_locale() {
        assert_eq!(
            format("xx-XX", "usd", dec!(1)),
            Err(MoneyError::UnsupportedCurrency("usd".to_string()))
        );
    }
}
