//! Pipeline entry points
//!
//! `Money` runs normalize → format → extract for one amount and returns plain data
//! for a presentation layer to arrange.

use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MoneyConfig;
use crate::error::{MoneyError, Result};
use crate::formatter::{
    CurrencyFormatter, FormattedCurrency, LocaleCurrencyFormatter, compact_number,
};
use crate::fragments::{decompose_granular_with, extract_from_formatted};
use crate::types::{FragmentSet, GranularToken, Sign};
use crate::value::{RawValue, normalize_value};

/// Everything known about one rendered amount
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyParts {
    /// The locale tag the formatter used
    pub locale: String,
    /// Whether the raw value was below zero
    pub negative: bool,
    /// Absolute value of the raw input
    pub value: Decimal,
    /// Canonical formatted string of `value`
    pub formatted: String,
    /// Semantic fragments of `formatted`
    pub fragments: FragmentSet,
    /// `true` when the number precedes the symbol
    pub reverse: bool,
    /// Decimal separator of `formatted`, `None` when it has no fractional part
    pub decimal_separator: Option<char>,
}

impl MoneyParts {
    pub fn sign(&self) -> Sign {
        if self.negative {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Magnitude-tagged tokens of the number fragment
    ///
    /// Uses the decimal separator reported by the formatter, so zero-digit currencies
    /// never get a `Decimal` token.
    pub fn granular(&self) -> Vec<GranularToken> {
        decompose_granular_with(&self.fragments.number, self.decimal_separator)
    }

    /// Abbreviated magnitude, such as `1k`
    pub fn compact(&self) -> String {
        compact_number(self.value)
    }
}

/// A configured money pipeline
#[derive(Debug, Clone)]
pub struct Money<F = LocaleCurrencyFormatter> {
    config: MoneyConfig,
    formatter: F,
}

impl Default for Money {
    fn default() -> Self {
        Self::new(MoneyConfig::default())
    }
}

impl Money {
    /// Create a pipeline with the built-in formatter
    pub fn new(config: MoneyConfig) -> Self {
        Self::with_formatter(config, LocaleCurrencyFormatter::default())
    }
}

impl<F: CurrencyFormatter> Money<F> {
    /// Create a pipeline around a custom formatter
    pub fn with_formatter(config: MoneyConfig, formatter: F) -> Self {
        Self { config, formatter }
    }

    pub fn config(&self) -> &MoneyConfig {
        &self.config
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Run the whole pipeline for one amount
    ///
    /// `locale` falls back to the configured default locale when absent. The value
    /// and the currency code are validated before anything is formatted.
    ///
    /// # Errors
    /// `InvalidValue`, `UnsupportedCurrency`, `UnsupportedLocale` (unless
    /// `locale_fallback` is enabled), or `UnparsableFormat` from a broken formatter.
    pub fn render(
        &self,
        locale: Option<&str>,
        currency: &str,
        raw: impl Into<RawValue>,
    ) -> Result<MoneyParts> {
        let value = normalize_value(raw)?;
        if !self.formatter.supports_currency(currency) {
            return Err(MoneyError::UnsupportedCurrency(currency.to_string()));
        }

        let locale = locale.unwrap_or(self.config.default_locale());
        let formatted = self.format(locale, currency, value.magnitude)?;
        let (fragments, reverse) = extract_from_formatted(&formatted.text, currency, value.sign)?;

        Ok(MoneyParts {
            locale: formatted.locale,
            negative: value.is_negative(),
            value: value.magnitude,
            formatted: formatted.text,
            fragments,
            reverse,
            decimal_separator: formatted.decimal_separator,
        })
    }

    /// Fragments and layout flag for one amount
    pub fn extract_fragments(
        &self,
        locale: Option<&str>,
        currency: &str,
        raw: impl Into<RawValue>,
    ) -> Result<(FragmentSet, bool)> {
        self.render(locale, currency, raw)
            .map(|parts| (parts.fragments, parts.reverse))
    }

    fn format(
        &self,
        locale: &str,
        currency: &str,
        magnitude: Decimal,
    ) -> Result<FormattedCurrency> {
        let display = self.config.display();
        match self.formatter.format(locale, currency, magnitude, display) {
            Err(MoneyError::UnsupportedLocale(tag))
                if self.config.locale_fallback() && locale != self.config.default_locale() =>
            {
                debug!(
                    "Locale {} unsupported, falling back to {}",
                    tag,
                    self.config.default_locale()
                );
                self.formatter.format(
                    self.config.default_locale(),
                    currency,
                    magnitude,
                    display,
                )
            }
            result => result,
        }
    }
}

/// Extract the fragments of an amount with the default configuration
///
/// # Examples
/// ```
/// use money_fragments::extract_fragments;
///
/// let (fragments, reverse) = extract_fragments(Some("en-US"), "USD", 1234.56).unwrap();
/// assert_eq!(fragments.symbol, "$");
/// assert_eq!(fragments.number, "1,234.56");
/// assert_eq!(fragments.operator, "+");
/// assert!(!reverse);
/// ```
pub fn extract_fragments(
    locale: Option<&str>,
    currency: &str,
    raw: impl Into<RawValue>,
) -> Result<(FragmentSet, bool)> {
    Money::new(MoneyConfig::default()).extract_fragments(locale, currency, raw)
}
