//! ISO-4217 currency data
//!
//! The embedded table is the validity set for currency codes and carries the minor
//! units and default symbols used by the built-in formatter.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::locale::LocaleError;

/// Minor units for currencies not listed in the `digits` table
const DEFAULT_DIGITS: u8 = 2;

/// Display data for one currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// Upper-case ISO-4217 alphabetic code
    pub code: String,
    /// Number of fraction digits shown
    pub digits: u8,
    /// Default symbol, if the currency has one
    pub symbol: Option<String>,
    /// Narrow symbol, if the currency has one
    pub narrow_symbol: Option<String>,
}

impl CurrencyInfo {
    /// Default symbol, falling back to the code
    pub fn symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or(&self.code)
    }

    /// Narrow symbol, falling back to the default symbol
    pub fn narrow_symbol(&self) -> &str {
        self.narrow_symbol.as_deref().unwrap_or_else(|| self.symbol())
    }
}

/// The set of known currencies
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    currencies: HashMap<String, CurrencyInfo>,
}

static CURRENCY_TABLE: OnceLock<Arc<CurrencyTable>> = OnceLock::new();

impl CurrencyTable {
    fn new() -> Self {
        let toml_str = include_str!("locale/currencies.toml");
        Self::from_toml_str(toml_str).unwrap_or_else(|e| {
            warn!("Failed to load embedded currency data: {}", e);
            Self::default()
        })
    }

    /// Get the shared table holding the embedded ISO-4217 data
    pub fn builtin() -> Arc<Self> {
        CURRENCY_TABLE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    /// Parse a currency table
    ///
    /// Expects a `codes` array plus optional `digits`, `symbols` and `narrow_symbols`
    /// tables keyed by code. Entries in those tables must name a listed code.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, LocaleError> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let codes = parsed_toml
            .get("codes")
            .and_then(|v| v.as_array())
            .ok_or_else(|| LocaleError::ParseError("Missing codes array".to_string()))?;

        let mut currencies = HashMap::with_capacity(codes.len());
        for code in codes {
            let code = code
                .as_str()
                .filter(|c| is_iso_shaped(c))
                .ok_or_else(|| LocaleError::ParseError(format!("Invalid currency code: {code}")))?;
            currencies.insert(
                code.to_string(),
                CurrencyInfo {
                    code: code.to_string(),
                    digits: DEFAULT_DIGITS,
                    symbol: None,
                    narrow_symbol: None,
                },
            );
        }

        let mut table = Self { currencies };

        for (code, digits) in table_entries(&parsed_toml, "digits")? {
            let digits = digits
                .as_integer()
                .and_then(|d| u8::try_from(d).ok())
                .filter(|d| *d <= 6)
                .ok_or_else(|| {
                    LocaleError::ParseError(format!("Invalid digits for {code}: {digits}"))
                })?;
            table.entry_mut(code)?.digits = digits;
        }

        for (code, symbol) in table_entries(&parsed_toml, "symbols")? {
            table.entry_mut(code)?.symbol = Some(string_value(code, symbol)?);
        }

        for (code, symbol) in table_entries(&parsed_toml, "narrow_symbols")? {
            table.entry_mut(code)?.narrow_symbol = Some(string_value(code, symbol)?);
        }

        Ok(table)
    }

    fn entry_mut(&mut self, code: &str) -> Result<&mut CurrencyInfo, LocaleError> {
        self.currencies
            .get_mut(code)
            .ok_or_else(|| LocaleError::ParseError(format!("Unlisted currency code: {code}")))
    }

    /// Look up a currency by its exact upper-case code
    pub fn get(&self, code: &str) -> Option<&CurrencyInfo> {
        self.currencies.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.currencies.contains_key(code)
    }

    /// All known codes, sorted
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.currencies.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

fn table_entries<'a>(
    root: &'a toml::Value,
    key: &str,
) -> Result<Vec<(&'a str, &'a toml::Value)>, LocaleError> {
    match root.get(key) {
        None => Ok(Vec::new()),
        Some(value) => value
            .as_table()
            .map(|t| t.iter().map(|(k, v)| (k.as_str(), v)).collect())
            .ok_or_else(|| LocaleError::ParseError(format!("{key} is not a table"))),
    }
}

fn string_value(code: &str, value: &toml::Value) -> Result<String, LocaleError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| LocaleError::ParseError(format!("Symbol for {code} is not a string")))
}

/// Three upper-case ASCII letters
fn is_iso_shaped(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Whether a code is in the embedded ISO-4217 set
pub fn is_known_currency(code: &str) -> bool {
    CurrencyTable::builtin().contains(code)
}
