//! Error types for the money pipeline

use thiserror::Error;

use crate::locale::LocaleError;

/// Error type for pipeline operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    /// The raw value is not a finite base-10 numeral
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// The currency code is not an ISO-4217 alphabetic code
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// The locale cannot be resolved by the formatter
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// The formatted string contains no digits
    #[error("Formatted string contains no digits: {0:?}")]
    UnparsableFormat(String),

    /// Locale data could not be loaded
    #[error("Locale data error: {0}")]
    Locale(#[from] LocaleError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, MoneyError>;
