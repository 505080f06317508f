//! Parsing module
//!
//! This module holds the winnow grammars used by the pipeline: CLDR-style currency
//! patterns (`¤#,##0.00`) for the built-in formatter, and base-10 numerals for the
//! value normalizer.
//! The main entry points are `parse_currency_pattern` and `parse_decimal`.

mod combinators;
mod format;
mod numeral;
mod sections;
mod tokens;

pub use format::parse_currency_pattern;
pub use numeral::parse_decimal;
