//! Money amounts broken into display fragments
//!
//! An amount is normalized, formatted for a locale and a currency, and the
//! formatted string is split back into operator, currency, symbol and number.
//! The number can be decomposed further into digit groups tagged with their
//! magnitude.
//!
//! ```
//! use money_fragments::{TokenType, decompose_granular, extract_fragments};
//!
//! let (fragments, reverse) = extract_fragments(Some("pt-BR"), "BRL", -100).unwrap();
//! assert_eq!(fragments.operator, "-");
//! assert_eq!(fragments.symbol, "R$");
//! assert!(!reverse);
//!
//! let tokens = decompose_granular("1,234,567.89");
//! assert_eq!(tokens[0].text, "1");
//! assert_eq!(tokens.last().unwrap().token_type, TokenType::Decimal);
//! ```

pub mod config;
pub mod currency;
pub mod error;
pub mod formatter;
pub mod fragments;
pub mod locale;
pub mod parser;
pub mod types;

mod money;
mod value;

// 导出主要 API
pub use config::MoneyConfig;
pub use error::{MoneyError, Result};
pub use fragments::{decompose_granular, extract_from_formatted};
pub use money::{Money, MoneyParts, extract_fragments};
pub use types::*;
pub use value::{RawValue, normalize_value};
