//! Type definitions for the money pipeline
//!
//! This module defines the data handed between the pipeline stages: the normalized
//! value, the extracted fragments, granular tokens, and the locale data that drives
//! the built-in currency formatter.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of a monetary value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Sign {
    /// Zero or greater
    #[default]
    Positive,
    /// Strictly less than zero
    Negative,
}

impl Sign {
    /// The operator fragment for this sign, `"+"` or `"-"`
    pub fn operator(self) -> &'static str {
        match self {
            Sign::Positive => "+",
            Sign::Negative => "-",
        }
    }

    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

/// A normalized monetary value: sign plus absolute magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyValue {
    /// Sign of the raw input
    pub sign: Sign,
    /// Absolute value, never negative
    pub magnitude: Decimal,
}

impl MoneyValue {
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }
}

/// The semantic pieces of a formatted money string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FragmentSet {
    /// `"+"` or `"-"`
    pub operator: String,
    /// The ISO-4217 code supplied by the caller
    pub currency: String,
    /// Everything in the formatted string that is not the number or the code, trimmed
    pub symbol: String,
    /// The digits and separators of the formatted amount
    pub number: String,
}

impl FragmentSet {
    pub fn is_negative(&self) -> bool {
        self.operator == Sign::Negative.operator()
    }

    /// Concatenate the fragments in layout order
    ///
    /// The operator is only emitted for negative values. Symbol and number are joined
    /// without whitespace, so the result matches the formatted string up to whitespace
    /// and the currency code.
    ///
    /// # Examples
    /// ```
    /// use money_fragments::types::FragmentSet;
    ///
    /// let fragments = FragmentSet {
    ///     operator: "-".to_string(),
    ///     currency: "EUR".to_string(),
    ///     symbol: "€".to_string(),
    ///     number: "1.234,56".to_string(),
    /// };
    /// assert_eq!(fragments.reassemble(true), "-1.234,56€");
    /// ```
    pub fn reassemble(&self, reverse: bool) -> String {
        let mut result = String::with_capacity(
            self.operator.len() + self.symbol.len() + self.number.len(),
        );
        if self.is_negative() {
            result.push_str(&self.operator);
        }
        if reverse {
            result.push_str(&self.number);
            result.push_str(&self.symbol);
        } else {
            result.push_str(&self.symbol);
            result.push_str(&self.number);
        }
        result
    }
}

/// Kind of a granular token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TokenType {
    /// Fractional digits
    Decimal,
    /// Separator between the integer and fractional digits
    SeparatorDecimal,
    /// A group of integer digits
    Integer,
    /// Separator between two integer groups
    SeparatorInteger,
}

impl TokenType {
    /// Tag string for presentation layers, e.g. `"separator-decimal"`
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Decimal => "decimal",
            TokenType::SeparatorDecimal => "separator-decimal",
            TokenType::Integer => "integer",
            TokenType::SeparatorInteger => "separator-integer",
        }
    }

    pub fn is_separator(self) -> bool {
        matches!(self, TokenType::SeparatorDecimal | TokenType::SeparatorInteger)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Magnitude label of an integer digit group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MagnitudeName {
    Hundred,
    Thousand,
    Million,
    Billion,
    Trillion,
    Unknown,
}

impl MagnitudeName {
    /// Label for the n-th integer group counted from the right, starting at 1
    pub fn from_group_position(position: usize) -> Self {
        match position {
            1 => MagnitudeName::Hundred,
            2 => MagnitudeName::Thousand,
            3 => MagnitudeName::Million,
            4 => MagnitudeName::Billion,
            5 => MagnitudeName::Trillion,
            _ => MagnitudeName::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MagnitudeName::Hundred => "hundred",
            MagnitudeName::Thousand => "thousand",
            MagnitudeName::Million => "million",
            MagnitudeName::Billion => "billion",
            MagnitudeName::Trillion => "trillion",
            MagnitudeName::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MagnitudeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One digit group or separator run of the number fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GranularToken {
    /// The exact text of this piece
    pub text: String,
    /// Classification of the piece
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub token_type: TokenType,
    /// Magnitude label, only present for integer groups
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub subtype: Option<MagnitudeName>,
}

impl GranularToken {
    pub fn new(text: impl Into<String>, token_type: TokenType) -> Self {
        Self {
            text: text.into(),
            token_type,
            subtype: None,
        }
    }

    pub fn integer(text: impl Into<String>, subtype: MagnitudeName) -> Self {
        Self {
            text: text.into(),
            token_type: TokenType::Integer,
            subtype: Some(subtype),
        }
    }
}

/// How the currency is shown in the formatted string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum CurrencyDisplay {
    /// Locale-specific symbol, e.g. `US$` in `en-CA`
    #[default]
    Symbol,
    /// Shortest symbol, e.g. `$` for any dollar
    NarrowSymbol,
    /// The ISO code itself
    Code,
}

impl FromStr for CurrencyDisplay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "symbol" => Ok(CurrencyDisplay::Symbol),
            "narrow-symbol" | "narrowsymbol" => Ok(CurrencyDisplay::NarrowSymbol),
            "code" => Ok(CurrencyDisplay::Code),
            other => Err(format!("Unknown currency display: {other}")),
        }
    }
}

/// A single token of a currency pattern such as `¤#,##0.00`
#[derive(Debug, Clone, PartialEq)]
pub enum PatternToken {
    /// Currency sign placeholder (¤)
    CurrencySign,
    /// Digit placeholder (0) that always shows a digit
    DigitOrZero,
    /// Digit placeholder (#)
    DigitIfNeeded,
    /// Grouping separator position (,)
    GroupingSeparator,
    /// Decimal separator position (.)
    DecimalPoint,
    /// Literal character copied to the output
    LiteralChar(char),
    /// Quoted text, like 'text'
    QuotedText(String),
}

impl PatternToken {
    /// Checks if the token belongs to the number body
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PatternToken::DigitOrZero
                | PatternToken::DigitIfNeeded
                | PatternToken::GroupingSeparator
                | PatternToken::DecimalPoint
        )
    }
}

/// Text placed before or after the number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affix {
    /// Where the currency symbol (or code) goes
    Currency,
    /// Fixed text
    Literal(String),
}

/// A parsed currency pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPattern {
    /// Affixes before the number
    pub prefix: Vec<Affix>,
    /// Affixes after the number
    pub suffix: Vec<Affix>,
    /// Size of the rightmost integer group
    pub primary_grouping: Option<u8>,
    /// Size of the remaining integer groups
    pub secondary_grouping: Option<u8>,
    /// Minimum number of integer digits (count of `0` before the decimal point)
    pub min_integer_digits: u8,
}

impl Default for CurrencyPattern {
    /// The `¤#,##0.00` layout
    fn default() -> Self {
        Self {
            prefix: vec![Affix::Currency],
            suffix: Vec::new(),
            primary_grouping: Some(3),
            secondary_grouping: Some(3),
            min_integer_digits: 1,
        }
    }
}

impl CurrencyPattern {
    /// Whether the currency sign sits in the suffix
    pub fn symbol_after_number(&self) -> bool {
        self.suffix.contains(&Affix::Currency) && !self.prefix.contains(&Affix::Currency)
    }
}

/// Locale-specific number settings used by the built-in formatter
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Decimal separator
    pub decimal_separator: char,
    /// Grouping separator
    pub group_separator: char,
    /// Currency layout
    pub currency_pattern: CurrencyPattern,
    /// Minimum digits in the leading group before grouping applies
    pub min_grouping: u8,
    /// Per-locale currency symbols, keyed by ISO code
    pub symbols: HashMap<String, String>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            currency_pattern: CurrencyPattern::default(),
            min_grouping: 1,
            symbols: HashMap::new(),
        }
    }
}

impl LocaleSettings {
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    pub fn with_group_separator(mut self, separator: char) -> Self {
        self.group_separator = separator;
        self
    }

    pub fn with_pattern(mut self, pattern: CurrencyPattern) -> Self {
        self.currency_pattern = pattern;
        self
    }

    pub fn with_min_grouping(mut self, min_grouping: u8) -> Self {
        self.min_grouping = min_grouping;
        self
    }

    /// Override the symbol shown for one currency
    pub fn with_symbol(mut self, code: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.symbols.insert(code.into(), symbol.into());
        self
    }

    /// Symbol override for a currency, if this locale has one
    pub fn symbol_for(&self, code: &str) -> Option<&str> {
        self.symbols.get(code).map(String::as_str)
    }
}
