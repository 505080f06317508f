use winnow::combinator::{delimited, repeat};
use winnow::error::ErrMode;
use winnow::token::{literal, none_of};
use winnow::{ModalResult, Parser};

use crate::types::PatternToken;

// Placeholder parsers
pub fn parse_currency_sign(input: &mut &str) -> ModalResult<PatternToken> {
    literal("¤")
        .value(PatternToken::CurrencySign)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_or_zero(input: &mut &str) -> ModalResult<PatternToken> {
    literal("0")
        .value(PatternToken::DigitOrZero)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_if_needed(input: &mut &str) -> ModalResult<PatternToken> {
    literal("#")
        .value(PatternToken::DigitIfNeeded)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_grouping_separator(input: &mut &str) -> ModalResult<PatternToken> {
    literal(",")
        .value(PatternToken::GroupingSeparator)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_decimal_point(input: &mut &str) -> ModalResult<PatternToken> {
    literal(".")
        .value(PatternToken::DecimalPoint)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Literal parsers
pub fn parse_escaped_quote(input: &mut &str) -> ModalResult<PatternToken> {
    literal("''")
        .value(PatternToken::LiteralChar('\''))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_quoted_text(input: &mut &str) -> ModalResult<PatternToken> {
    let content_parser = repeat(1.., none_of(['\'']))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>());

    delimited('\'', content_parser, '\'')
        .map(PatternToken::QuotedText)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Anything else is copied verbatim, except the section separator
pub fn parse_literal_passthrough(input: &mut &str) -> ModalResult<PatternToken> {
    none_of([';', '\''])
        .map(PatternToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}
