use winnow::combinator::alt;
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::PatternToken;

/// Parse a single token from a currency pattern
pub fn parse_single_token(input: &mut &str) -> ModalResult<PatternToken> {
    let placeholders = alt((
        parse_currency_sign,
        parse_digit_or_zero,
        parse_digit_if_needed,
        parse_grouping_separator,
        parse_decimal_point,
    ));

    let literals = alt((
        parse_escaped_quote,
        parse_quoted_text,
        parse_literal_passthrough,
    ));

    alt((placeholders, literals)).parse_next(input)
}
