use winnow::Parser;
use winnow::error::ErrMode;
use winnow::token::literal;

use crate::parser::sections::{build_pattern, parse_section_tokens};
use crate::types::CurrencyPattern;

/// Parse a CLDR-style currency pattern
///
/// Accepts an optional negative subpattern after `;`. The pipeline formats magnitudes
/// only, so the negative subpattern is validated and then dropped.
///
/// # Arguments
/// * `input_str` - The pattern string, e.g. `¤#,##0.00` or `#,##0.00 ¤`
///
/// # Returns
/// * `Result<CurrencyPattern, String>` - The parsed pattern, or an error message
///
/// # Examples
/// ```
/// use money_fragments::parser::parse_currency_pattern;
///
/// let pattern = parse_currency_pattern("#,##0.00 ¤").unwrap();
/// assert!(pattern.symbol_after_number());
/// ```
pub fn parse_currency_pattern(input_str: &str) -> Result<CurrencyPattern, String> {
    let mut input = input_str;

    let make_err_msg = |e, remaining: &str| -> String {
        format!("Parse error: {e:?} at remaining input '{remaining}'")
    };

    let positive_tokens = parse_section_tokens
        .parse_next(&mut input)
        .map_err(|e| make_err_msg(e, input))?;
    let positive = build_pattern(&positive_tokens)?;

    if input.starts_with(';') {
        literal(";")
            .parse_next(&mut input)
            .map_err(ErrMode::Backtrack)
            .map_err(|e| make_err_msg(e, input))?;
        let negative_tokens = parse_section_tokens
            .parse_next(&mut input)
            .map_err(|e| make_err_msg(e, input))?;
        build_pattern(&negative_tokens)?;
    }

    if !input.is_empty() {
        return Err(format!(
            "Too many sections or trailing characters: '{input}'"
        ));
    }

    Ok(positive)
}
