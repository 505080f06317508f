use winnow::combinator::repeat;
use winnow::{ModalResult, Parser};

use crate::parser::combinators::parse_single_token;
use crate::types::{Affix, CurrencyPattern, PatternToken};

/// Parse the tokens of one pattern section, up to `;` or the end of input
pub fn parse_section_tokens(input: &mut &str) -> ModalResult<Vec<PatternToken>> {
    repeat(0.., parse_single_token).parse_next(input)
}

/// Assemble the tokens of a section into a `CurrencyPattern`
///
/// Tokens before the first numeric token become the prefix, tokens after the last one
/// the suffix. The numeric body in between must be contiguous.
pub fn build_pattern(tokens: &[PatternToken]) -> Result<CurrencyPattern, String> {
    let first_numeric = tokens
        .iter()
        .position(PatternToken::is_numeric)
        .ok_or_else(|| "Pattern has no digit placeholders".to_string())?;
    let last_numeric = tokens
        .iter()
        .rposition(PatternToken::is_numeric)
        .unwrap_or(first_numeric);

    let body = &tokens[first_numeric..=last_numeric];
    if let Some(stray) = body.iter().find(|t| !t.is_numeric()) {
        return Err(format!("Unexpected token inside the number body: {stray:?}"));
    }

    let prefix = collect_affixes(&tokens[..first_numeric]);
    let suffix = collect_affixes(&tokens[last_numeric + 1..]);
    if prefix.contains(&Affix::Currency) && suffix.contains(&Affix::Currency) {
        return Err("Currency sign appears on both sides of the number".to_string());
    }

    let integer_part: Vec<&PatternToken> = body
        .iter()
        .take_while(|t| !matches!(t, PatternToken::DecimalPoint))
        .collect();

    let min_integer_digits = integer_part
        .iter()
        .filter(|t| matches!(t, PatternToken::DigitOrZero))
        .count();

    // Digit counts between grouping separators, right to left
    let mut group_sizes = Vec::new();
    let mut digits = 0u8;
    let mut seen_separator = false;
    for token in integer_part.iter().rev() {
        match token {
            PatternToken::GroupingSeparator => {
                group_sizes.push(digits);
                digits = 0;
                seen_separator = true;
            }
            _ => digits = digits.saturating_add(1),
        }
    }

    let (primary_grouping, secondary_grouping) = if seen_separator {
        let primary = group_sizes.first().copied().filter(|size| *size > 0);
        let secondary = group_sizes
            .get(1)
            .copied()
            .filter(|size| *size > 0)
            .or(primary);
        (primary, secondary)
    } else {
        (None, None)
    };

    Ok(CurrencyPattern {
        prefix,
        suffix,
        primary_grouping,
        secondary_grouping,
        min_integer_digits: u8::try_from(min_integer_digits).unwrap_or(u8::MAX),
    })
}

/// Merge adjacent literal tokens into affix strings
fn collect_affixes(tokens: &[PatternToken]) -> Vec<Affix> {
    let mut affixes = Vec::new();
    let mut literal = String::new();

    for token in tokens {
        match token {
            PatternToken::CurrencySign => {
                if !literal.is_empty() {
                    affixes.push(Affix::Literal(std::mem::take(&mut literal)));
                }
                affixes.push(Affix::Currency);
            }
            PatternToken::LiteralChar(c) => literal.push(*c),
            PatternToken::QuotedText(text) => literal.push_str(text),
            _ => {}
        }
    }

    if !literal.is_empty() {
        affixes.push(Affix::Literal(literal));
    }
    affixes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pattern: &str) -> Vec<PatternToken> {
        let mut input = pattern;
        parse_section_tokens.parse_next(&mut input).unwrap()
    }

    #[test]
    fn test_indian_grouping() {
        let pattern = build_pattern(&tokens("¤#,##,##0.00")).unwrap();
        assert_eq!(pattern.primary_grouping, Some(3));
        assert_eq!(pattern.secondary_grouping, Some(2));
        assert_eq!(pattern.prefix, vec![Affix::Currency]);
    }

    #[test]
    fn test_suffix_with_literal_space() {
        let pattern = build_pattern(&tokens("#,##0.00\u{a0}¤")).unwrap();
        assert_eq!(
            pattern.suffix,
            vec![Affix::Literal("\u{a0}".to_string()), Affix::Currency]
        );
        assert!(pattern.symbol_after_number());
    }

    #[test]
    fn test_no_grouping() {
        let pattern = build_pattern(&tokens("¤0.00")).unwrap();
        assert_eq!(pattern.primary_grouping, None);
        assert_eq!(pattern.min_integer_digits, 1);
    }

    #[test]
    fn test_rejects_patterns_without_digits() {
        assert!(build_pattern(&tokens("¤")).is_err());
    }
}
