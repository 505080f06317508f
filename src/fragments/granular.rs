use crate::fragments::is_number_separator;
use crate::types::{GranularToken, MagnitudeName, TokenType};

/// A digit group or a separator run of the number fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Piece<'s> {
    text: &'s str,
    is_separator: bool,
}

/// Split a number on every separator run, keeping the runs
fn split_pieces(number: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, c) in number.char_indices() {
        let is_separator = is_number_separator(c);
        match current {
            Some(kind) if kind != is_separator => {
                pieces.push(Piece {
                    text: &number[start..idx],
                    is_separator: kind,
                });
                start = idx;
            }
            _ => {}
        }
        current = Some(is_separator);
    }

    if let Some(kind) = current {
        pieces.push(Piece {
            text: &number[start..],
            is_separator: kind,
        });
    }
    pieces
}

/// Guess whether the last separator run is a decimal separator
///
/// It is when it is a single character and either differs from the other separators
/// (`1,234.56`) or is the only separator and the trailing group is not three digits
/// long (`12.5`). `1,234` is read as a grouped integer.
fn infer_decimal(pieces: &[Piece<'_>]) -> bool {
    let Some(trailing) = pieces.last().filter(|p| !p.is_separator) else {
        return false;
    };
    let mut separators = pieces.iter().filter(|p| p.is_separator).rev();
    let Some(last) = separators.next() else {
        return false;
    };
    if last.text.chars().count() != 1 {
        return false;
    }

    let others: Vec<&Piece<'_>> = separators.collect();
    if others.is_empty() {
        trailing.text.chars().count() != 3
    } else {
        others.iter().any(|p| p.text != last.text)
    }
}

/// Classify pieces, rightmost first, and return them in reading order
fn classify(pieces: &[Piece<'_>], has_decimal: bool) -> Vec<GranularToken> {
    let mut tokens = Vec::with_capacity(pieces.len());
    let mut decimal_pending = has_decimal;
    let mut separator_pending = has_decimal;
    let mut integer_groups = 0;

    for piece in pieces.iter().rev() {
        let token = if piece.is_separator {
            if separator_pending {
                separator_pending = false;
                GranularToken::new(piece.text, TokenType::SeparatorDecimal)
            } else {
                GranularToken::new(piece.text, TokenType::SeparatorInteger)
            }
        } else if decimal_pending {
            decimal_pending = false;
            GranularToken::new(piece.text, TokenType::Decimal)
        } else {
            integer_groups += 1;
            GranularToken::integer(
                piece.text,
                MagnitudeName::from_group_position(integer_groups),
            )
        };
        tokens.push(token);
    }

    tokens.reverse();
    tokens
}

/// Split a number fragment into magnitude-tagged digit groups and separators
///
/// Whether the number has a fractional part is inferred from its separators. When
/// it has none, the rightmost group is the `hundred` integer group rather than a
/// decimal. Magnitude names count groups from the right and assume three-digit
/// grouping. Concatenating the token texts gives back `number` exactly.
///
/// # Examples
/// ```
/// use money_fragments::decompose_granular;
/// use money_fragments::types::{MagnitudeName, TokenType};
///
/// let tokens = decompose_granular("1,234,567.89");
/// assert_eq!(tokens.len(), 7);
/// assert_eq!(tokens[0].subtype, Some(MagnitudeName::Million));
/// assert_eq!(tokens[6].token_type, TokenType::Decimal);
/// ```
pub fn decompose_granular(number: &str) -> Vec<GranularToken> {
    let pieces = split_pieces(number);
    let has_decimal = infer_decimal(&pieces);
    classify(&pieces, has_decimal)
}

/// Split a number fragment using a known decimal separator
///
/// `None` means the number has no fractional part, as for zero-digit currencies.
/// With a separator, only a trailing single occurrence of it counts as decimal.
pub fn decompose_granular_with(
    number: &str,
    decimal_separator: Option<char>,
) -> Vec<GranularToken> {
    let pieces = split_pieces(number);
    let has_decimal = decimal_separator.is_some_and(|separator| {
        let mut from_right = pieces.iter().rev();
        let digits_last = from_right.next().is_some_and(|p| !p.is_separator);
        let mut buf = [0u8; 4];
        let separator: &str = separator.encode_utf8(&mut buf);
        digits_last && from_right.next().is_some_and(|p| p.text == separator)
    });
    classify(&pieces, has_decimal)
}
