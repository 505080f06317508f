use tracing::{error, trace};

use crate::error::{MoneyError, Result};
use crate::fragments::{is_number_separator, is_padding};
use crate::types::{FragmentSet, Sign};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    InSymbol,
    InNumber,
}

/// The raw buffers collected by one pass over a formatted string
#[derive(Debug, Default)]
struct Scan {
    before: String,
    number: String,
    after: String,
}

/// Walk the string once, splitting it around the first number run
///
/// A number run starts at an ASCII digit. `.` and `,` always stay in the run; the
/// apostrophes and no-break spaces only while the run goes on with another digit,
/// so the padding between number and symbol is left to the symbol side. Digits
/// after the first run are kept as symbol text.
fn scan(formatted: &str) -> Scan {
    let chars: Vec<char> = formatted.chars().collect();
    let mut result = Scan::default();
    let mut state = ScanState::InSymbol;
    let mut number_seen = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match state {
            ScanState::InSymbol => {
                if c.is_ascii_digit() && !number_seen {
                    trace!("Number run starts at char {}", i);
                    state = ScanState::InNumber;
                    number_seen = true;
                    continue;
                }
                if number_seen {
                    result.after.push(c);
                } else {
                    result.before.push(c);
                }
                i += 1;
            }
            ScanState::InNumber => {
                let keep = c.is_ascii_digit()
                    || matches!(c, '.' | ',')
                    || (is_number_separator(c) && continues_with_digit(&chars[i..]));
                if keep {
                    result.number.push(c);
                    i += 1;
                } else {
                    trace!("Number run ends at char {}", i);
                    state = ScanState::InSymbol;
                }
            }
        }
    }

    result
}

/// Whether a run of separators starting here is followed by a digit
fn continues_with_digit(rest: &[char]) -> bool {
    rest.iter()
        .find(|c| !is_number_separator(**c))
        .is_some_and(char::is_ascii_digit)
}

/// Strip the currency code and the padding around what is left
fn clean_symbol(raw: &str, currency: &str) -> String {
    let without_code = if currency.is_empty() {
        raw.to_string()
    } else {
        raw.replace(currency, "")
    };
    without_code.trim_matches(is_padding).to_string()
}

/// Split a formatted currency string into fragments
///
/// `currency` is copied into the fragment set unchanged and its text is removed from
/// the symbol, so a code-only display yields an empty symbol. The flag returned next
/// to the fragments is `true` when the number comes before the symbol.
///
/// # Errors
/// `UnparsableFormat` when the string holds no digit at all. A formatter never
/// produces such a string for a valid magnitude, so this points at a formatter bug.
///
/// # Examples
/// ```
/// use money_fragments::fragments::extract_from_formatted;
/// use money_fragments::types::Sign;
///
/// let (fragments, reverse) =
///     extract_from_formatted("1.234,56\u{a0}€", "EUR", Sign::Negative).unwrap();
/// assert_eq!(fragments.number, "1.234,56");
/// assert_eq!(fragments.symbol, "€");
/// assert_eq!(fragments.operator, "-");
/// assert!(reverse);
/// ```
pub fn extract_from_formatted(
    formatted: &str,
    currency: &str,
    sign: Sign,
) -> Result<(FragmentSet, bool)> {
    let scan = scan(formatted);
    if scan.number.is_empty() {
        error!("No digits in formatted currency string {:?}", formatted);
        return Err(MoneyError::UnparsableFormat(formatted.to_string()));
    }

    let leading = clean_symbol(&scan.before, currency);
    let trailing = clean_symbol(&scan.after, currency);
    let reverse = leading.is_empty() && !trailing.is_empty();

    let symbol = if leading.is_empty() || trailing.is_empty() {
        format!("{leading}{trailing}")
    } else {
        clean_symbol(&format!("{}{}", scan.before, scan.after), currency)
    };

    let fragments = FragmentSet {
        operator: sign.operator().to_string(),
        currency: currency.to_string(),
        symbol,
        number: scan.number,
    };

    Ok((fragments, reverse))
}
