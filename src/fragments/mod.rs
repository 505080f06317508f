//! Fragment extraction module
//!
//! This module reverse-engineers a formatted currency string into its semantic parts
//! and splits the number body into magnitude-tagged digit groups.

mod extractor;
mod granular;

pub use extractor::extract_from_formatted;
pub use granular::{decompose_granular, decompose_granular_with};

/// Characters that may sit between digits of a formatted number
///
/// Besides `.` and `,` this covers the apostrophes and no-break spaces that some
/// locales use for grouping (`1’234.50`, `1 234,56`).
pub fn is_number_separator(c: char) -> bool {
    matches!(c, '.' | ',' | '\'' | '’' | '\u{a0}' | '\u{202f}')
}

/// Whitespace and zero-width marks that never belong to a symbol's edges
pub(crate) fn is_padding(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '\u{200b}' | '\u{200e}' | '\u{200f}' | '\u{061c}' | '\u{2060}' | '\u{feff}'
        )
}
