//! Display width measurement.
//!
//! Widths come from `unicode-width` (East Asian wide characters count two
//! columns, combining marks zero), corrected by [`WIDTH_OVERRIDES`] for
//! characters terminals render differently from what the tables say. SGR
//! escape sequences have no width.

use termflow_sgr::{tokenize, Token};
use unicode_width::UnicodeWidthChar;

/// Characters whose rendered width differs from their Unicode width.
pub const WIDTH_OVERRIDES: &[(char, usize)] = &[('\u{200B}', 0)];

/// Width of a single character in terminal columns.
///
/// Control characters have no width.
pub fn char_width(c: char) -> usize {
    WIDTH_OVERRIDES
        .iter()
        .find(|(overridden, _)| *overridden == c)
        .map(|(_, width)| *width)
        .unwrap_or_else(|| c.width().unwrap_or(0))
}

/// Width of text that contains no escape sequences.
pub fn plain_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Rendered width of `text` in terminal columns, ignoring SGR sequences.
///
/// # Example
///
/// ```rust
/// use termflow::width;
///
/// assert_eq!(width("hello"), 5);
/// assert_eq!(width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(width("日本"), 4);
/// assert_eq!(width("a\u{200B}b"), 2);
/// ```
pub fn width(text: &str) -> usize {
    tokenize(text)
        .map(|token| match token {
            Token::Text(text) => plain_width(text),
            Token::Sgr(..) => 0,
        })
        .sum()
}

/// Splits `text` after the longest prefix that fits in `max` columns.
///
/// The prefix always holds at least one character when `text` is not empty,
/// so a split always makes progress even if the first character alone is
/// wider than `max`.
pub fn split_at_width(text: &str, max: usize) -> (&str, &str) {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        let w = char_width(c);
        if i > 0 && used + w > max {
            return text.split_at(i);
        }
        used += w;
    }
    (text, "")
}
