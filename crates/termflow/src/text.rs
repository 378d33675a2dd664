//! Text helpers used by the wrapper: normalisation, word splitting,
//! trimming, justification and filler.
//!
//! Everything here accepts styled text. SGR sequences are kept in place and
//! never count as spaces or as width.

use crate::config::Trim;
use crate::width::{char_width, plain_width, width};
use termflow_sgr::{tokenize, Token};

/// Replacements applied to every text before wrapping: Windows line endings
/// become plain newlines and tabs become two spaces.
pub const DEFAULT_TRANSFORMS: &[(&str, &str)] = &[("\r\n", "\n"), ("\t", "  ")];

/// Characters a line may break after. Each stays at the end of its word.
pub const BREAKS: &[char] = &[' ', '-', '\n', '\u{2007}', '\u{2060}'];

/// Applies [`DEFAULT_TRANSFORMS`] and then `extra`, replacing every
/// occurrence of each pattern in order.
///
/// ```rust
/// use termflow::transform;
///
/// assert_eq!(transform("a\r\n\tb", &[]), "a\n  b");
/// assert_eq!(transform("x -> y", &[("->".into(), "→".into())]), "x → y");
/// ```
pub fn transform(text: &str, extra: &[(String, String)]) -> String {
    let mut text = text.to_string();
    let defaults = DEFAULT_TRANSFORMS.iter().map(|&(from, to)| (from.to_string(), to.to_string()));
    for (from, to) in defaults.chain(extra.iter().cloned()) {
        if !from.is_empty() {
            text = text.replace(&from, &to);
        }
    }
    text
}

/// Splits text into words, each keeping the break character that ends it.
///
/// ```rust
/// use termflow::words;
///
/// assert_eq!(words("This is a test"), vec!["This ", "is ", "a ", "test"]);
/// assert_eq!(words("crazy-good"), vec!["crazy-", "good"]);
/// ```
pub fn words(text: &str) -> Vec<&str> {
    text.split_inclusive(BREAKS).collect()
}

/// A character or escape sequence of styled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Char(char),
    Escape(&'a str),
}

impl Piece<'_> {
    fn is_space(&self) -> bool {
        matches!(self, Piece::Char(' '))
    }
}

fn pieces(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::with_capacity(text.len());
    for token in tokenize(text) {
        match token {
            Token::Text(text) => pieces.extend(text.chars().map(Piece::Char)),
            Token::Sgr(raw, _) => pieces.push(Piece::Escape(raw)),
        }
    }
    pieces
}

fn assemble(pieces: &[Piece<'_>]) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Char(c) => out.push(*c),
            Piece::Escape(raw) => out.push_str(raw),
        }
    }
    out
}

/// Removes up to `start` leading and `end` trailing spaces.
///
/// Only plain spaces (U+0020) are removed. Escape sequences among them stay
/// where they are.
///
/// ```rust
/// use termflow::{trim, Trim};
///
/// assert_eq!(trim("   foo   ", Trim::Count(1), Trim::None), "  foo   ");
/// assert_eq!(trim(" \x1b[1m  foo   ", Trim::All, Trim::All), "\x1b[1mfoo");
/// ```
pub fn trim(text: &str, start: Trim, end: Trim) -> String {
    let mut pieces = pieces(text);
    let mut keep = vec![true; pieces.len()];

    let mut budget = start.limit();
    for (i, piece) in pieces.iter().enumerate() {
        match piece {
            Piece::Escape(_) => continue,
            _ if budget > 0 && piece.is_space() => {
                keep[i] = false;
                budget -= 1;
            }
            _ => break,
        }
    }

    let mut budget = end.limit();
    for (i, piece) in pieces.iter().enumerate().rev() {
        match piece {
            Piece::Escape(_) => continue,
            _ if !keep[i] => break,
            _ if budget > 0 && piece.is_space() => {
                keep[i] = false;
                budget -= 1;
            }
            _ => break,
        }
    }

    let mut flags = keep.into_iter();
    pieces.retain(|_| flags.next().unwrap_or(true));
    assemble(&pieces)
}

/// Widens the gaps between words so `text` reaches `target` columns.
///
/// Extra spaces are spread evenly, leftovers going to the leftmost gaps. No
/// gap grows beyond `max_gap` spaces, so the result may stay short of
/// `target`. Leading and trailing spaces are not gaps and are left alone.
///
/// ```rust
/// use termflow::justify;
///
/// assert_eq!(justify("This is a string.", 20, 3), "This  is  a  string.");
/// assert_eq!(justify("This is a string.", 18, 3), "This  is a string.");
/// assert_eq!(justify("a b", 10, 3), "a   b");
/// ```
pub fn justify(text: &str, target: usize, max_gap: usize) -> String {
    let current = width(text);
    if current >= target {
        return text.to_string();
    }

    let mut pieces = pieces(text);
    let is_word_char = |p: &Piece<'_>| matches!(p, Piece::Char(c) if *c != ' ');
    let (Some(first), Some(last)) = (
        pieces.iter().position(is_word_char),
        pieces.iter().rposition(is_word_char),
    ) else {
        return text.to_string();
    };

    // (length, index of the last space) for every run of spaces between words
    let mut gaps: Vec<(usize, usize)> = Vec::new();
    let mut run: Option<(usize, usize)> = None;
    for (i, piece) in pieces.iter().enumerate().take(last).skip(first) {
        match piece {
            Piece::Escape(_) => {}
            p if p.is_space() => {
                let len = run.map_or(0, |(len, _)| len);
                run = Some((len + 1, i));
            }
            _ => {
                if let Some(gap) = run.take() {
                    gaps.push(gap);
                }
            }
        }
    }
    if let Some(gap) = run {
        gaps.push(gap);
    }
    if gaps.is_empty() {
        return text.to_string();
    }

    let extra = target - current;
    let base = extra / gaps.len();
    let remainder = extra % gaps.len();

    // Insert right to left so earlier indices stay valid.
    for (n, (len, at)) in gaps.iter().enumerate().rev() {
        let wanted = base + usize::from(n < remainder);
        let added = wanted.min(max_gap.saturating_sub(*len));
        for _ in 0..added {
            pieces.insert(at + 1, Piece::Char(' '));
        }
    }

    assemble(&pieces)
}

/// Repeats `pattern` to exactly `count` columns.
///
/// An empty or zero-width pattern produces nothing. A pattern containing
/// wide characters may end one column short.
///
/// ```rust
/// use termflow::filler;
///
/// assert_eq!(filler("abc", 2), "ab");
/// assert_eq!(filler(".", 4), "....");
/// assert_eq!(filler("", 4), "");
/// ```
pub fn filler(pattern: &str, count: usize) -> String {
    let unit = plain_width(pattern);
    if unit == 0 || count == 0 {
        return String::new();
    }

    let mut out = pattern.repeat(count.div_ceil(unit));
    let mut used = plain_width(&out);
    while used > count {
        match out.pop() {
            Some(c) => used -= char_width(c),
            None => break,
        }
    }
    out
}
