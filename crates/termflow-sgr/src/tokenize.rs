//! Splits styled text into plain runs and SGR escape sequences.
//!
//! Only the select-graphic-rendition form `ESC [ digits (; digits)* m` is
//! recognized, with either introducer from [`ESCAPES`]. Anything else that
//! starts with an introducer (cursor movement, truncated sequences, codes too
//! large to be real) stays in the text as literal characters.

use crate::registry::{StyleCode, ESCAPES};
use tracing::trace;

/// A piece of styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text, possibly containing non-SGR escape bytes.
    Text(&'a str),
    /// A complete SGR sequence: the raw slice and its parsed parameters.
    Sgr(&'a str, Vec<StyleCode>),
}

/// Iterator over the [`Token`]s of a string.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

/// Tokenizes `input` into text runs and SGR sequences.
///
/// ```rust
/// use termflow_sgr::{tokenize, Token};
///
/// let tokens: Vec<_> = tokenize("a\x1b[1;4mb").collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Text("a"),
///         Token::Sgr("\x1b[1;4m", vec![1, 4]),
///         Token::Text("b"),
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer::new(input)
}

fn is_introducer(c: char) -> bool {
    ESCAPES.contains(&c)
}

/// Parses an SGR sequence at the start of `s`, returning its byte length and
/// parameters.
fn parse_sgr(s: &str) -> Option<(usize, Vec<StyleCode>)> {
    let intro = s.chars().next().filter(|c| is_introducer(*c))?;
    let start = intro.len_utf8() + 1;
    if !s[intro.len_utf8()..].starts_with('[') {
        return None;
    }
    let end = start + s[start..].find(|c: char| !(c.is_ascii_digit() || c == ';'))?;
    if !s[end..].starts_with('m') {
        return None;
    }
    let codes = s[start..end]
        .split(';')
        .map(|param| {
            if param.is_empty() {
                None
            } else {
                param.parse::<StyleCode>().ok()
            }
        })
        .collect::<Option<Vec<_>>>()?;
    Some((end + 1, codes))
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let remaining = &self.input[self.pos..];
        let mut search = 0;

        loop {
            let Some(offset) = remaining[search..].find(is_introducer) else {
                // No more sequences - rest is text
                self.pos = self.input.len();
                return Some(Token::Text(remaining));
            };
            let at = search + offset;

            match parse_sgr(&remaining[at..]) {
                Some(_) if at > 0 => {
                    self.pos += at;
                    return Some(Token::Text(&remaining[..at]));
                }
                Some((len, codes)) => {
                    self.pos += len;
                    return Some(Token::Sgr(&remaining[..len], codes));
                }
                None => {
                    trace!(
                        offset = self.pos + at,
                        "escape introducer without SGR sequence passed through"
                    );
                    let intro_len = remaining[at..].chars().next().map_or(1, char::len_utf8);
                    search = at + intro_len;
                }
            }
        }
    }
}

/// Removes every SGR sequence from `input`.
///
/// ```rust
/// use termflow_sgr::strip;
///
/// assert_eq!(strip("\x1b[31mred\x1b[0m"), "red");
/// ```
pub fn strip(input: &str) -> String {
    tokenize(input)
        .filter_map(|token| match token {
            Token::Text(text) => Some(text),
            Token::Sgr(..) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<Token<'_>> {
        tokenize(input).collect()
    }

    #[test]
    fn plain_text_is_one_token() {
        assert_eq!(collect("hello world"), vec![Token::Text("hello world")]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn sequence_between_text() {
        assert_eq!(
            collect("a\x1b[1mb\x1b[0m"),
            vec![
                Token::Text("a"),
                Token::Sgr("\x1b[1m", vec![1]),
                Token::Text("b"),
                Token::Sgr("\x1b[0m", vec![0]),
            ]
        );
    }

    #[test]
    fn eight_bit_introducer() {
        assert_eq!(
            collect("\u{9b}[4mx"),
            vec![Token::Sgr("\u{9b}[4m", vec![4]), Token::Text("x")]
        );
    }

    #[test]
    fn adjacent_sequences() {
        assert_eq!(
            collect("\x1b[1m\x1b[3m"),
            vec![
                Token::Sgr("\x1b[1m", vec![1]),
                Token::Sgr("\x1b[3m", vec![3]),
            ]
        );
    }

    #[test]
    fn cursor_sequences_pass_through() {
        assert_eq!(collect("a\x1b[2Jb"), vec![Token::Text("a\x1b[2Jb")]);
    }

    #[test]
    fn malformed_sequences_pass_through() {
        assert_eq!(collect("\x1b[m"), vec![Token::Text("\x1b[m")]);
        assert_eq!(collect("\x1b[1;m"), vec![Token::Text("\x1b[1;m")]);
        assert_eq!(collect("\x1b[12"), vec![Token::Text("\x1b[12")]);
        assert_eq!(collect("\x1b"), vec![Token::Text("\x1b")]);
        assert_eq!(collect("\x1b[99999m"), vec![Token::Text("\x1b[99999m")]);
    }

    #[test]
    fn literal_escape_before_real_sequence() {
        assert_eq!(
            collect("\x1bx\x1b[1my"),
            vec![
                Token::Text("\x1bx"),
                Token::Sgr("\x1b[1m", vec![1]),
                Token::Text("y"),
            ]
        );
    }

    #[test]
    fn strip_removes_only_sgr() {
        assert_eq!(strip("\x1b[1;31mhi\x1b[0m \x1b[2Jthere"), "hi \x1b[2Jthere");
    }
}
