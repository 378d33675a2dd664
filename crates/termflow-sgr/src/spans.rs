//! Separation of styled text into plain text plus style spans, and the
//! inverse re-encoding.

use crate::algebra::{absolute, adjust};
use crate::registry::{StyleCode, ESCAPES};
use crate::tokenize::{tokenize, Token};

/// The sequence that returns the terminal to its default rendition.
pub const RESET_SEQUENCE: &str = "\x1b[0m";

/// An active style set taking effect at a character offset of the plain
/// text.
///
/// `codes` is the complete cumulative set at `index`, not the delta that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpan {
    /// Offset in characters (not bytes) into the plain text.
    pub index: usize,
    /// Active codes from `index` onwards.
    pub codes: Vec<StyleCode>,
}

impl FormatSpan {
    pub fn new(index: usize, codes: Vec<StyleCode>) -> Self {
        Self { index, codes }
    }
}

/// Plain text together with the spans that style it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Separated {
    /// The input with every SGR sequence removed.
    pub value: String,
    /// Spans ordered by strictly increasing `index`.
    pub format: Vec<FormatSpan>,
}

impl Separated {
    /// True if the input carried no SGR sequences at all.
    pub fn is_plain(&self) -> bool {
        self.format.is_empty()
    }
}

/// Strips SGR sequences from `raw` and records where each one changed the
/// active style.
///
/// Sequences with no text between them collapse into a single span.
///
/// ```rust
/// use termflow_sgr::{separate, FormatSpan};
///
/// let separated = separate("1\x1b[1m 2\x1b[4m 3\x1b[0;3;4m 4\x1b[0m");
/// assert_eq!(separated.value, "1 2 3 4");
/// assert_eq!(
///     separated.format,
///     vec![
///         FormatSpan::new(1, vec![1]),
///         FormatSpan::new(3, vec![1, 4]),
///         FormatSpan::new(5, vec![0, 3, 4]),
///         FormatSpan::new(7, vec![0]),
///     ]
/// );
/// ```
pub fn separate(raw: &str) -> Separated {
    let mut separated = Separated::default();
    let mut chars = 0;
    let mut active: Vec<StyleCode> = Vec::new();

    for token in tokenize(raw) {
        match token {
            Token::Text(text) => {
                separated.value.push_str(text);
                chars += text.chars().count();
            }
            Token::Sgr(_, codes) => {
                active = adjust(&active, &codes);
                match separated.format.last_mut() {
                    Some(last) if last.index == chars => last.codes = active.clone(),
                    _ => separated.format.push(FormatSpan::new(chars, active.clone())),
                }
            }
        }
    }

    separated
}

/// Renders an active set as one escape sequence that reproduces it from any
/// prior state.
///
/// ```rust
/// use termflow_sgr::encode;
///
/// assert_eq!(encode(&[1, 31]), "\x1b[0;1;31m");
/// assert_eq!(encode(&[0]), "\x1b[0m");
/// ```
pub fn encode(codes: &[StyleCode]) -> String {
    let params = absolute(codes)
        .iter()
        .map(|code| code.to_string())
        .collect::<Vec<_>>()
        .join(";");
    format!("{}[{}m", ESCAPES[0], params)
}

/// Rebuilds styled text from plain text and spans.
///
/// Spans past the end of `value` are emitted at the end. The output is
/// visually equivalent to the text `separate` was given, not necessarily
/// byte-identical.
pub fn inject(value: &str, format: &[FormatSpan]) -> String {
    let mut out = String::with_capacity(value.len() + format.len() * 8);
    let mut spans = format.iter().peekable();

    for (i, c) in value.chars().enumerate() {
        while let Some(span) = spans.next_if(|span| span.index <= i) {
            out.push_str(&encode(&span.codes));
        }
        out.push(c);
    }
    for span in spans {
        out.push_str(&encode(&span.codes));
    }

    out
}
