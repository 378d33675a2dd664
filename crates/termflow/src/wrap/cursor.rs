//! Re-anchoring of style spans onto rebuilt lines.
//!
//! The wrapper walks the plain text once, in order, but drops some of its
//! characters (the space at a soft break, stripped newlines) and inserts
//! others (hard-break markers, indents). [`SpanCursor`] tracks the source
//! position of every character it is handed, so spans land on the same
//! characters they styled in the input no matter how the line around them
//! was rebuilt.

use termflow_sgr::{absolute, encode, FormatSpan, StyleCode, RESET, RESET_SEQUENCE};

pub(crate) struct SpanCursor<'a> {
    spans: &'a [FormatSpan],
    next: usize,
    /// Source position, in characters, of the next character.
    position: usize,
    active: Option<&'a [StyleCode]>,
    /// The active set changed (or a line began) since it was last written.
    dirty: bool,
    /// A style is in effect on the current line and needs a closing reset.
    open: bool,
    enabled: bool,
}

impl<'a> SpanCursor<'a> {
    /// A cursor over `spans`. A disabled cursor never writes escapes but
    /// still tracks positions.
    pub(crate) fn new(spans: &'a [FormatSpan], enabled: bool) -> Self {
        Self {
            spans,
            next: 0,
            position: 0,
            active: None,
            dirty: true,
            open: false,
            enabled,
        }
    }

    fn sync(&mut self) {
        while let Some(span) = self.spans.get(self.next) {
            if span.index > self.position {
                break;
            }
            self.active = Some(&span.codes);
            self.dirty = true;
            self.next += 1;
        }
    }

    /// Writes the source character at the current position to `out`,
    /// preceded by the active style if it changed.
    pub(crate) fn emit(&mut self, c: char, out: &mut String) {
        if self.enabled {
            self.sync();
            if self.dirty {
                self.dirty = false;
                if let Some(codes) = self.active {
                    let styled = absolute(codes) != [RESET];
                    // An unstyled line start needs no sequence.
                    if self.open || styled {
                        out.push_str(&encode(codes));
                    }
                    self.open = styled;
                }
            }
        }
        out.push(c);
        self.position += 1;
    }

    /// Steps over `n` source characters that are not written.
    pub(crate) fn skip(&mut self, n: usize) {
        self.position += n;
    }

    /// Writes text that has no source position, in the current style.
    pub(crate) fn literal(&mut self, text: &str, out: &mut String) {
        out.push_str(text);
    }

    /// Starts a new output line. The active style is written again before
    /// its first character.
    pub(crate) fn begin_line(&mut self) {
        self.dirty = true;
        self.open = false;
    }

    /// Closes the current output line with a reset if it was styled.
    pub(crate) fn end_line(&mut self, out: &mut String) {
        if self.open {
            out.push_str(RESET_SEQUENCE);
            self.open = false;
        }
    }
}
