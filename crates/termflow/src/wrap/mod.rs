//! The line wrapper.
//!
//! Text is first normalised (see [`transform`](crate::transform)) and
//! separated into plain text plus style spans. The plain text is split into
//! [`words`](crate::words) which are laid onto lines one at a time. For
//! every word, in order:
//!
//! 1. If it fits the rest of the line it is appended.
//! 2. If it fits once its trailing space is dropped, it is appended without
//!    the space and the line is closed.
//! 3. If it is wider than a whole line it is split: the head, followed by
//!    the hard-break marker, and the tail both go back into the queue.
//! 4. Otherwise the line is closed and the word starts the next one.
//!
//! A word ending in a newline closes its line as soon as it is placed.
//!
//! Closing a line trims it, justifies it if it was closed by a soft wrap,
//! and frames it with padding, indent and filler. When the input was
//! styled, every line carries the styles active over its characters and
//! ends with a reset, so lines can be printed independently.

mod cursor;

use crate::config::WrapConfig;
use crate::error::{Result, WrapError};
use crate::text::{filler, justify, transform, trim, words};
use crate::width::{plain_width, split_at_width, width};
use cursor::SpanCursor;
use std::collections::VecDeque;
use termflow_sgr::{separate, strip};
use tracing::trace;

/// Horizontal budget of a line, measured once per call.
#[derive(Debug, Clone, Copy)]
struct Layout {
    width: usize,
    /// Width between the paddings.
    inner: usize,
    first_indent: usize,
    hanging_indent: usize,
    padding_right: usize,
    marker: usize,
}

impl Layout {
    fn measure(config: &WrapConfig) -> Result<Self> {
        let padding_left = width(&config.padding_left);
        let padding_right = width(&config.padding_right);
        let first_indent = width(&config.first_line_indent);
        let hanging_indent = width(&config.hanging_indent);

        let reserved = padding_left + padding_right + first_indent.max(hanging_indent);
        if config.width <= reserved {
            return Err(WrapError::NoRoom {
                width: config.width,
                reserved,
            });
        }

        Ok(Self {
            width: config.width,
            inner: config.width - padding_left - padding_right,
            first_indent,
            hanging_indent,
            padding_right,
            marker: width(&config.hard_break),
        })
    }

    /// Content width of every line after the first.
    fn fresh(&self) -> usize {
        self.inner - self.hanging_indent
    }
}

/// How a line ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Break {
    Soft,
    Newline,
    End,
}

#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    /// Ends in the middle of a source word and gets the hard-break marker.
    hard_break: bool,
}

struct LineBuilder<'a> {
    config: &'a WrapConfig,
    layout: Layout,
    cursor: SpanCursor<'a>,
    lines: Vec<String>,
    content: String,
    content_width: usize,
}

impl<'a> LineBuilder<'a> {
    fn indent(&self) -> (&'a str, usize) {
        if self.lines.is_empty() {
            (self.config.first_line_indent.as_str(), self.layout.first_indent)
        } else {
            (self.config.hanging_indent.as_str(), self.layout.hanging_indent)
        }
    }

    fn available(&self) -> usize {
        let (_, indent) = self.indent();
        (self.layout.inner - indent).saturating_sub(self.content_width)
    }

    fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn push(&mut self, text: &str) {
        for c in text.chars() {
            self.cursor.emit(c, &mut self.content);
        }
        self.content_width += plain_width(text);
    }

    fn push_marker(&mut self) {
        self.cursor.literal(&self.config.hard_break, &mut self.content);
        self.content_width += self.layout.marker;
    }

    fn close(&mut self, reason: Break) {
        let (indent, indent_width) = self.indent();
        let mut content = trim(
            &std::mem::take(&mut self.content),
            self.config.trim_start_of_line,
            self.config.trim_end_of_line,
        );
        if reason == Break::Soft && self.config.justify {
            content = justify(
                &content,
                self.layout.inner - indent_width,
                self.config.justify_limit,
            );
        }
        self.cursor.end_line(&mut content);

        let used = width(&self.config.padding_left) + indent_width + width(&content);
        let fill = self
            .layout
            .width
            .saturating_sub(used + self.layout.padding_right);

        let mut line = String::with_capacity(self.layout.width + content.len());
        line.push_str(&self.config.padding_left);
        line.push_str(indent);
        line.push_str(&content);
        line.push_str(&filler(&self.config.filler, fill));
        line.push_str(&self.config.padding_right);

        trace!(line = self.lines.len(), ?reason, "closed line");
        self.lines.push(line);
        self.content_width = 0;
        self.cursor.begin_line();
    }

    fn finish(mut self) -> Vec<String> {
        if self.lines.is_empty() || strip(&self.content).chars().any(|c| c != ' ') {
            self.close(Break::End);
        }
        self.lines
    }
}

/// Wraps `text` into lines of exactly `config.width` columns (when a filler
/// is set; otherwise lines may be shorter).
///
/// The input is never empty-handed: empty text produces one blank line.
///
/// # Example
///
/// ```rust
/// use termflow::{lines, WrapConfig};
///
/// let config = WrapConfig::new().width(10);
/// let wrapped = lines("Here you see a superlongwordwithoutspaces", &config).unwrap();
/// assert_eq!(
///     wrapped,
///     vec!["Here you", "see a", "superlong-", "wordwitho-", "utspaces"]
/// );
/// ```
///
/// # Errors
///
/// [`WrapError::NoRoom`] when paddings and indent leave no content column,
/// [`WrapError::HardBreakTooWide`] when a word has to be split but the
/// marker alone fills a line.
pub fn lines(text: &str, config: &WrapConfig) -> Result<Vec<String>> {
    let layout = Layout::measure(config)?;
    let text = transform(text, &config.transforms);
    let styled = separate(&text);
    let ansi = config.ansi && !styled.is_plain();

    let mut builder = LineBuilder {
        config,
        layout,
        cursor: SpanCursor::new(&styled.format, ansi),
        lines: Vec::new(),
        content: String::new(),
        content_width: 0,
    };

    let mut queue: VecDeque<Word<'_>> = words(&styled.value)
        .into_iter()
        .map(|text| Word {
            text,
            hard_break: false,
        })
        .collect();

    while let Some(word) = queue.pop_front() {
        let (body, newline) = match word.text.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (word.text, false),
        };
        let trimmed = body.strip_suffix(' ').unwrap_or(body);
        let marker = if word.hard_break { layout.marker } else { 0 };
        let body_width = plain_width(body) + marker;
        let trimmed_width = plain_width(trimmed) + marker;
        let available = builder.available();

        if body_width <= available {
            builder.push(body);
            if word.hard_break {
                builder.push_marker();
            }
            if newline {
                builder.cursor.skip(1);
                builder.close(Break::Newline);
            }
        } else if trimmed.len() < body.len() && trimmed_width <= available {
            builder.push(trimmed);
            builder.cursor.skip(1);
            builder.close(Break::Soft);
        } else if trimmed_width > layout.fresh() && !word.hard_break {
            if layout.fresh() <= layout.marker {
                return Err(WrapError::HardBreakTooWide {
                    marker_width: layout.marker,
                    available: layout.fresh(),
                });
            }
            // An empty line is split at its own budget, a partial one at the
            // budget of the line the head moves to.
            let budget = if builder.is_empty() && available > layout.marker {
                available
            } else {
                layout.fresh()
            };
            let (head, _) = split_at_width(trimmed, budget - layout.marker);
            if head.len() < trimmed.len() {
                // A wide first character leaves no column for the marker.
                let hard_break = plain_width(head) + layout.marker <= budget;
                trace!(head, hard_break, "hard break");
                queue.push_front(Word {
                    text: &word.text[head.len()..],
                    hard_break: false,
                });
                queue.push_front(Word {
                    text: head,
                    hard_break,
                });
            } else if builder.is_empty() {
                // A single character wider than the line: place it anyway.
                builder.push(body);
                if newline {
                    builder.cursor.skip(1);
                    builder.close(Break::Newline);
                }
            } else {
                builder.close(Break::Soft);
                queue.push_front(word);
            }
        } else if builder.is_empty() && !builder.lines.is_empty() {
            builder.push(body);
            if word.hard_break {
                builder.push_marker();
            }
            if newline {
                builder.cursor.skip(1);
                builder.close(Break::Newline);
            }
        } else {
            builder.close(Break::Soft);
            queue.push_front(word);
        }
    }

    Ok(builder.finish())
}

/// Wraps `text` and joins the lines with newlines.
///
/// ```rust
/// use termflow::{wrap, WrapConfig};
///
/// let config = WrapConfig::new().width(12);
/// assert_eq!(
///     wrap("New line after\nsoft wrap", &config).unwrap(),
///     "New line\nafter\nsoft wrap"
/// );
/// ```
pub fn wrap(text: &str, config: &WrapConfig) -> Result<String> {
    Ok(lines(text, config)?.join("\n"))
}
