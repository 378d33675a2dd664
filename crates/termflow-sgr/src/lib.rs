//! # termflow-sgr - SGR style codes and styled-text separation
//!
//! The style model underneath `termflow`. Terminal styling arrives as
//! select-graphic-rendition escape sequences (`ESC [ 1 ; 31 m`). This crate
//! treats the numeric parameters of those sequences as an algebra:
//!
//! - [`registry`](crate::GROUPS): which codes exist and which group each
//!   belongs to. Codes in one group are mutually exclusive.
//! - [`adjust`], [`clean`], [`clear_defaults`]: fold incoming codes into an
//!   active set, keeping one code per group.
//! - [`separate`]: split styled text into plain text plus [`FormatSpan`]s,
//!   each carrying the full active set from its character offset onwards.
//! - [`encode`], [`inject`]: turn active sets back into escape sequences.
//!
//! ## Example
//!
//! ```rust
//! use termflow_sgr::{adjust, separate};
//!
//! let styled = separate("plain \x1b[1mbold\x1b[0m");
//! assert_eq!(styled.value, "plain bold");
//! assert_eq!(styled.format[0].index, 6);
//! assert_eq!(adjust(&styled.format[0].codes, &[31]), vec![1, 31]);
//! ```
//!
//! Escape sequences other than SGR (cursor movement, erase, OSC) are not
//! interpreted. They stay in the text as literal characters.

mod algebra;
mod registry;
mod spans;
mod tokenize;

pub use algebra::{absolute, adjust, clean, clear_defaults};
pub use registry::{
    code, group, group_codes, group_of, id, is_default, StyleCode, StyleGroup, StyleId, ESCAPES,
    GROUPS, RESET,
};
pub use spans::{encode, inject, separate, FormatSpan, Separated, RESET_SEQUENCE};
pub use tokenize::{strip, tokenize, Token, Tokenizer};
