//! # termflow - ANSI-aware text wrapping for terminals
//!
//! `termflow` lays text out into lines of an exact display width while
//! keeping the SGR styling (colors, bold, underline...) the text carries.
//! Styles are re-anchored to the characters they covered, so a bold word
//! that moves to the next line stays bold and nothing bleeds into paddings
//! or fillers.
//!
//! ## Wrapping
//!
//! ```rust
//! use termflow::{lines, WrapConfig};
//!
//! let config = WrapConfig::new().width(12).filler(".").padding_left("| ");
//! let out = lines("the quick brown fox", &config).unwrap();
//! assert_eq!(out, vec!["| the quick.", "| brown fox."]);
//! ```
//!
//! Lines are built by [`lines`] (or [`wrap`], joined with newlines) using a
//! [`WrapConfig`]: width, first-line and hanging indents, paddings, filler,
//! hard-break marker, justification and trimming. Configurations can also
//! be loaded from YAML with [`WrapConfig::from_yaml`].
//!
//! ## Columns
//!
//! [`columns_lines`] wraps several [`Column`]s side by side, sharing the
//! width among the columns that do not fix their own.
//!
//! ## Building blocks
//!
//! The pieces the wrapper is made of are public as well: [`width`],
//! [`words`], [`trim`], [`justify`], [`filler`] and [`transform`], plus the
//! whole style model of [`termflow_sgr`] ([`separate`], [`adjust`],
//! [`clean`], [`id`], ...), re-exported here.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (hard breaks and closed lines at
//! `trace`, column widths at `debug`) and never installs a subscriber.

mod columns;
mod config;
mod error;
mod text;
mod width;
mod wrap;

pub use columns::{columns_lines, columns_wrap, resolve_widths, Column};
pub use config::{Trim, WrapConfig, WrapOptions};
pub use error::{Result, WrapError};
pub use text::{filler, justify, transform, trim, words, BREAKS, DEFAULT_TRANSFORMS};
pub use width::{char_width, plain_width, width, WIDTH_OVERRIDES};
pub use wrap::{lines, wrap};

pub use termflow_sgr::{
    absolute, adjust, clean, clear_defaults, encode, group_codes, id, inject, is_default,
    separate, strip, FormatSpan, Separated, StyleCode, StyleId, ESCAPES, RESET,
};
