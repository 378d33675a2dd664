//! Error types for wrapping and column layout.

use thiserror::Error;

/// Errors that can occur when laying out text.
///
/// Malformed escape sequences are never an error; they stay in the text as
/// literal characters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WrapError {
    /// Paddings and indent use up the whole line.
    #[error("no room for content: width {width} leaves nothing after {reserved} reserved columns")]
    NoRoom { width: usize, reserved: usize },

    /// The hard-break marker leaves no column for the word itself.
    #[error("hard-break marker of width {marker_width} does not fit in {available} columns")]
    HardBreakTooWide {
        marker_width: usize,
        available: usize,
    },

    /// Fixed column widths leave too little for the remaining columns.
    #[error("columns need {needed} columns but only {available} are available")]
    ColumnsOverflow { available: usize, needed: usize },

    /// A column layout was requested without any column.
    #[error("no columns to lay out")]
    NoColumns,

    /// A configuration document could not be read.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for WrapError {
    fn from(err: serde_yaml::Error) -> Self {
        WrapError::Config(err.to_string())
    }
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, WrapError>;
