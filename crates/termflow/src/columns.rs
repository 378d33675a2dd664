//! Side-by-side composition of independently wrapped blocks.
//!
//! Each [`Column`] is wrapped on its own with the base configuration plus
//! its overrides, then the resulting lines are zipped into rows joined by
//! `padding_middle`. The base `padding_left` and `padding_right` frame the
//! whole row rather than each column.
//!
//! Columns without an explicit width share what is left after the fixed
//! ones and the separators. The share is split evenly, with the remainder
//! going one column at a time to the leftmost automatic columns.

use crate::config::{WrapConfig, WrapOptions};
use crate::error::{Result, WrapError};
use crate::width::width;
use crate::wrap::lines;
use tracing::debug;

/// A block of text laid out as one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub text: String,
    /// Overrides applied on top of the base configuration for this column.
    /// `options.width` fixes the column's width.
    pub options: WrapOptions,
}

impl Column {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: WrapOptions::default(),
        }
    }

    /// Fixes the column width instead of sharing the leftover space.
    pub fn width(mut self, width: usize) -> Self {
        self.options.width = Some(width);
        self
    }

    pub fn options(mut self, options: WrapOptions) -> Self {
        self.options = options;
        self
    }
}

impl From<&str> for Column {
    fn from(text: &str) -> Self {
        Column::new(text)
    }
}

impl From<String> for Column {
    fn from(text: String) -> Self {
        Column::new(text)
    }
}

/// Resolves the width of every column.
///
/// ```rust
/// use termflow::{resolve_widths, Column, WrapConfig};
///
/// let config = WrapConfig::new().width(24).padding_middle(" ");
/// let columns = [Column::new("a"), Column::new("b")];
/// assert_eq!(resolve_widths(&columns, &config).unwrap(), vec![12, 11]);
/// ```
pub fn resolve_widths(columns: &[Column], config: &WrapConfig) -> Result<Vec<usize>> {
    if columns.is_empty() {
        return Err(WrapError::NoColumns);
    }

    let separators = width(&config.padding_middle) * (columns.len() - 1);
    let frame = width(&config.padding_left) + width(&config.padding_right);
    let available = config.width.saturating_sub(frame + separators);

    let fixed: usize = columns.iter().filter_map(|c| c.options.width).sum();
    let auto = columns.iter().filter(|c| c.options.width.is_none()).count();
    let needed = fixed + auto;
    if needed > available {
        return Err(WrapError::ColumnsOverflow { available, needed });
    }

    let leftover = available - fixed;
    let (share, remainder) = match auto {
        0 => (0, 0),
        n => (leftover / n, leftover % n),
    };

    let mut nth_auto = 0;
    let widths: Vec<usize> = columns
        .iter()
        .map(|column| match column.options.width {
            Some(width) => width,
            None => {
                let extra = usize::from(nth_auto < remainder);
                nth_auto += 1;
                share + extra
            }
        })
        .collect();

    debug!(available, fixed, auto, ?widths, "resolved column widths");
    Ok(widths)
}

fn column_config(base: &WrapConfig, column: &Column, width: usize) -> WrapConfig {
    let mut config = WrapConfig {
        padding_left: String::new(),
        padding_right: String::new(),
        ..base.clone()
    }
    .merged(&column.options);
    config.width = width;
    if config.filler.is_empty() {
        config.filler = " ".to_string();
    }
    config
}

/// Wraps every column and returns the composed rows.
///
/// Shorter columns are completed with blank lines built from their own
/// configuration (with the hanging indent), so fillers, paddings and indents
/// stay aligned.
///
/// # Example
///
/// ```rust
/// use termflow::{columns_lines, Column, WrapConfig};
///
/// let config = WrapConfig::new().width(11).padding_middle(" | ");
/// let rows = columns_lines(&[Column::new("one two"), Column::new("six")], &config).unwrap();
/// assert_eq!(rows, vec!["one  | six ", "two  |     "]);
/// ```
///
/// # Errors
///
/// [`WrapError::NoColumns`] for an empty slice, [`WrapError::ColumnsOverflow`]
/// when fixed widths leave no room, and any error of [`lines`] for a column.
pub fn columns_lines(columns: &[Column], config: &WrapConfig) -> Result<Vec<String>> {
    let widths = resolve_widths(columns, config)?;

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(columns.len());
    let mut configs: Vec<WrapConfig> = Vec::with_capacity(columns.len());
    for (column, width) in columns.iter().zip(widths) {
        let config = column_config(config, column, width);
        cells.push(lines(&column.text, &config)?);
        configs.push(config);
    }

    let rows = cells.iter().map(Vec::len).max().unwrap_or(0);
    for (column, config) in cells.iter_mut().zip(&configs) {
        if column.len() == rows {
            continue;
        }
        // Every column has at least one line, so blanks are never first.
        let hanging = WrapConfig {
            first_line_indent: config.hanging_indent.clone(),
            ..config.clone()
        };
        let blank = lines("", &hanging)?.concat();
        column.resize(rows, blank);
    }

    Ok((0..rows)
        .map(|row| {
            let joined = cells
                .iter()
                .map(|column| column[row].as_str())
                .collect::<Vec<_>>()
                .join(&config.padding_middle);
            format!("{}{}{}", config.padding_left, joined, config.padding_right)
        })
        .collect())
}

/// Like [`columns_lines`], joined with newlines.
pub fn columns_wrap(columns: &[Column], config: &WrapConfig) -> Result<String> {
    Ok(columns_lines(columns, config)?.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod widths {
        use super::*;

        #[test]
        fn auto_columns_share_evenly() {
            let config = WrapConfig::new().width(24).padding_middle(" ");
            let columns = vec![Column::new("a"), Column::new("b")];
            assert_eq!(resolve_widths(&columns, &config).unwrap(), vec![12, 11]);
        }

        #[test]
        fn remainder_goes_to_leftmost_auto_columns() {
            let config = WrapConfig::new().width(14).padding_middle("");
            let columns = vec![
                Column::new("a").width(3),
                Column::new("b"),
                Column::new("c"),
                Column::new("d"),
            ];
            // 11 left for three columns: 4, 4, 3
            assert_eq!(resolve_widths(&columns, &config).unwrap(), vec![3, 4, 4, 3]);
        }

        #[test]
        fn frame_and_separators_are_reserved() {
            let config = WrapConfig::new()
                .width(20)
                .padding_left("[")
                .padding_right("]")
                .padding_middle(" | ");
            let columns = vec![Column::new("a"), Column::new("b")];
            assert_eq!(resolve_widths(&columns, &config).unwrap(), vec![8, 7]);
        }

        #[test]
        fn empty_is_an_error() {
            let config = WrapConfig::new();
            assert_eq!(resolve_widths(&[], &config), Err(WrapError::NoColumns));
        }

        #[test]
        fn overflow() {
            let config = WrapConfig::new().width(10).padding_middle(" ");
            let columns = vec![Column::new("a").width(8), Column::new("b")];
            assert_eq!(resolve_widths(&columns, &config).unwrap(), vec![8, 1]);
            let columns = vec![Column::new("a").width(9), Column::new("b")];
            assert_eq!(
                resolve_widths(&columns, &config),
                Err(WrapError::ColumnsOverflow { available: 9, needed: 10 })
            );
        }
    }

    #[test]
    fn shorter_column_is_padded_with_blank_rows() {
        let config = WrapConfig::new().width(11).padding_middle("|");
        let rows = columns_lines(
            &[Column::new("aaa bbb ccc"), Column::new("dd")],
            &config,
        )
        .unwrap();
        assert_eq!(rows, vec!["aaa  |dd   ", "bbb  |     ", "ccc  |     "]);
    }

    #[test]
    fn blank_rows_use_hanging_indent() {
        let config = WrapConfig::new().width(13).padding_middle("|").filler(".");
        let long = Column::new("aaaa bbbb cccc");
        let short = Column::new("").options(
            WrapOptions::new()
                .first_line_indent("> ")
                .hanging_indent("  "),
        );
        let rows = columns_lines(&[long, short], &config).unwrap();
        assert_eq!(rows, vec!["aaaa..|> ....", "bbbb..|  ....", "cccc..|  ...."]);
    }

    #[test]
    fn outer_padding_frames_rows() {
        let config = WrapConfig::new()
            .width(9)
            .padding_left("<")
            .padding_right(">")
            .padding_middle(" ");
        let rows = columns_lines(&[Column::new("ab"), Column::new("cd")], &config).unwrap();
        assert_eq!(rows, vec!["<ab  cd >"]);
    }

    #[test]
    fn column_options_override_base() {
        let config = WrapConfig::new().width(9).padding_middle(" ");
        let columns = [
            Column::new("ab").options(WrapOptions::new().filler("-")),
            Column::new("cd").options(WrapOptions::new().padding_left(">")),
        ];
        let rows = columns_lines(&columns, &config).unwrap();
        assert_eq!(rows, vec!["ab-- >cd "]);
    }

    #[test]
    fn columns_wrap_joins_rows() {
        let config = WrapConfig::new().width(5).padding_middle(" ");
        let out = columns_wrap(&[Column::new("a b"), Column::new("c")], &config).unwrap();
        assert_eq!(out, "a  c \nb    ");
    }
}
