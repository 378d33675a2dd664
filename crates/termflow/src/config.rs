//! Layout configuration.
//!
//! [`WrapConfig`] is a flat option bag with a documented default for every
//! field. It can be built in code with the setter methods, or read from YAML
//! where any subset of fields may be given:
//!
//! ```rust
//! use termflow::{Trim, WrapConfig};
//!
//! let config = WrapConfig::from_yaml("width: 30\npaddingLeft: '> '\ntrimEndOfLine: 2").unwrap();
//! assert_eq!(config.width, 30);
//! assert_eq!(config.padding_left, "> ");
//! assert_eq!(config.trim_end_of_line, Trim::Count(2));
//! assert_eq!(config.hard_break, "-");
//! ```
//!
//! [`WrapOptions`] carries the same fields as options and is overlaid on a
//! base configuration with [`WrapConfig::merged`]. Columns use it for their
//! per-block overrides.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How many plain spaces to remove from one end of a line.
///
/// In configuration documents this is written as a boolean (`true` removes
/// all, `false` none) or as a count. Counts of zero or below mean none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "TrimRaw", into = "TrimRaw")]
pub enum Trim {
    #[default]
    None,
    All,
    Count(usize),
}

impl Trim {
    /// Maximum number of spaces this setting removes.
    pub fn limit(self) -> usize {
        match self {
            Trim::None => 0,
            Trim::All => usize::MAX,
            Trim::Count(n) => n,
        }
    }
}

impl From<bool> for Trim {
    fn from(all: bool) -> Self {
        if all {
            Trim::All
        } else {
            Trim::None
        }
    }
}

impl From<usize> for Trim {
    fn from(count: usize) -> Self {
        if count == 0 {
            Trim::None
        } else {
            Trim::Count(count)
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum TrimRaw {
    Flag(bool),
    Count(i64),
}

impl From<Trim> for TrimRaw {
    fn from(trim: Trim) -> Self {
        match trim {
            Trim::None => TrimRaw::Flag(false),
            Trim::All => TrimRaw::Flag(true),
            Trim::Count(n) => TrimRaw::Count(i64::try_from(n).unwrap_or(i64::MAX)),
        }
    }
}

impl From<TrimRaw> for Trim {
    fn from(raw: TrimRaw) -> Self {
        match raw {
            TrimRaw::Flag(all) => Trim::from(all),
            TrimRaw::Count(n) if n <= 0 => Trim::None,
            TrimRaw::Count(n) => Trim::from(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }
}

/// Settings for wrapping text into lines of a fixed width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WrapConfig {
    /// Total display width of every produced line, paddings included.
    pub width: usize,
    /// Re-apply the input's styling to the produced lines.
    pub ansi: bool,
    /// Text repeated to fill lines up to `width`. Empty leaves lines short.
    pub filler: String,
    /// Prefix of the first line of the text.
    pub first_line_indent: String,
    /// Prefix of every other line.
    pub hanging_indent: String,
    /// Marker appended where an over-long word is split.
    pub hard_break: String,
    /// Stretch soft-wrapped lines to the full width.
    pub justify: bool,
    /// Largest run of spaces justification may create between two words.
    pub justify_limit: usize,
    pub padding_left: String,
    pub padding_right: String,
    /// Separator between columns.
    pub padding_middle: String,
    pub trim_end_of_line: Trim,
    pub trim_start_of_line: Trim,
    /// Replacements applied after the default ones, in order.
    pub transforms: Vec<(String, String)>,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            width: 80,
            ansi: true,
            filler: String::new(),
            first_line_indent: String::new(),
            hanging_indent: String::new(),
            hard_break: "-".to_string(),
            justify: false,
            justify_limit: 3,
            padding_left: String::new(),
            padding_right: String::new(),
            padding_middle: "   ".to_string(),
            trim_end_of_line: Trim::All,
            trim_start_of_line: Trim::None,
            transforms: Vec::new(),
        }
    }
}

impl WrapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a configuration from YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Returns a copy with every option that is set in `options` applied.
    pub fn merged(&self, options: &WrapOptions) -> Self {
        let mut config = self.clone();
        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = &options.$field {
                    config.$field = value.clone();
                })*
            };
        }
        overlay!(
            width,
            ansi,
            filler,
            first_line_indent,
            hanging_indent,
            hard_break,
            justify,
            justify_limit,
            padding_left,
            padding_right,
            padding_middle,
            trim_end_of_line,
            trim_start_of_line,
            transforms,
        );
        config
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn filler(mut self, filler: impl Into<String>) -> Self {
        self.filler = filler.into();
        self
    }

    pub fn first_line_indent(mut self, indent: impl Into<String>) -> Self {
        self.first_line_indent = indent.into();
        self
    }

    pub fn hanging_indent(mut self, indent: impl Into<String>) -> Self {
        self.hanging_indent = indent.into();
        self
    }

    /// Sets both the first-line and the hanging indent.
    pub fn indent(self, indent: impl Into<String>) -> Self {
        let indent = indent.into();
        self.first_line_indent(indent.clone()).hanging_indent(indent)
    }

    pub fn hard_break(mut self, marker: impl Into<String>) -> Self {
        self.hard_break = marker.into();
        self
    }

    pub fn justify(mut self, justify: bool) -> Self {
        self.justify = justify;
        self
    }

    pub fn justify_limit(mut self, limit: usize) -> Self {
        self.justify_limit = limit;
        self
    }

    pub fn padding_left(mut self, padding: impl Into<String>) -> Self {
        self.padding_left = padding.into();
        self
    }

    pub fn padding_right(mut self, padding: impl Into<String>) -> Self {
        self.padding_right = padding.into();
        self
    }

    pub fn padding_middle(mut self, padding: impl Into<String>) -> Self {
        self.padding_middle = padding.into();
        self
    }

    pub fn trim_end_of_line(mut self, trim: impl Into<Trim>) -> Self {
        self.trim_end_of_line = trim.into();
        self
    }

    pub fn trim_start_of_line(mut self, trim: impl Into<Trim>) -> Self {
        self.trim_start_of_line = trim.into();
        self
    }

    /// Adds a replacement applied to the text before wrapping.
    pub fn transform(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.transforms.push((from.into(), to.into()));
        self
    }
}

/// Partial configuration: only the fields that are `Some` override a base
/// [`WrapConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WrapOptions {
    pub width: Option<usize>,
    pub ansi: Option<bool>,
    pub filler: Option<String>,
    pub first_line_indent: Option<String>,
    pub hanging_indent: Option<String>,
    pub hard_break: Option<String>,
    pub justify: Option<bool>,
    pub justify_limit: Option<usize>,
    pub padding_left: Option<String>,
    pub padding_right: Option<String>,
    pub padding_middle: Option<String>,
    pub trim_end_of_line: Option<Trim>,
    pub trim_start_of_line: Option<Trim>,
    pub transforms: Option<Vec<(String, String)>>,
}

impl WrapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn filler(mut self, filler: impl Into<String>) -> Self {
        self.filler = Some(filler.into());
        self
    }

    pub fn first_line_indent(mut self, indent: impl Into<String>) -> Self {
        self.first_line_indent = Some(indent.into());
        self
    }

    pub fn hanging_indent(mut self, indent: impl Into<String>) -> Self {
        self.hanging_indent = Some(indent.into());
        self
    }

    pub fn justify(mut self, justify: bool) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn padding_left(mut self, padding: impl Into<String>) -> Self {
        self.padding_left = Some(padding.into());
        self
    }

    pub fn padding_right(mut self, padding: impl Into<String>) -> Self {
        self.padding_right = Some(padding.into());
        self
    }

    pub fn hard_break(mut self, marker: impl Into<String>) -> Self {
        self.hard_break = Some(marker.into());
        self
    }

    pub fn trim_end_of_line(mut self, trim: impl Into<Trim>) -> Self {
        self.trim_end_of_line = Some(trim.into());
        self
    }
}
