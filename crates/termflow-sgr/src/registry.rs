//! Static table of SGR style codes, grouped by the attribute they control.
//!
//! Codes inside one [`StyleGroup`] are mutually exclusive: applying any of
//! them replaces whatever the group held before. Every group also names the
//! code that restores the terminal default for that attribute, which is what
//! an explicit reset (code `0`) leaves behind implicitly.
//!
//! The table is immutable for the lifetime of the process and can be shared
//! across threads freely.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// A numeric SGR parameter, e.g. `1` for bold or `31` for a red foreground.
pub type StyleCode = u16;

/// The universal reset code. It belongs to no group.
pub const RESET: StyleCode = 0;

/// Characters that introduce an escape sequence: the 7-bit `ESC` and the
/// 8-bit `CSI`. The first entry is the one used when encoding.
pub const ESCAPES: [char; 2] = ['\u{1b}', '\u{9b}'];

/// A set of mutually exclusive style codes governing one visual attribute.
#[derive(Debug, PartialEq, Eq)]
pub struct StyleGroup {
    /// Group name, e.g. `"weight"`.
    pub name: &'static str,
    /// Named codes of the group, in declaration order.
    pub styles: &'static [(&'static str, StyleCode)],
    /// The code that restores the terminal default for this attribute.
    pub default: StyleCode,
}

impl StyleGroup {
    /// Returns true if `code` belongs to this group.
    pub fn contains(&self, code: StyleCode) -> bool {
        self.styles.iter().any(|(_, c)| *c == code)
    }

    /// Looks up a code by its style name within this group.
    pub fn code(&self, name: &str) -> Option<StyleCode> {
        self.styles
            .iter()
            .find(|(style, _)| *style == name)
            .map(|(_, code)| *code)
    }

    /// All codes of the group, in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = StyleCode> + '_ {
        self.styles.iter().map(|(_, code)| *code)
    }
}

/// Every known style group.
pub static GROUPS: &[StyleGroup] = &[
    StyleGroup {
        name: "weight",
        styles: &[("bold", 1), ("faint", 2), ("default", 22)],
        default: 22,
    },
    StyleGroup {
        name: "emphasis",
        styles: &[("italic", 3), ("fraktur", 20), ("default", 23)],
        default: 23,
    },
    StyleGroup {
        name: "underline",
        styles: &[("single", 4), ("double", 21), ("default", 24)],
        default: 24,
    },
    StyleGroup {
        name: "blink",
        styles: &[("slow", 5), ("fast", 6), ("default", 25)],
        default: 25,
    },
    StyleGroup {
        name: "image",
        styles: &[("negative", 7), ("default", 27)],
        default: 27,
    },
    StyleGroup {
        name: "display",
        styles: &[("conceal", 8), ("default", 28)],
        default: 28,
    },
    StyleGroup {
        name: "strikeout",
        styles: &[("strikeout", 9), ("default", 29)],
        default: 29,
    },
    StyleGroup {
        name: "font",
        styles: &[
            ("default", 10),
            ("1", 11),
            ("2", 12),
            ("3", 13),
            ("4", 14),
            ("5", 15),
            ("6", 16),
            ("7", 17),
            ("8", 18),
            ("9", 19),
        ],
        default: 10,
    },
    StyleGroup {
        name: "frame",
        styles: &[("framed", 51), ("encircled", 52), ("default", 54)],
        default: 54,
    },
    StyleGroup {
        name: "overline",
        styles: &[("overlined", 53), ("default", 55)],
        default: 55,
    },
    StyleGroup {
        name: "color",
        styles: &[
            ("black", 30),
            ("red", 31),
            ("green", 32),
            ("yellow", 33),
            ("blue", 34),
            ("magenta", 35),
            ("cyan", 36),
            ("white", 37),
            ("default", 39),
            ("intense-black", 90),
            ("intense-red", 91),
            ("intense-green", 92),
            ("intense-yellow", 93),
            ("intense-blue", 94),
            ("intense-magenta", 95),
            ("intense-cyan", 96),
            ("intense-white", 97),
        ],
        default: 39,
    },
    StyleGroup {
        name: "bgcolor",
        styles: &[
            ("black", 40),
            ("red", 41),
            ("green", 42),
            ("yellow", 43),
            ("blue", 44),
            ("magenta", 45),
            ("cyan", 46),
            ("white", 47),
            ("default", 49),
            ("intense-black", 100),
            ("intense-red", 101),
            ("intense-green", 102),
            ("intense-yellow", 103),
            ("intense-blue", 104),
            ("intense-magenta", 105),
            ("intense-cyan", 106),
            ("intense-white", 107),
        ],
        default: 49,
    },
];

static INDEX: Lazy<HashMap<StyleCode, (&'static StyleGroup, &'static str)>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for group in GROUPS {
        for (name, code) in group.styles {
            index.insert(*code, (group, *name));
        }
    }
    index
});

/// Identity of a registered style code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleId {
    pub group: &'static str,
    pub name: &'static str,
}

impl StyleId {
    /// Dotted form, e.g. `"weight.bold"`.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

/// Reverse lookup of a code into the registry.
///
/// Returns `None` for the reset code and for codes the registry does not
/// know (extended color introducers, private codes and the like).
///
/// ```rust
/// use termflow_sgr::id;
///
/// assert_eq!(id(1).unwrap().full_name(), "weight.bold");
/// assert_eq!(id(101).unwrap().full_name(), "bgcolor.intense-red");
/// assert!(id(38).is_none());
/// ```
pub fn id(code: StyleCode) -> Option<StyleId> {
    INDEX.get(&code).map(|&(group, name)| StyleId {
        group: group.name,
        name,
    })
}

/// The group a code belongs to, if any.
pub fn group_of(code: StyleCode) -> Option<&'static StyleGroup> {
    INDEX.get(&code).map(|&(group, _)| group)
}

/// Looks up a group by name.
pub fn group(name: &str) -> Option<&'static StyleGroup> {
    GROUPS.iter().find(|group| group.name == name)
}

/// All codes of the named group. Unknown groups yield an empty list.
pub fn group_codes(name: &str) -> Vec<StyleCode> {
    group(name)
        .map(|group| group.codes().collect())
        .unwrap_or_default()
}

/// Looks up a code by group and style name, e.g. `code("color", "red")`.
pub fn code(group_name: &str, style: &str) -> Option<StyleCode> {
    group(group_name).and_then(|group| group.code(style))
}

/// Returns true if `code` restores its group's terminal default.
pub fn is_default(code: StyleCode) -> bool {
    group_of(code).is_some_and(|group| group.default == code)
}
