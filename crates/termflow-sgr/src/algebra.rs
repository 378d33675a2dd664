//! Pure operations over ordered lists of style codes.
//!
//! An active set is kept in application order with at most one code per
//! [`StyleGroup`](crate::StyleGroup). When a reset (`0`) has been applied it
//! sits first in the list, and codes that merely restore a group default are
//! dropped after it because the reset already implies them.
//!
//! Folding is a left fold whose state is its own output, so applying codes in
//! several steps gives the same set as applying them all at once:
//!
//! ```rust
//! use termflow_sgr::adjust;
//!
//! let a = [31, 1];
//! let b = [0, 4];
//! let c = [24, 32];
//! assert_eq!(adjust(&adjust(&a, &b), &c), adjust(&a, &adjust(&b, &c)));
//! ```

use crate::registry::{group_of, is_default, StyleCode, RESET};

fn fold(codes: impl IntoIterator<Item = StyleCode>) -> Vec<StyleCode> {
    let mut active: Vec<StyleCode> = Vec::new();
    for code in codes {
        if code == RESET {
            active.clear();
            active.push(RESET);
            continue;
        }
        match group_of(code) {
            Some(group) => {
                active.retain(|c| !group.contains(*c));
                let after_reset = active.first() == Some(&RESET);
                if !(after_reset && code == group.default) {
                    active.push(code);
                }
            }
            // Unknown codes are opaque: deduplicated, cleared only by a reset.
            None => {
                active.retain(|c| *c != code);
                active.push(code);
            }
        }
    }
    active
}

/// Applies `incoming` codes on top of the `previous` active set.
///
/// Group exclusivity holds in the result, a reset in `incoming` discards all
/// carryover, and a reset already present in `previous` stays at the front.
///
/// ```rust
/// use termflow_sgr::adjust;
///
/// assert_eq!(adjust(&[30], &[31, 32]), vec![32]);
/// assert_eq!(adjust(&[30, 0, 44], &[36]), vec![0, 44, 36]);
/// assert_eq!(adjust(&[30, 44], &[0, 36]), vec![0, 36]);
/// ```
pub fn adjust(previous: &[StyleCode], incoming: &[StyleCode]) -> Vec<StyleCode> {
    clean_folded(fold(previous.iter().chain(incoming).copied()))
}

/// Collapses a raw list of codes into the shortest equivalent list.
///
/// The result holds at most one code per group, the reset (if any) first,
/// and no group defaults after a reset. An empty result becomes `[0]`.
///
/// ```rust
/// use termflow_sgr::clean;
///
/// assert_eq!(clean(&[5, 5, 5, 5]), vec![5]);
/// assert_eq!(clean(&[30, 45, 0, 1]), vec![0, 1]);
/// assert_eq!(clean(&[0, 22, 23, 29]), vec![0]);
/// ```
pub fn clean(codes: &[StyleCode]) -> Vec<StyleCode> {
    clean_folded(fold(codes.iter().copied()))
}

fn clean_folded(folded: Vec<StyleCode>) -> Vec<StyleCode> {
    if folded.is_empty() {
        vec![RESET]
    } else {
        folded
    }
}

/// Drops every code that restores a group default.
///
/// ```rust
/// use termflow_sgr::clear_defaults;
///
/// assert_eq!(clear_defaults(&[30, 39, 54, 4]), vec![30, 4]);
/// ```
pub fn clear_defaults(codes: &[StyleCode]) -> Vec<StyleCode> {
    codes.iter().copied().filter(|c| !is_default(*c)).collect()
}

/// The absolute form of an active set: the codes that reproduce it when
/// written straight after a full reset.
///
/// Two active sets render identically exactly when their absolute forms are
/// equal.
pub fn absolute(codes: &[StyleCode]) -> Vec<StyleCode> {
    adjust(&[RESET], codes)
}
