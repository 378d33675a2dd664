//! Property-based tests for the style algebra and span extraction.

use proptest::prelude::*;
use termflow_sgr::{absolute, adjust, clean, group_of, inject, separate, strip, StyleCode};

// ============================================================================
// Strategies
// ============================================================================

fn code_strategy() -> impl Strategy<Value = StyleCode> {
    prop_oneof![
        3 => prop::sample::select(vec![1u16, 2, 3, 4, 9, 21, 22, 23, 24, 29, 31, 32, 39, 44, 49, 53, 55, 91]),
        1 => Just(0u16),
        1 => 0u16..110,
    ]
}

fn codes_strategy() -> impl Strategy<Value = Vec<StyleCode>> {
    prop::collection::vec(code_strategy(), 1..8)
}

#[derive(Debug, Clone)]
enum Segment {
    Text(String),
    Sgr(Vec<StyleCode>),
}

fn styled_strategy() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        "[a-z é]{0,6}".prop_map(Segment::Text),
        codes_strategy().prop_map(Segment::Sgr),
    ];
    prop::collection::vec(segment, 0..12).prop_map(|segments| {
        segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(text) => text,
                Segment::Sgr(codes) => {
                    let params: Vec<_> = codes.iter().map(|c| c.to_string()).collect();
                    format!("\x1b[{}m", params.join(";"))
                }
            })
            .collect()
    })
}

// ============================================================================
// Algebra
// ============================================================================

proptest! {
    #[test]
    fn clean_is_idempotent(codes in codes_strategy()) {
        let once = clean(&codes);
        prop_assert_eq!(clean(&once), once);
    }

    #[test]
    fn at_most_one_code_per_group(prev in codes_strategy(), next in codes_strategy()) {
        let set = adjust(&prev, &next);
        for (i, a) in set.iter().enumerate() {
            for b in &set[i + 1..] {
                prop_assert_ne!(a, b);
                if let (Some(ga), Some(gb)) = (group_of(*a), group_of(*b)) {
                    prop_assert_ne!(ga.name, gb.name);
                }
            }
        }
    }

    #[test]
    fn reset_only_ever_leads(prev in codes_strategy(), next in codes_strategy()) {
        let set = adjust(&prev, &next);
        prop_assert!(!set[1..].contains(&0));
    }

    #[test]
    fn adjust_is_associative(
        a in codes_strategy(),
        b in codes_strategy(),
        c in codes_strategy(),
    ) {
        prop_assert_eq!(adjust(&adjust(&a, &b), &c), adjust(&a, &adjust(&b, &c)));
    }

    #[test]
    fn incoming_reset_discards_history(prev in codes_strategy(), next in codes_strategy()) {
        let mut incoming = vec![0];
        incoming.extend(&next);
        prop_assert_eq!(adjust(&prev, &incoming), absolute(&next));
    }
}

// ============================================================================
// Separation
// ============================================================================

proptest! {
    #[test]
    fn value_is_input_without_sequences(raw in styled_strategy()) {
        prop_assert_eq!(separate(&raw).value, strip(&raw));
    }

    #[test]
    fn span_indices_strictly_increase(raw in styled_strategy()) {
        let separated = separate(&raw);
        let len = separated.value.chars().count();
        for pair in separated.format.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
        for span in &separated.format {
            prop_assert!(span.index <= len);
        }
    }

    #[test]
    fn inject_reproduces_active_styles(raw in styled_strategy()) {
        let original = separate(&raw);
        let again = separate(&inject(&original.value, &original.format));
        prop_assert_eq!(&again.value, &original.value);
        prop_assert_eq!(again.format.len(), original.format.len());
        for (a, b) in again.format.iter().zip(&original.format) {
            prop_assert_eq!(a.index, b.index);
            prop_assert_eq!(absolute(&a.codes), absolute(&b.codes));
        }
    }
}
