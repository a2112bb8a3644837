//! Document code tests
//!
//! Property-based and unit tests for:
//! - Code format (prefix, zero-padded sequence, two-digit year)
//! - Successor codes strictly increasing within a type and year
//! - Yearly reset and recovery from malformed codes

use proptest::prelude::*;
use shared::{
    format_code, last_sequence, next_from_last, parse_sequence, year_suffix, DocumentType,
};

// ============================================================================
// Property Test Strategies
// ============================================================================

fn doc_type_strategy() -> impl Strategy<Value = DocumentType> {
    prop_oneof![
        Just(DocumentType::Inbound),
        Just(DocumentType::Outbound),
        Just(DocumentType::Purchase),
    ]
}

fn year_strategy() -> impl Strategy<Value = i32> {
    2000i32..2100
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Issuing codes one after another yields strictly increasing,
    /// pairwise distinct sequence numbers.
    #[test]
    fn prop_codes_strictly_increase(
        doc_type in doc_type_strategy(),
        year in year_strategy(),
        count in 1usize..60,
    ) {
        let mut last: Option<String> = None;
        let mut previous = 0u32;

        for _ in 0..count {
            let code = next_from_last(doc_type, year, last.as_deref()).unwrap();
            let sequence = parse_sequence(&code, doc_type, year).unwrap();
            prop_assert_eq!(sequence, previous + 1);
            previous = sequence;
            last = Some(code);
        }
    }

    /// Every formatted code parses back under its own type and year
    #[test]
    fn prop_format_code_shape(
        doc_type in doc_type_strategy(),
        year in year_strategy(),
        sequence in 1u32..=9_999,
    ) {
        let code = format_code(doc_type, sequence, year);
        prop_assert_eq!(code.len(), 8);
        prop_assert!(code.starts_with(doc_type.prefix()));
        prop_assert!(code.ends_with(&year_suffix(year)));
        prop_assert_eq!(parse_sequence(&code, doc_type, year), Some(sequence));
    }

    /// A code from last year never influences this year's count
    #[test]
    fn prop_new_year_restarts(
        doc_type in doc_type_strategy(),
        year in year_strategy(),
        sequence in 1u32..=9_999,
    ) {
        let last_year = format_code(doc_type, sequence, year - 1);
        let next = next_from_last(doc_type, year, Some(last_year.as_str())).unwrap();
        prop_assert_eq!(next, format_code(doc_type, 1, year));
    }

    /// Seeding the counter with `last_sequence` and bumping it once hands
    /// out the same code as the successor rule, for well-formed and
    /// garbage last codes alike
    #[test]
    fn prop_counter_matches_successor_rule(
        doc_type in doc_type_strategy(),
        year in year_strategy(),
        last in prop::option::of(prop_oneof![
            (1u32..=99_999).prop_map(|seq| (seq, true)),
            Just((0u32, false)),
        ]),
    ) {
        let last_code = last.map(|(seq, well_formed)| {
            if well_formed {
                format_code(doc_type, seq, year)
            } else {
                format!("{}??{}", doc_type.prefix(), year_suffix(year))
            }
        });

        let seed = last_sequence(last_code.as_deref(), doc_type, year);
        let issued = format_code(doc_type, seed + 1, year);
        prop_assert_eq!(
            issued,
            next_from_last(doc_type, year, last_code.as_deref()).unwrap()
        );
    }

    /// Garbage in the middle segment restarts the count at one
    #[test]
    fn prop_malformed_code_restarts(
        doc_type in doc_type_strategy(),
        middle in "[A-Za-z]{1,4}",
    ) {
        let last = format!("{}{}24", doc_type.prefix(), middle);
        let next = next_from_last(doc_type, 2024, Some(last.as_str())).unwrap();
        prop_assert_eq!(next, format_code(doc_type, 1, 2024));
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_inbound_sequence() {
        assert_eq!(
            next_from_last(DocumentType::Inbound, 2024, Some("RE000524")).unwrap(),
            "RE000624"
        );
    }

    #[test]
    fn test_outbound_first_code() {
        assert_eq!(
            next_from_last(DocumentType::Outbound, 2024, None).unwrap(),
            "RS000124"
        );
    }

    #[test]
    fn test_purchase_sequence() {
        assert_eq!(
            next_from_last(DocumentType::Purchase, 2026, Some("PC000326")).unwrap(),
            "PC000426"
        );
    }

    #[test]
    fn test_width_grows_past_four_digits() {
        assert_eq!(
            next_from_last(DocumentType::Inbound, 2024, Some("RE999924")).unwrap(),
            "RE1000024"
        );
    }

    #[test]
    fn test_types_do_not_share_sequences() {
        assert_eq!(
            next_from_last(DocumentType::Outbound, 2024, Some("RE000924")).unwrap(),
            "RS000124"
        );
    }
}
