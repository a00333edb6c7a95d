//! Property-based tests for feature-location parsing
//!
//! Generates location strings from strategies and asserts structural
//! properties of the parsed values: leaf spans carry their written
//! endpoints, operators preserve part order, and parsing is
//! deterministic.

use ferro_locus::{parse_location, ErrorCode, Location, Position};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

// =============================================================================
// Strategies
// =============================================================================

/// Generate small positive coordinates
fn coordinate() -> impl Strategy<Value = u64> {
    1..100_000u64
}

/// Generate an ordered coordinate pair (start <= stop)
fn ordered_pair() -> impl Strategy<Value = (u64, u64)> {
    (coordinate(), 0..10_000u64).prop_map(|(start, len)| (start, start + len))
}

/// Generate a plain range string `N..M`
fn plain_range() -> impl Strategy<Value = String> {
    ordered_pair().prop_map(|(start, stop)| format!("{}..{}", start, stop))
}

/// Generate a single leaf in any written form
fn any_leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => plain_range(),
        1 => coordinate().prop_map(|n| n.to_string()),
        1 => ordered_pair().prop_map(|(start, stop)| format!("<{}..{}", start, stop)),
        1 => ordered_pair().prop_map(|(start, stop)| format!("{}..>{}", start, stop)),
        1 => coordinate().prop_map(|n| format!("{}^{}", n, n + 1)),
        1 => ordered_pair().prop_map(|(low, high)| format!("{}.{}", low, high + 1)),
    ]
}

/// Generate a join or order over 1-6 leaves, with the operator name
fn multi_part() -> impl Strategy<Value = (String, String)> {
    (
        prop_oneof![Just("join"), Just("order")],
        prop::collection::vec(any_leaf(), 1..=6),
    )
        .prop_map(|(op, parts)| (op.to_string(), format!("{}({})", op, parts.join(","))))
}

/// Generate an operator name outside the grammar
fn bogus_operator() -> impl Strategy<Value = String> {
    "[a-z]{3,10}"
        .prop_filter("must not be a real operator", |name| {
            name != "join" && name != "order" && name != "complement"
        })
        .prop_map(|name| format!("{}(1..5)", name))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// A written range `N..M` parses to a leaf span with exactly those
    /// endpoints
    #[test]
    fn test_plain_range_keeps_endpoints((start, stop) in ordered_pair()) {
        let input = format!("{}..{}", start, stop);
        let location = parse_location(&input).unwrap();
        match location {
            Location::Span(span) => {
                prop_assert_eq!(span.start, Position::Exact(start));
                prop_assert_eq!(span.stop, Position::Exact(stop));
                prop_assert_eq!(span.accession, None);
            }
            other => prop_assert!(false, "expected leaf span, got {:?}", other),
        }
    }

    /// Every leaf form the grammar admits parses, and to a leaf
    #[test]
    fn test_any_leaf_parses(input in any_leaf()) {
        let location = parse_location(&input).unwrap();
        prop_assert!(matches!(location, Location::Span(_)), "input {:?}", input);
    }

    /// join/order keep their parts in written order, and the operator tag
    /// matches the keyword
    #[test]
    fn test_multi_part_preserves_order((op, input) in multi_part()) {
        let location = parse_location(&input).unwrap();
        let parts = match (&location, op.as_str()) {
            (Location::Join(parts), "join") => parts,
            (Location::Order(parts), "order") => parts,
            other => {
                return Err(TestCaseError::fail(format!(
                    "operator {:?} parsed to {:?}", op, other
                )))
            }
        };
        // Re-parse each leaf on its own and compare position-by-position
        let written: Vec<&str> = input[op.len() + 1..input.len() - 1].split(',').collect();
        prop_assert_eq!(parts.len(), written.len());
        for (part, leaf) in parts.iter().zip(&written) {
            prop_assert_eq!(part, &parse_location(leaf).unwrap());
        }
    }

    /// Wrapping any valid term in complement() parses and nests once
    #[test]
    fn test_complement_wraps(input in any_leaf()) {
        let wrapped = format!("complement({})", input);
        let location = parse_location(&wrapped).unwrap();
        match location {
            Location::Complement(inner) => {
                prop_assert_eq!(*inner, parse_location(&input).unwrap());
            }
            other => prop_assert!(false, "expected complement, got {:?}", other),
        }
    }

    /// Parsing the same input twice yields equal values
    #[test]
    fn test_parse_is_deterministic(input in any_leaf()) {
        prop_assert_eq!(
            parse_location(&input).unwrap(),
            parse_location(&input).unwrap()
        );
    }

    /// complement over more than one child is a structural error, not a
    /// truncation
    #[test]
    fn test_complement_arity(first in any_leaf(), second in any_leaf()) {
        let input = format!("complement({},{})", first, second);
        let err = parse_location(&input).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::TooManyChildren);
    }

    /// Unknown operator names are rejected by name, never treated as
    /// accessions or positions
    #[test]
    fn test_unknown_operator_rejected(input in bogus_operator()) {
        let err = parse_location(&input).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::UnrecognizedOperator);
    }

    /// Zero is never a valid coordinate anywhere in a range
    #[test]
    fn test_zero_coordinate_rejected(stop in coordinate()) {
        let err = parse_location(&format!("0..{}", stop)).unwrap_err();
        prop_assert_eq!(err.code(), ErrorCode::MalformedPosition);
    }
}
