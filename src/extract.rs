//! Subsequence extraction
//!
//! Walks a parsed [`Location`] against a [`SequenceProvider`]: leaf spans
//! are extracted left to right and concatenated; a `complement` operator
//! reverse-complements the whole fragment its subtree produced, so
//! `complement(join(a,b))` yields the reverse complement of `a + b`.
//!
//! Cross-accession spans are represented by the model but never
//! dereferenced here; extracting one fails with
//! [`LocusError::UnresolvedReference`]. Origin-wrapping spans
//! (`start > stop`) are delegated to the provider, which wraps on circular
//! molecules and rejects linear ones.

use crate::error::LocusError;
use crate::location::{Location, Span};
use crate::reference::SequenceProvider;

/// Extract the bases covered by `location` from `provider`
///
/// # Example
///
/// ```
/// use ferro_locus::{extract, parse_location, MockProvider};
///
/// let provider = MockProvider::linear("AAACCCGGGTTT");
/// let location = parse_location("join(1..3,10..12)").unwrap();
/// assert_eq!(extract(&location, &provider).unwrap(), b"AAATTT");
/// ```
pub fn extract<P: SequenceProvider>(
    location: &Location,
    provider: &P,
) -> Result<Vec<u8>, LocusError> {
    match location {
        Location::Span(span) => extract_span(span, provider),
        Location::Complement(inner) => {
            let fragment = extract(inner, provider)?;
            Ok(provider.reverse_complement(&fragment))
        }
        Location::Join(parts) | Location::Order(parts) => {
            let mut out = Vec::new();
            for part in parts {
                out.extend_from_slice(&extract(part, provider)?);
            }
            Ok(out)
        }
    }
}

fn extract_span<P: SequenceProvider>(span: &Span, provider: &P) -> Result<Vec<u8>, LocusError> {
    if let Some(accession) = &span.accession {
        return Err(LocusError::UnresolvedReference {
            accession: accession.clone(),
        });
    }
    provider.subseq(span.outer_start(), span.outer_stop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::location::parser::parse_location;
    use crate::reference::MockProvider;

    //                                        1---5----10---15--
    const SEQ: &str = "ATGCATGCATGCATGCAT";

    #[test]
    fn test_extract_simple_span() {
        let provider = MockProvider::linear(SEQ);
        let location = parse_location("2..5").unwrap();
        assert_eq!(extract(&location, &provider).unwrap(), b"TGCA");
    }

    #[test]
    fn test_extract_single_base() {
        let provider = MockProvider::linear(SEQ);
        let location = parse_location("3").unwrap();
        assert_eq!(extract(&location, &provider).unwrap(), b"G");
    }

    #[test]
    fn test_extract_join_concatenates_in_order() {
        let provider = MockProvider::linear(SEQ);
        let location = parse_location("join(1..4,9..12)").unwrap();
        assert_eq!(extract(&location, &provider).unwrap(), b"ATGCATGC");
    }

    #[test]
    fn test_extract_complement_reverse_complements() {
        let provider = MockProvider::linear(SEQ);
        let location = parse_location("complement(1..4)").unwrap();
        // ATGC -> GCAT
        assert_eq!(extract(&location, &provider).unwrap(), b"GCAT");
    }

    #[test]
    fn test_extract_complement_of_join() {
        let provider = MockProvider::linear(SEQ);
        // join first (ATGC + ATGC), then reverse-complement the whole
        let location = parse_location("complement(join(1..4,9..12))").unwrap();
        assert_eq!(extract(&location, &provider).unwrap(), b"GCATGCAT");
    }

    #[test]
    fn test_extract_order_matches_join() {
        let provider = MockProvider::linear(SEQ);
        let joined = parse_location("join(1..4,9..12)").unwrap();
        let ordered = parse_location("order(1..4,9..12)").unwrap();
        assert_eq!(
            extract(&joined, &provider).unwrap(),
            extract(&ordered, &provider).unwrap()
        );
    }

    #[test]
    fn test_extract_fuzzy_span_uses_outer_bounds() {
        let provider = MockProvider::linear(SEQ);
        let location = parse_location("<2..5").unwrap();
        assert_eq!(extract(&location, &provider).unwrap(), b"TGCA");
    }

    #[test]
    fn test_extract_origin_wrap_on_circular() {
        let provider = MockProvider::circular("AAACCCGGGTTT");
        let location = parse_location("10..3").unwrap();
        assert_eq!(extract(&location, &provider).unwrap(), b"TTTAAA");
    }

    #[test]
    fn test_extract_origin_wrap_on_linear_fails() {
        let provider = MockProvider::linear("AAACCCGGGTTT");
        let location = parse_location("10..3").unwrap();
        assert_eq!(
            extract(&location, &provider).unwrap_err().code(),
            ErrorCode::NotCircular
        );
    }

    #[test]
    fn test_extract_out_of_bounds() {
        let provider = MockProvider::linear("ACGT");
        let location = parse_location("2..10").unwrap();
        assert_eq!(
            extract(&location, &provider).unwrap_err().code(),
            ErrorCode::SpanOutOfBounds
        );
    }

    #[test]
    fn test_extract_cross_reference_fails() {
        let provider = MockProvider::linear(SEQ);
        let location = parse_location("AB012345.1:1..4").unwrap();
        let err = extract(&location, &provider).unwrap_err();
        match err {
            LocusError::UnresolvedReference { accession } => {
                assert_eq!(accession, "AB012345.1");
            }
            other => panic!("expected UnresolvedReference, got {:?}", other),
        }
    }
}
