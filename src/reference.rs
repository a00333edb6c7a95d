//! Sequence-provider collaborator interface
//!
//! The location core never touches sequence data directly. Extraction
//! ([`extract`](crate::extract::extract)) goes through [`SequenceProvider`],
//! which owns the molecule's bases, its topology, and strand complementation.
//! [`MockProvider`] is an in-memory implementation for tests and examples.

use crate::error::LocusError;

/// Access to a source molecule for subsequence extraction
pub trait SequenceProvider {
    /// Number of bases in the molecule
    fn len(&self) -> u64;

    /// Whether the molecule has no bases
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the molecule is circular
    fn is_circular(&self) -> bool;

    /// Extract the 1-based inclusive range `start..=stop`
    ///
    /// When `start > stop` and the molecule is circular, the extracted
    /// range wraps around the origin (`start..=len` followed by
    /// `1..=stop`). On a linear molecule the same request must fail with
    /// [`LocusError::NotCircular`]. Coordinates outside `1..=len` fail
    /// with [`LocusError::SpanOutOfBounds`].
    fn subseq(&self, start: u64, stop: u64) -> Result<Vec<u8>, LocusError>;

    /// Reverse-complement a fragment previously extracted from this
    /// molecule
    fn reverse_complement(&self, fragment: &[u8]) -> Vec<u8>;
}

/// In-memory sequence provider for tests and examples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockProvider {
    sequence: Vec<u8>,
    circular: bool,
}

impl MockProvider {
    /// Create a linear molecule from a base string
    pub fn linear(sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            sequence: sequence.into(),
            circular: false,
        }
    }

    /// Create a circular molecule from a base string
    pub fn circular(sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            sequence: sequence.into(),
            circular: true,
        }
    }
}

/// DNA complement with IUPAC ambiguity codes; case is preserved and
/// unknown bytes pass through unchanged
fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'a' => b't',
        b't' => b'a',
        b'g' => b'c',
        b'c' => b'g',
        b'U' => b'A',
        b'u' => b'a',
        b'R' => b'Y',
        b'Y' => b'R',
        b'r' => b'y',
        b'y' => b'r',
        b'K' => b'M',
        b'M' => b'K',
        b'k' => b'm',
        b'm' => b'k',
        b'B' => b'V',
        b'V' => b'B',
        b'b' => b'v',
        b'v' => b'b',
        b'D' => b'H',
        b'H' => b'D',
        b'd' => b'h',
        b'h' => b'd',
        other => other,
    }
}

impl SequenceProvider for MockProvider {
    fn len(&self) -> u64 {
        self.sequence.len() as u64
    }

    fn is_circular(&self) -> bool {
        self.circular
    }

    fn subseq(&self, start: u64, stop: u64) -> Result<Vec<u8>, LocusError> {
        let len = self.len();
        if start == 0 || stop == 0 || start > len || stop > len {
            return Err(LocusError::SpanOutOfBounds { start, stop, len });
        }
        if start <= stop {
            Ok(self.sequence[(start - 1) as usize..stop as usize].to_vec())
        } else if self.circular {
            let mut out =
                Vec::with_capacity((len - start + 1 + stop) as usize);
            out.extend_from_slice(&self.sequence[(start - 1) as usize..]);
            out.extend_from_slice(&self.sequence[..stop as usize]);
            Ok(out)
        } else {
            Err(LocusError::NotCircular { start, stop })
        }
    }

    fn reverse_complement(&self, fragment: &[u8]) -> Vec<u8> {
        fragment
            .iter()
            .rev()
            .map(|&base| complement_base(base))
            .collect()
    }
}
