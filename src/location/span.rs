//! A single contiguous span on a molecule
//!
//! The span is the leaf of the location algebra: a start point, a stop
//! point, and an optional foreign-accession reference. Composite locations
//! (`complement`, `join`, `order`) are built on top of spans in
//! [`compound`](crate::location::compound).

use super::position::{FuzzyDirection, Position};
use serde::{Deserialize, Serialize};

/// One contiguous span, optionally on a named foreign sequence
///
/// On a circular molecule, `start.low() > stop.high()` denotes a span that
/// wraps around the origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start point of the span
    pub start: Position,
    /// Stop point of the span
    pub stop: Position,
    /// Foreign accession this span refers to, if any (`AB012345.1:100..200`)
    pub accession: Option<String>,
}

impl Span {
    /// Create a span from explicit start and stop points
    pub fn new(start: Position, stop: Position) -> Self {
        Self {
            start,
            stop,
            accession: None,
        }
    }

    /// Create a span on a foreign accession
    pub fn with_accession(start: Position, stop: Position, accession: impl Into<String>) -> Self {
        Self {
            start,
            stop,
            accession: Some(accession.into()),
        }
    }

    /// Create a single-base span from two exact coordinates
    pub fn exact(start: u64, stop: u64) -> Self {
        Self::new(Position::Exact(start), Position::Exact(stop))
    }

    /// Pair a parsed start point with an optional stop point
    ///
    /// When no stop was written (`467`, `102.110`, `>10`), the missing half
    /// is synthesized:
    /// - a point with both bounds stands in for both ends of the span;
    /// - `>n` keeps its known lower bound as the stop (`stop = n`);
    /// - `<n` swaps roles: the start becomes the known upper bound and the
    ///   fuzzy point moves to the stop.
    pub fn from_positions(start: Position, stop: Option<Position>, accession: Option<String>) -> Self {
        let (start, stop) = match stop {
            Some(stop) => (start, stop),
            None if start.has_definite_start() && start.has_definite_stop() => (start, start),
            None => match start {
                Position::Fuzzy(FuzzyDirection::After, n) => (start, Position::Exact(n)),
                Position::Fuzzy(FuzzyDirection::Before, n) => (Position::Exact(n), start),
                // Exact/Between/Bounded all have both bounds; handled above.
                other => (other, other),
            },
        };
        Self {
            start,
            stop,
            accession,
        }
    }

    /// The lowest coordinate covered by this span
    pub fn outer_start(&self) -> u64 {
        self.start.low()
    }

    /// The highest coordinate covered by this span
    pub fn outer_stop(&self) -> u64 {
        self.stop.high()
    }

    /// Whether this span refers to a foreign accession
    pub fn is_cross_reference(&self) -> bool {
        self.accession.is_some()
    }

    /// Whether this span wraps around the origin of a circular molecule
    /// (textual start exceeds stop)
    pub fn wraps_origin(&self) -> bool {
        self.outer_start() > self.outer_stop()
    }

    /// Number of bases covered, counting the outer envelope
    ///
    /// Returns 0 for origin-wrapping spans; their length depends on the
    /// molecule and is computed by the extraction layer.
    pub fn len(&self) -> u64 {
        if self.wraps_origin() {
            0
        } else {
            self.outer_stop() - self.outer_start() + 1
        }
    }

    /// Whether the outer envelope covers no bases
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
