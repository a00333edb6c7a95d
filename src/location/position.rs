//! Point types for single coordinates along a molecule
//!
//! GenBank feature locations use four kinds of point, differing in how
//! certain the coordinate is:
//! - Exact: a single definite base (`467`)
//! - Fuzzy: only a bound is known (`<345`, `>202`)
//! - Between: a zero-width insertion point between adjacent bases (`123^124`)
//! - Bounded: a single base somewhere within a range (`102.110`)
//!
//! All coordinates are 1-based along a linear or circular molecule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a fuzzy point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuzzyDirection {
    /// `<n`: the true position is at or before `n` (lower bound unknown)
    Before,
    /// `>n`: the true position is at or after `n` (upper bound unknown)
    After,
}

/// A single coordinate along a molecule
///
/// The definite-start/definite-stop predicates drive span assembly: a point
/// that lacks one of its bounds cannot serve alone as both ends of a span,
/// so [`Span::from_positions`](crate::location::Span::from_positions)
/// synthesizes the missing half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// A single definite base
    Exact(u64),
    /// A coordinate known only to be before/after a given base
    Fuzzy(FuzzyDirection, u64),
    /// A zero-width insertion point between bases `a` and `b` (`a^b`)
    Between(u64, u64),
    /// A single base known only to lie within `[a, b]` (`a.b`)
    Bounded(u64, u64),
}

impl Position {
    /// Whether this point has a definite numeric start
    ///
    /// Only `<n` lacks one: its true position may lie anywhere at or
    /// before `n`.
    pub fn has_definite_start(&self) -> bool {
        !matches!(self, Position::Fuzzy(FuzzyDirection::Before, _))
    }

    /// Whether this point has a definite numeric stop
    ///
    /// Only `>n` lacks one: its true position may lie anywhere at or
    /// after `n`.
    pub fn has_definite_stop(&self) -> bool {
        !matches!(self, Position::Fuzzy(FuzzyDirection::After, _))
    }

    /// The lowest coordinate this point can refer to
    pub fn low(&self) -> u64 {
        match self {
            Position::Exact(n) | Position::Fuzzy(_, n) => *n,
            Position::Between(a, _) | Position::Bounded(a, _) => *a,
        }
    }

    /// The highest coordinate this point can refer to
    pub fn high(&self) -> u64 {
        match self {
            Position::Exact(n) | Position::Fuzzy(_, n) => *n,
            Position::Between(_, b) | Position::Bounded(_, b) => *b,
        }
    }

    /// Whether this point carries any uncertainty
    pub fn is_exact(&self) -> bool {
        matches!(self, Position::Exact(_))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Exact(n) => write!(f, "{}", n),
            Position::Fuzzy(FuzzyDirection::Before, n) => write!(f, "<{}", n),
            Position::Fuzzy(FuzzyDirection::After, n) => write!(f, ">{}", n),
            Position::Between(a, b) => write!(f, "{}^{}", a, b),
            Position::Bounded(a, b) => write!(f, "{}.{}", a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_has_both_bounds() {
        let p = Position::Exact(467);
        assert!(p.has_definite_start());
        assert!(p.has_definite_stop());
        assert_eq!(p.low(), 467);
        assert_eq!(p.high(), 467);
        assert!(p.is_exact());
    }

    #[test]
    fn test_fuzzy_before_lacks_start() {
        let p = Position::Fuzzy(FuzzyDirection::Before, 345);
        assert!(!p.has_definite_start());
        assert!(p.has_definite_stop());
        assert_eq!(p.low(), 345);
        assert_eq!(p.high(), 345);
    }

    #[test]
    fn test_fuzzy_after_lacks_stop() {
        let p = Position::Fuzzy(FuzzyDirection::After, 10);
        assert!(p.has_definite_start());
        assert!(!p.has_definite_stop());
    }

    #[test]
    fn test_between_and_bounded_have_both_bounds() {
        let between = Position::Between(123, 124);
        assert!(between.has_definite_start());
        assert!(between.has_definite_stop());
        assert_eq!(between.low(), 123);
        assert_eq!(between.high(), 124);

        let bounded = Position::Bounded(102, 110);
        assert!(bounded.has_definite_start());
        assert!(bounded.has_definite_stop());
        assert_eq!(bounded.low(), 102);
        assert_eq!(bounded.high(), 110);
        assert!(!bounded.is_exact());
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::Exact(467).to_string(), "467");
        assert_eq!(
            Position::Fuzzy(FuzzyDirection::Before, 345).to_string(),
            "<345"
        );
        assert_eq!(
            Position::Fuzzy(FuzzyDirection::After, 202).to_string(),
            ">202"
        );
        assert_eq!(Position::Between(123, 124).to_string(), "123^124");
        assert_eq!(Position::Bounded(102, 110).to_string(), "102.110");
    }
}
