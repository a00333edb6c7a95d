//! Position-fragment parsing
//!
//! Parses the lexical fragment between `..` separators into a
//! [`Position`]. Four forms exist: `N`, `<N`/`>N`, `N^M`, `N.M`.
//! The caller splits the location text on `..` first, so a single `.`
//! seen here is always the bounded separator.

use crate::location::position::{FuzzyDirection, Position};
use nom::{character::complete::digit1, IResult, Parser};

/// Parse a 1-based coordinate (unsigned integer >= 1)
///
/// Position 0 is rejected; feature-table coordinates are 1-based.
#[inline]
fn parse_coordinate(input: &str) -> IResult<&str, u64> {
    let (remaining, s) = digit1.parse(input)?;
    // Checked parsing to detect overflow (error instead of silent wrap)
    let base: u64 = s.parse().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit))
    })?;
    if base == 0 {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }
    Ok((remaining, base))
}

/// Parse a single position fragment
///
/// - `N` -> [`Position::Exact`]
/// - `<N` / `>N` -> [`Position::Fuzzy`]
/// - `N^M` -> [`Position::Between`] (endpoints stored as written)
/// - `N.M` -> [`Position::Bounded`] (endpoints stored as written)
///
/// No normalization or swap-if-reversed is applied; the endpoints keep the
/// order given in the input.
#[inline]
pub fn parse_position(input: &str) -> IResult<&str, Position> {
    // <N or >N (fuzzy point)
    if let Some(rest) = input.strip_prefix('<') {
        let (remaining, n) = parse_coordinate(rest)?;
        return Ok((remaining, Position::Fuzzy(FuzzyDirection::Before, n)));
    }
    if let Some(rest) = input.strip_prefix('>') {
        let (remaining, n) = parse_coordinate(rest)?;
        return Ok((remaining, Position::Fuzzy(FuzzyDirection::After, n)));
    }

    let (remaining, a) = parse_coordinate(input)?;

    // N^M (between point)
    if let Some(rest) = remaining.strip_prefix('^') {
        let (remaining, b) = parse_coordinate(rest)?;
        return Ok((remaining, Position::Between(a, b)));
    }

    // N.M (bounded point)
    if let Some(rest) = remaining.strip_prefix('.') {
        let (remaining, b) = parse_coordinate(rest)?;
        return Ok((remaining, Position::Bounded(a, b)));
    }

    Ok((remaining, Position::Exact(a)))
}
