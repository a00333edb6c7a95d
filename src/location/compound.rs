//! Composite location algebra
//!
//! A [`Location`] is either a single [`Span`] or a composite built from the
//! three feature-table combinators:
//! - `complement(..)` — reverse strand of its single child
//! - `join(..)` — ordered concatenation of one or more children
//! - `order(..)` — kept as a distinct variant but given identical semantics
//!   to `join` everywhere; feature tables in the wild use the two
//!   interchangeably and no agreed distinct meaning exists for `order`.

use super::span::Span;
use crate::error::{ErrorCode, LocusError};
use serde::{Deserialize, Serialize};

/// A parsed feature location: one span or a composite over spans
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// A single contiguous span
    Span(Span),
    /// Reverse-strand interpretation of the inner location
    Complement(Box<Location>),
    /// Ordered concatenation of sub-locations
    Join(Vec<Location>),
    /// Ordered collection of sub-locations; treated exactly like `Join`
    Order(Vec<Location>),
}

/// One leaf of a location together with its resolved strand
///
/// `reverse` is true when an odd number of `complement` operators wrap the
/// leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub span: &'a Span,
    pub reverse: bool,
}

impl Location {
    /// Wrap a location in a complement
    pub fn complement(inner: Location) -> Self {
        Location::Complement(Box::new(inner))
    }

    /// Build a join from one or more parts, preserving order
    pub fn join(parts: Vec<Location>) -> Result<Self, LocusError> {
        if parts.is_empty() {
            return Err(LocusError::structural(
                ErrorCode::EmptyOperator,
                "join requires at least one sub-location",
            ));
        }
        Ok(Location::Join(parts))
    }

    /// Build an order from one or more parts, preserving order
    pub fn order(parts: Vec<Location>) -> Result<Self, LocusError> {
        if parts.is_empty() {
            return Err(LocusError::structural(
                ErrorCode::EmptyOperator,
                "order requires at least one sub-location",
            ));
        }
        Ok(Location::Order(parts))
    }

    /// All leaf spans in left-to-right (parse) order
    pub fn spans(&self) -> Vec<&Span> {
        let mut out = Vec::new();
        self.collect_spans(&mut out);
        out
    }

    fn collect_spans<'a>(&'a self, out: &mut Vec<&'a Span>) {
        match self {
            Location::Span(span) => out.push(span),
            Location::Complement(inner) => inner.collect_spans(out),
            Location::Join(parts) | Location::Order(parts) => {
                for part in parts {
                    part.collect_spans(out);
                }
            }
        }
    }

    /// All leaf spans in left-to-right order, each with its resolved strand
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut out = Vec::new();
        self.collect_segments(false, &mut out);
        out
    }

    fn collect_segments<'a>(&'a self, reverse: bool, out: &mut Vec<Segment<'a>>) {
        match self {
            Location::Span(span) => out.push(Segment { span, reverse }),
            Location::Complement(inner) => inner.collect_segments(!reverse, out),
            Location::Join(parts) | Location::Order(parts) => {
                for part in parts {
                    part.collect_segments(reverse, out);
                }
            }
        }
    }

    /// Outer envelope over all leaves: lowest start and highest stop
    ///
    /// Returns `None` only for a location with no leaves, which the parser
    /// never produces. Origin-wrapping spans contribute both of their raw
    /// coordinates; a caller that needs unwrapped monotonic ranges on a
    /// circular molecule should walk [`segments`](Self::segments) instead.
    pub fn bounds(&self) -> Option<(u64, u64)> {
        let spans = self.spans();
        let min = spans
            .iter()
            .map(|s| s.outer_start().min(s.outer_stop()))
            .min()?;
        let max = spans
            .iter()
            .map(|s| s.outer_start().max(s.outer_stop()))
            .max()?;
        Some((min, max))
    }

    /// Whether the majority of leaves are on the reverse strand
    pub fn is_reverse(&self) -> bool {
        let segments = self.segments();
        if segments.is_empty() {
            return false;
        }
        segments.iter().filter(|s| s.reverse).count() > segments.len() / 2
    }

    /// Whether any leaf refers to a foreign accession
    pub fn has_cross_reference(&self) -> bool {
        self.spans().iter().any(|s| s.is_cross_reference())
    }
}

impl From<Span> for Location {
    fn from(span: Span) -> Self {
        Location::Span(span)
    }
}
