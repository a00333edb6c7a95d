//! GenBank/INSDC feature-location model and grammar parser
//!
//! The model layers leaves-first: [`Position`] is a single coordinate with
//! one of four certainty semantics, [`Span`] pairs two positions into a
//! contiguous range (optionally on a foreign accession), and [`Location`]
//! composes spans with the `complement`/`join`/`order` combinators.
//!
//! [`parser`] turns a feature-table location string into a [`Location`].

pub mod compound;
pub mod parser;
pub mod position;
pub mod span;

pub use compound::{Location, Segment};
pub use position::{FuzzyDirection, Position};
pub use span::Span;
