// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-locus: GenBank/INSDC feature-location parser
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Parses feature-table location strings (`join(12..78,134..202)`,
//! `complement(<345..500)`, `AB012345.1:100..200`) into a structured
//! location algebra, and extracts the covered bases from a (possibly
//! circular) source molecule through the [`SequenceProvider`] trait.
//!
//! # Example
//!
//! ```
//! use ferro_locus::{extract, parse_location, MockProvider};
//!
//! // Parse a feature-location string
//! let location = parse_location("complement(join(1..3,7..9))").unwrap();
//!
//! // Walk the leaves in parse order
//! assert_eq!(location.spans().len(), 2);
//!
//! // Extract the covered bases from a molecule: reverse complement of
//! // the joined fragments "ATG" + "TTT"
//! let provider = MockProvider::linear("ATGAAATTTCCC");
//! let bases = extract(&location, &provider).unwrap();
//! assert_eq!(bases, b"AAACAT");
//! ```

pub mod error;
pub mod extract;
pub mod location;
pub mod reference;

// Re-export commonly used types
pub use error::{Diagnostic, ErrorCode, LocusError, SourceSpan};
pub use extract::extract;
pub use location::parser::{parse_location, parse_location_with_config, ParseConfig};
pub use location::{FuzzyDirection, Location, Position, Segment, Span};
pub use reference::{MockProvider, SequenceProvider};

/// Result type alias for ferro-locus operations
pub type Result<T> = std::result::Result<T, LocusError>;
