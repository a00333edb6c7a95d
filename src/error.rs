//! Error types for ferro-locus
//!
//! This module provides error handling with:
//! - Error codes for categorization
//! - Source span tracking for error location
//! - Caret-highlighted diagnostic messages

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
///
/// These codes can be used for programmatic error handling
/// and for documentation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Parse errors (E1xxx)
    /// Position fragment matches none of the lexical forms
    MalformedPosition = 1001,
    /// Positions parsed but could not be paired into a span
    MalformedLocation = 1002,
    /// Token sequence is not an operator, leaf, `,` or `)`
    UnrecognizedOperator = 1003,
    /// Input ended inside an open operator scope
    UnexpectedEnd = 1004,
    /// A `)` with no matching open operator
    UnbalancedParenthesis = 1005,
    /// Input remained after a complete location was parsed
    TrailingInput = 1006,

    // Structural errors (E2xxx)
    /// Operator received more children than its arity allows
    TooManyChildren = 2001,
    /// Attempted to attach a child to a leaf node
    LeafCannotHaveChildren = 2002,
    /// Operator closed with no children
    EmptyOperator = 2003,
    /// More than one top-level term without a wrapping operator
    AmbiguousRoot = 2004,

    // Limit errors (E3xxx)
    /// Operator nesting exceeded the configured depth limit
    NestingTooDeep = 3001,

    // Extraction errors (E4xxx)
    /// Span coordinates fall outside the source sequence
    SpanOutOfBounds = 4001,
    /// Span names a foreign accession that cannot be resolved locally
    UnresolvedReference = 4002,
    /// Origin-spanning span requested on a linear molecule
    NotCircular = 4003,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::MalformedPosition => "malformed position fragment",
            ErrorCode::MalformedLocation => "malformed location text",
            ErrorCode::UnrecognizedOperator => "unrecognized operator",
            ErrorCode::UnexpectedEnd => "unexpected end of input",
            ErrorCode::UnbalancedParenthesis => "unbalanced parenthesis",
            ErrorCode::TrailingInput => "trailing input after location",
            ErrorCode::TooManyChildren => "operator has too many children",
            ErrorCode::LeafCannotHaveChildren => "leaf cannot have children",
            ErrorCode::EmptyOperator => "operator has no children",
            ErrorCode::AmbiguousRoot => "multiple top-level terms",
            ErrorCode::NestingTooDeep => "operator nesting too deep",
            ErrorCode::SpanOutOfBounds => "span outside sequence bounds",
            ErrorCode::UnresolvedReference => "unresolvable cross-reference",
            ErrorCode::NotCircular => "sequence is not circular",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A span in the source input indicating error location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceSpan {
    /// Starting byte offset (0-indexed)
    pub start: usize,
    /// Ending byte offset (exclusive)
    pub end: usize,
}

impl SourceSpan {
    /// Create a new source span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span for a single position
    pub fn point(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    /// Format the source with the error highlighted
    ///
    /// Returns a string like:
    /// ```text
    /// join(12..78,134..2o2)
    ///             ^~~~~~~~
    /// ```
    pub fn highlight(&self, source: &str) -> String {
        if source.is_empty() {
            return String::new();
        }

        let safe_start = self.start.min(source.len());
        let safe_end = self.end.min(source.len()).max(safe_start);

        let mut pointer = String::with_capacity(source.len() + 4);
        for _ in 0..safe_start {
            pointer.push(' ');
        }
        pointer.push('^');
        for _ in (safe_start + 1)..safe_end {
            pointer.push('~');
        }

        format!("{}\n{}", source, pointer)
    }
}

/// Diagnostic information for a parse error
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostic {
    /// Error code
    pub code: Option<ErrorCode>,
    /// Source span for highlighting
    pub span: Option<SourceSpan>,
    /// The original input (for error display)
    pub source: Option<String>,
    /// Helpful hint
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a new empty diagnostic
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error code
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a source span
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Add the original input
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Add a hint
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Format the diagnostic as a detailed error message
    pub fn format(&self, primary_message: &str) -> String {
        let mut result = String::new();

        if let Some(code) = &self.code {
            result.push_str(&format!("[{}] ", code));
        }

        result.push_str(primary_message);

        if let (Some(span), Some(source)) = (&self.span, &self.source) {
            result.push_str("\n\n");
            result.push_str(&span.highlight(source));
        }

        if let Some(hint) = &self.hint {
            result.push_str("\n\nHint: ");
            result.push_str(hint);
        }

        result
    }
}

/// Main error type for ferro-locus operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocusError {
    /// A position fragment matched none of the four lexical forms
    #[error("malformed position at offset {pos}: {fragment:?}")]
    MalformedPosition {
        pos: usize,
        fragment: String,
        diagnostic: Option<Box<Diagnostic>>,
    },

    /// Position(s) parsed but could not be assembled into a span
    #[error("malformed location at offset {pos}: {msg}")]
    MalformedLocation {
        pos: usize,
        msg: String,
        diagnostic: Option<Box<Diagnostic>>,
    },

    /// Token sequence does not match any operator, leaf, `,` or `)`
    #[error("unrecognized operator at offset {pos}: {found:?}")]
    UnrecognizedOperator {
        pos: usize,
        found: String,
        diagnostic: Option<Box<Diagnostic>>,
    },

    /// Input ended while an operator scope was still open
    #[error("unexpected end of input at offset {pos}")]
    UnexpectedEnd { pos: usize },

    /// A closing parenthesis with no matching open operator
    #[error("unbalanced ')' at offset {pos}")]
    UnbalancedParenthesis { pos: usize },

    /// Unconsumed input after a complete location
    #[error("trailing input at offset {pos}: {found:?}")]
    TrailingInput { pos: usize, found: String },

    /// An operator node received the wrong child cardinality
    #[error("structural violation: {kind} ({msg})")]
    Structural { kind: ErrorCode, msg: String },

    /// Operator nesting exceeded the configured limit
    #[error("operator nesting depth {depth} exceeds limit {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    /// Span coordinates fall outside the source sequence
    #[error("span {start}..{stop} outside sequence of length {len}")]
    SpanOutOfBounds { start: u64, stop: u64, len: u64 },

    /// Span references a foreign accession; extraction cannot dereference it
    #[error("cannot extract span on foreign accession {accession:?}")]
    UnresolvedReference { accession: String },

    /// Origin-spanning span requested on a linear molecule
    #[error("span {start}..{stop} wraps the origin but the sequence is linear")]
    NotCircular { start: u64, stop: u64 },
}

impl LocusError {
    /// Create a structural-violation error
    pub fn structural(kind: ErrorCode, msg: impl Into<String>) -> Self {
        LocusError::Structural {
            kind,
            msg: msg.into(),
        }
    }

    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            LocusError::MalformedPosition { .. } => ErrorCode::MalformedPosition,
            LocusError::MalformedLocation { .. } => ErrorCode::MalformedLocation,
            LocusError::UnrecognizedOperator { .. } => ErrorCode::UnrecognizedOperator,
            LocusError::UnexpectedEnd { .. } => ErrorCode::UnexpectedEnd,
            LocusError::UnbalancedParenthesis { .. } => ErrorCode::UnbalancedParenthesis,
            LocusError::TrailingInput { .. } => ErrorCode::TrailingInput,
            LocusError::Structural { kind, .. } => *kind,
            LocusError::NestingTooDeep { .. } => ErrorCode::NestingTooDeep,
            LocusError::SpanOutOfBounds { .. } => ErrorCode::SpanOutOfBounds,
            LocusError::UnresolvedReference { .. } => ErrorCode::UnresolvedReference,
            LocusError::NotCircular { .. } => ErrorCode::NotCircular,
        }
    }

    /// Check if this error was raised during parsing (as opposed to
    /// structural reduction or extraction)
    pub fn is_parse_error(&self) -> bool {
        (self.code() as u16) < 2000
    }

    /// Get the attached diagnostic, if any
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            LocusError::MalformedPosition { diagnostic, .. }
            | LocusError::MalformedLocation { diagnostic, .. }
            | LocusError::UnrecognizedOperator { diagnostic, .. } => diagnostic.as_deref(),
            _ => None,
        }
    }

    /// Get a formatted error with full diagnostic output
    pub fn detailed_message(&self) -> String {
        match self.diagnostic() {
            Some(d) => d.format(&self.to_string()),
            None => self.to_string(),
        }
    }
}
