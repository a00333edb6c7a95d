//! Feature-location grammar parser
//!
//! Recursive descent over the feature-table location grammar:
//!
//! ```text
//! location_string := term (',' term)*
//! term            := 'complement(' location_string ')'
//!                  | 'join('       location_string ')'
//!                  | 'order('      location_string ')'
//!                  | leaf
//! leaf            := [accession ':'] position ('..' position)?
//! ```
//!
//! Parsing builds a short-lived [`tree::Node`] tree and collapses it into a
//! [`Location`]. Unrecognized tokens, trailing input and unbalanced
//! parentheses are hard errors; there is no partial-result mode. Recursion
//! depth is bounded by [`ParseConfig::max_depth`] so pathological nesting
//! fails with a typed error instead of exhausting the stack.

pub mod position;
pub(crate) mod tree;

use crate::error::{Diagnostic, ErrorCode, LocusError, SourceSpan};
use crate::location::compound::Location;
use crate::location::span::Span;
use crate::location::Position;
use memchr::{memchr, memchr3};
use tree::Node;

/// Default operator nesting limit
///
/// Feature tables nest fewer than 10 operators in practice; 32 leaves
/// generous headroom while keeping adversarial input bounded.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum operator nesting depth before parsing fails
    pub max_depth: usize,
    /// Strip ASCII whitespace before parsing
    ///
    /// Flatfile locations wrap across continuation lines, so embedded
    /// whitespace is common in strings lifted straight from a record.
    /// Strict mode (the default) rejects it at the offending offset.
    pub strip_whitespace: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strip_whitespace: false,
        }
    }
}

impl ParseConfig {
    /// Strict configuration (the default)
    pub fn strict() -> Self {
        Self::default()
    }

    /// Permissive configuration: strip embedded whitespace before parsing
    pub fn permissive() -> Self {
        Self {
            strip_whitespace: true,
            ..Self::default()
        }
    }

    /// Override the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parse a feature-location string into a [`Location`]
///
/// Uses the strict default configuration. For whitespace-tolerant parsing
/// or a custom depth limit, use [`parse_location_with_config`].
///
/// # Example
///
/// ```
/// use ferro_locus::parse_location;
///
/// let location = parse_location("complement(join(12..78,134..202))").unwrap();
/// assert_eq!(location.spans().len(), 2);
/// ```
pub fn parse_location(input: &str) -> Result<Location, LocusError> {
    parse_location_with_config(input, ParseConfig::default())
}

/// Parse a feature-location string with explicit configuration
///
/// With [`ParseConfig::permissive`], error offsets refer to the
/// whitespace-stripped input.
pub fn parse_location_with_config(
    input: &str,
    config: ParseConfig,
) -> Result<Location, LocusError> {
    let stripped;
    let src = if config.strip_whitespace && input.bytes().any(|b| b.is_ascii_whitespace()) {
        stripped = input.split_ascii_whitespace().collect::<String>();
        stripped.as_str()
    } else {
        input
    };

    if src.is_empty() {
        return Err(LocusError::UnexpectedEnd { pos: 0 });
    }

    let (at, mut children) = parse_term_list(src, 0, 0, config.max_depth)?;

    if at != src.len() {
        return Err(if src.as_bytes()[at] == b')' {
            LocusError::UnbalancedParenthesis { pos: at }
        } else {
            LocusError::TrailingInput {
                pos: at,
                found: src[at..].chars().take(16).collect(),
            }
        });
    }

    if children.len() > 1 {
        return Err(LocusError::structural(
            ErrorCode::AmbiguousRoot,
            "multiple top-level terms; wrap them in join(..) or order(..)",
        ));
    }
    children
        .pop()
        .ok_or(LocusError::UnexpectedEnd { pos: 0 })?
        .reduce()
}

/// Parse `term (',' term)*` starting at `at`; returns the offset of the
/// first unconsumed byte and the parsed sibling nodes
fn parse_term_list(
    src: &str,
    mut at: usize,
    depth: usize,
    max_depth: usize,
) -> Result<(usize, Vec<Node>), LocusError> {
    let mut children = Vec::new();
    loop {
        let (next, node) = parse_term(src, at, depth, max_depth)?;
        children.push(node);
        at = next;
        if src.as_bytes().get(at) == Some(&b',') {
            at += 1;
            continue;
        }
        return Ok((at, children));
    }
}

/// Parse one term: an operator call or a leaf span
fn parse_term(
    src: &str,
    at: usize,
    depth: usize,
    max_depth: usize,
) -> Result<(usize, Node), LocusError> {
    if depth > max_depth {
        return Err(LocusError::NestingTooDeep {
            depth,
            limit: max_depth,
        });
    }

    let rest = &src[at..];
    if rest.is_empty() {
        return Err(LocusError::UnexpectedEnd { pos: at });
    }

    let operator = if let Some(tail) = rest.strip_prefix("complement(") {
        Some((rest.len() - tail.len(), Node::Complement(Vec::new())))
    } else if let Some(tail) = rest.strip_prefix("join(") {
        Some((rest.len() - tail.len(), Node::Join(Vec::new())))
    } else if let Some(tail) = rest.strip_prefix("order(") {
        Some((rest.len() - tail.len(), Node::Order(Vec::new())))
    } else {
        None
    };

    match operator {
        Some((keyword_len, mut node)) => {
            let body = at + keyword_len;
            if src.as_bytes().get(body) == Some(&b')') {
                return Err(LocusError::structural(
                    ErrorCode::EmptyOperator,
                    "operator must contain at least one sub-location",
                ));
            }
            let (after, children) = parse_term_list(src, body, depth + 1, max_depth)?;
            for child in children {
                node.push(child)?;
            }
            match src.as_bytes().get(after) {
                Some(b')') => Ok((after + 1, node)),
                Some(_) => Err(unrecognized(src, after, next_char(src, after))),
                None => Err(LocusError::UnexpectedEnd { pos: after }),
            }
        }
        None => parse_leaf(src, at),
    }
}

/// Parse one leaf: `[accession ':'] position ('..' position)?`
fn parse_leaf(src: &str, at: usize) -> Result<(usize, Node), LocusError> {
    let rest = &src[at..];
    let end = memchr3(b',', b')', b'(', rest.as_bytes()).unwrap_or(rest.len());

    // A '(' terminator means the text before it was an operator call with
    // a name the grammar does not know.
    if rest.as_bytes().get(end) == Some(&b'(') {
        return Err(unrecognized(src, at, &rest[..end]));
    }

    let text = &rest[..end];
    if text.is_empty() {
        return Err(unrecognized(src, at, next_char(src, at)));
    }

    let span = assemble_span(src, at, text)?;
    Ok((at + end, Node::Leaf(span)))
}

/// Assemble the leaf text into a [`Span`]: split off the optional
/// accession prefix, split on `..`, parse each fragment, and pair the
/// points per the span rules
fn assemble_span(src: &str, at: usize, text: &str) -> Result<Span, LocusError> {
    let (accession, pos_text, pos_offset) = match memchr(b':', text.as_bytes()) {
        Some(colon) => {
            let accession = &text[..colon];
            if !is_valid_accession(accession) {
                return Err(LocusError::MalformedLocation {
                    pos: at,
                    msg: format!("invalid accession {:?}", accession),
                    diagnostic: Some(Box::new(
                        Diagnostic::new()
                            .with_code(ErrorCode::MalformedLocation)
                            .with_source(src)
                            .with_span(SourceSpan::new(at, at + colon)),
                    )),
                });
            }
            (Some(accession.to_string()), &text[colon + 1..], colon + 1)
        }
        None => (None, text, 0),
    };

    let (start_fragment, stop_fragment) = match pos_text.find("..") {
        Some(sep) => {
            let stop = &pos_text[sep + 2..];
            if stop.contains("..") {
                return Err(LocusError::MalformedLocation {
                    pos: at,
                    msg: "more than one '..' separator".to_string(),
                    diagnostic: Some(Box::new(
                        Diagnostic::new()
                            .with_code(ErrorCode::MalformedLocation)
                            .with_source(src)
                            .with_span(SourceSpan::new(at, at + text.len())),
                    )),
                });
            }
            (&pos_text[..sep], Some(stop))
        }
        None => (pos_text, None),
    };

    let start = parse_fragment(src, at + pos_offset, start_fragment)?;
    let stop = match stop_fragment {
        Some(fragment) => Some(parse_fragment(
            src,
            at + pos_offset + start_fragment.len() + 2,
            fragment,
        )?),
        None => None,
    };

    Ok(Span::from_positions(start, stop, accession))
}

/// Parse a single position fragment, requiring it to be consumed entirely
fn parse_fragment(src: &str, at: usize, fragment: &str) -> Result<Position, LocusError> {
    match position::parse_position(fragment) {
        Ok(("", pos)) => Ok(pos),
        _ => Err(LocusError::MalformedPosition {
            pos: at,
            fragment: fragment.to_string(),
            diagnostic: Some(Box::new(
                Diagnostic::new()
                    .with_code(ErrorCode::MalformedPosition)
                    .with_source(src)
                    .with_span(SourceSpan::new(at, at + fragment.len().max(1)))
                    .with_hint("expected one of: N, N..M, <N, >N, N^M, N.M"),
            )),
        }),
    }
}

/// Accessions are ASCII alphanumerics plus `._-`, with at least one
/// alphanumeric character
fn is_valid_accession(accession: &str) -> bool {
    !accession.is_empty()
        && accession
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
        && accession.bytes().any(|b| b.is_ascii_alphanumeric())
}

/// The single character at `at`, respecting UTF-8 boundaries
fn next_char(src: &str, at: usize) -> &str {
    match src[at..].chars().next() {
        Some(c) => &src[at..at + c.len_utf8()],
        None => "",
    }
}

fn unrecognized(src: &str, at: usize, found: &str) -> LocusError {
    LocusError::UnrecognizedOperator {
        pos: at,
        found: found.to_string(),
        diagnostic: Some(Box::new(
            Diagnostic::new()
                .with_code(ErrorCode::UnrecognizedOperator)
                .with_source(src)
                .with_span(SourceSpan::new(at, at + found.len().max(1)))
                .with_hint("known operators are complement(..), join(..) and order(..)"),
        )),
    }
}
