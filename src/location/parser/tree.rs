//! Intermediate parse tree
//!
//! The grammar parser builds a short-lived tree of operator nodes, then
//! collapses it bottom-up into a [`Location`] value. Nodes own their
//! children outright; there are no parent back-references and the tree is
//! discarded as soon as [`Node::reduce`] returns.
//!
//! Child-cardinality rules are enforced at [`Node::push`] time:
//! - a leaf accepts zero children;
//! - `complement` accepts exactly one;
//! - `join`/`order` accept one or more.

use crate::error::{ErrorCode, LocusError};
use crate::location::compound::Location;
use crate::location::span::Span;

/// One node of the intermediate parse tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    /// A parsed leaf span
    Leaf(Span),
    /// `complement(..)` operator
    Complement(Vec<Node>),
    /// `join(..)` operator
    Join(Vec<Node>),
    /// `order(..)` operator
    Order(Vec<Node>),
}

impl Node {
    /// Attach a child, enforcing this node's cardinality rule
    pub(crate) fn push(&mut self, child: Node) -> Result<(), LocusError> {
        match self {
            Node::Leaf(_) => Err(LocusError::structural(
                ErrorCode::LeafCannotHaveChildren,
                "a position span cannot contain sub-locations",
            )),
            Node::Complement(children) => {
                if children.is_empty() {
                    children.push(child);
                    Ok(())
                } else {
                    Err(LocusError::structural(
                        ErrorCode::TooManyChildren,
                        "complement takes exactly one sub-location",
                    ))
                }
            }
            Node::Join(children) | Node::Order(children) => {
                children.push(child);
                Ok(())
            }
        }
    }

    /// Collapse this node (and its subtree) into a location value
    pub(crate) fn reduce(self) -> Result<Location, LocusError> {
        match self {
            Node::Leaf(span) => Ok(Location::Span(span)),
            Node::Complement(children) => {
                let mut children = children;
                let inner = children.pop().ok_or_else(|| {
                    LocusError::structural(
                        ErrorCode::EmptyOperator,
                        "complement requires a sub-location",
                    )
                })?;
                Ok(Location::complement(inner.reduce()?))
            }
            Node::Join(children) => {
                let parts = children
                    .into_iter()
                    .map(Node::reduce)
                    .collect::<Result<Vec<_>, _>>()?;
                Location::join(parts)
            }
            Node::Order(children) => {
                let parts = children
                    .into_iter()
                    .map(Node::reduce)
                    .collect::<Result<Vec<_>, _>>()?;
                Location::order(parts)
            }
        }
    }
}
