//! Error types reported by tree operations.
//!
//! Every error here is locally recoverable: a rejected operation leaves the
//! tree exactly as it was. Note that failing to find a value is *not* an
//! error - [`search`](crate::Tree::search) returns `false` and
//! [`delete`](crate::Tree::delete) of an absent value is a no-op, since a
//! membership miss is an expected outcome.

use thiserror::Error;

/// Returned when a value- or child-mutating operation targets an empty tree.
/// There is no node to modify, so there is nothing the operation could do.
///
/// Callers that want to avoid this can check
/// [`is_empty`](crate::Tree::is_empty) first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("empty tree has no node to modify")]
pub struct EmptyTreeError;

/// Returned when [`delete`](crate::Tree::delete) is invoked on an empty
/// tree. The tree is left unchanged (and empty).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("cannot remove a value from an empty tree")]
pub struct DeleteFromEmptyError;
