//! This crate exposes an unbalanced Binary Search Tree (BST)
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, search for, and delete stored values. BSTs are typically defined
//! recursively: a tree is either empty or a node holding a value and two
//! child trees. The most important invariants of this BST are:
//!
//! 1. For every node in the tree, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in the tree, all the nodes in its right subtree have a
//!    value greater than or equal to its own value. Duplicate values are
//!    deliberately routed to the right subtree rather than rejected.
//!
//! > Note that some nodes have no children. These nodes are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root node to a leaf node, with an empty tree having a height
//! of -1 and a lone leaf a height of 0). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! This tree does no rebalancing, so a pathological insertion order (e.g.
//! already-sorted input) degrades the height - and therefore search, insert,
//! and delete - to `O(n)`. That is an accepted property of unbalanced trees,
//! not a defect.

#![deny(missing_docs)]

pub mod error;
pub mod tree;

pub use error::{DeleteFromEmptyError, EmptyTreeError};
pub use tree::Tree;

#[cfg(test)]
pub(crate) mod test;
