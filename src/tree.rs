//! An unbalanced Binary Search Tree storing ordered values.
//!
//! The tree is modeled after the recursive definition one would see in a
//! textbook: a tree is either [`Empty`](Tree::Empty) or a node holding a
//! value and two child trees. There is no separate "node pointer" type - an
//! absent child *is* the empty variant sitting in the child slot, so there is
//! never an allocated-but-empty subtree distinguishable from "no child".
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//!
//! assert!(tree.search(&3));
//! assert!(!tree.search(&4));
//!
//! tree.delete(&3).unwrap();
//! assert!(!tree.search(&3));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::{DeleteFromEmptyError, EmptyTreeError};

/// How many columns each level of the [`Display`](fmt::Display) dump is
/// indented relative to its parent.
const INDENT_WIDTH: usize = 5;

/// An unbalanced Binary Search Tree. This can be used for inserting,
/// searching for, and deleting values, and supports the three classical
/// traversal orders. Operations mutate the tree in place.
///
/// Values in a node's left subtree are less than the node's value; values in
/// its right subtree are greater than *or equal to* it - duplicates are
/// routed right rather than rejected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Tree<T> {
    /// The empty tree. Also the state of every absent child slot.
    Empty,
    /// A tree with a root value and two (possibly empty) child trees. This
    /// enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

/// A `Node` has a value and two children. The children are always present as
/// `Tree`s but may be [`Empty`](Tree::Empty).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node<T> {
    value: T,
    left: Box<Tree<T>>,
    right: Box<Tree<T>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: Box::new(Tree::Empty),
            right: Box::new(Tree::Empty),
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Generates a new single-node `Tree` holding the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree = Tree::with_value(5);
    /// assert!(tree.is_leaf());
    /// assert_eq!(tree.value(), Some(&5));
    /// ```
    pub fn with_value(value: T) -> Self {
        Self::Node(Node::new(value))
    }

    /// Returns `true` if this tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the root node's value, or `None` if the tree is empty.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(&node.value),
        }
    }

    /// Returns a view of the left subtree, or `None` if the tree is empty or
    /// has no left child.
    pub fn left(&self) -> Option<&Tree<T>> {
        match self {
            Self::Node(node) if !node.left.is_empty() => Some(&node.left),
            _ => None,
        }
    }

    /// Returns a view of the right subtree, or `None` if the tree is empty
    /// or has no right child.
    pub fn right(&self) -> Option<&Tree<T>> {
        match self {
            Self::Node(node) if !node.right.is_empty() => Some(&node.right),
            _ => None,
        }
    }

    /// Returns `true` if this tree is a single node with no children. The
    /// empty tree is not a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Node(node) if node.left.is_empty() && node.right.is_empty())
    }

    /// Returns `true` if this tree has a left child (which implies the tree
    /// itself is non-empty).
    pub fn has_left(&self) -> bool {
        self.left().is_some()
    }

    /// Returns `true` if this tree has a right child (which implies the tree
    /// itself is non-empty).
    pub fn has_right(&self) -> bool {
        self.right().is_some()
    }

    /// Replaces the root node's value in place.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] when the tree is empty - there is no node
    /// whose value could change. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::with_value(5);
    /// tree.set_value(7).unwrap();
    /// assert_eq!(tree.value(), Some(&7));
    ///
    /// let mut empty: Tree<i32> = Tree::new();
    /// assert!(empty.set_value(7).is_err());
    /// ```
    pub fn set_value(&mut self, value: T) -> Result<(), EmptyTreeError> {
        match self {
            Self::Empty => Err(EmptyTreeError),
            Self::Node(node) => {
                node.value = value;
                Ok(())
            }
        }
    }

    /// Replaces the whole left subtree, dropping whatever was there before.
    /// Passing `None` or an empty tree both clear the child; the two forms
    /// normalize to the same absent-child state.
    ///
    /// Note that this does no ordering checks - like building a tree by hand
    /// in a lecture, it can violate the search invariant if used carelessly.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] when the tree is empty - there is no node
    /// to attach a child to.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::with_value(5);
    /// tree.set_left(Some(Tree::with_value(3))).unwrap();
    /// assert!(tree.has_left());
    ///
    /// // `None` and an empty tree clear the child equivalently.
    /// tree.set_left(Some(Tree::new())).unwrap();
    /// assert!(!tree.has_left());
    /// ```
    pub fn set_left(&mut self, child: Option<Tree<T>>) -> Result<(), EmptyTreeError> {
        match self {
            Self::Empty => Err(EmptyTreeError),
            Self::Node(node) => {
                *node.left = child.unwrap_or_default();
                Ok(())
            }
        }
    }

    /// Replaces the whole right subtree, dropping whatever was there before.
    /// Passing `None` or an empty tree both clear the child; the two forms
    /// normalize to the same absent-child state.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTreeError`] when the tree is empty - there is no node
    /// to attach a child to.
    pub fn set_right(&mut self, child: Option<Tree<T>>) -> Result<(), EmptyTreeError> {
        match self {
            Self::Empty => Err(EmptyTreeError),
            Self::Node(node) => {
                *node.right = child.unwrap_or_default();
                Ok(())
            }
        }
    }

    /// Computes the height of the tree: the number of edges on the longest
    /// path from the root to a leaf. An empty tree has a height of -1 and a
    /// single-node tree has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(5);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(3);
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        match self {
            Self::Empty => -1,
            Self::Node(node) => 1 + node.left.height().max(node.right.height()),
        }
    }

    /// Walks the tree in preorder (root, then left subtree, then right
    /// subtree), passing each value to `visit`. Visiting an empty tree is a
    /// no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let mut visited = Vec::new();
    /// tree.preorder(|v| visited.push(*v));
    /// assert_eq!(visited, vec![5, 3, 1, 4, 8]);
    /// ```
    pub fn preorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.preorder_impl(&mut visit);
    }

    fn preorder_impl<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Self::Node(node) = self {
            visit(&node.value);
            node.left.preorder_impl(visit);
            node.right.preorder_impl(visit);
        }
    }

    /// Walks the tree in order (left subtree, then root, then right
    /// subtree), passing each value to `visit`. By the search invariant the
    /// values arrive in non-decreasing order. Visiting an empty tree is a
    /// no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let mut visited = Vec::new();
    /// tree.inorder(|v| visited.push(*v));
    /// assert_eq!(visited, vec![1, 3, 4, 5, 8]);
    /// ```
    pub fn inorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.inorder_impl(&mut visit);
    }

    fn inorder_impl<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Self::Node(node) = self {
            node.left.inorder_impl(visit);
            visit(&node.value);
            node.right.inorder_impl(visit);
        }
    }

    /// Walks the tree in postorder (left subtree, then right subtree, then
    /// root), passing each value to `visit`. Visiting an empty tree is a
    /// no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let mut visited = Vec::new();
    /// tree.postorder(|v| visited.push(*v));
    /// assert_eq!(visited, vec![1, 4, 3, 8, 5]);
    /// ```
    pub fn postorder<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        self.postorder_impl(&mut visit);
    }

    fn postorder_impl<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        if let Self::Node(node) = self {
            node.left.postorder_impl(visit);
            node.right.postorder_impl(visit);
            visit(&node.value);
        }
    }

    /// Walks the tree in preorder, letting `f` update each node's value in
    /// place. Nothing is emitted.
    ///
    /// Note that an update which does not preserve the relative order of
    /// values (adding a constant does, negating does not) breaks the search
    /// invariant, after which `search`, `insert`, and `delete` misbehave.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<i32> = [5, 3, 8].into_iter().collect();
    /// tree.preorder_mut(|v| *v *= 2);
    ///
    /// let mut visited = Vec::new();
    /// tree.inorder(|v| visited.push(*v));
    /// assert_eq!(visited, vec![6, 10, 16]);
    /// ```
    pub fn preorder_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        self.preorder_mut_impl(&mut f);
    }

    fn preorder_mut_impl<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut T),
    {
        if let Self::Node(node) = self {
            f(&mut node.value);
            node.left.preorder_mut_impl(f);
            node.right.preorder_mut_impl(f);
        }
    }

    /// Walks the tree in order, letting `f` update each node's value in
    /// place. Nothing is emitted. See [`preorder_mut`](Self::preorder_mut)
    /// for the caveat on order-breaking updates.
    pub fn inorder_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        self.inorder_mut_impl(&mut f);
    }

    fn inorder_mut_impl<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut T),
    {
        if let Self::Node(node) = self {
            node.left.inorder_mut_impl(f);
            f(&mut node.value);
            node.right.inorder_mut_impl(f);
        }
    }

    /// Walks the tree in postorder, letting `f` update each node's value in
    /// place. Nothing is emitted. See [`preorder_mut`](Self::preorder_mut)
    /// for the caveat on order-breaking updates.
    pub fn postorder_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        self.postorder_mut_impl(&mut f);
    }

    fn postorder_mut_impl<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut T),
    {
        if let Self::Node(node) = self {
            node.left.postorder_mut_impl(f);
            node.right.postorder_mut_impl(f);
            f(&mut node.value);
        }
    }

    /// Returns the largest value in the tree by following right children,
    /// or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.max_value(), Some(&8));
    /// ```
    pub fn max_value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Node(node) => match &*node.right {
                Tree::Empty => Some(&node.value),
                right => right.max_value(),
            },
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Returns `true` if the tree contains the given value. The search
    /// follows the BST ordering, so it only inspects one root-to-leaf path:
    /// `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<i32> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.search(&3));
    /// assert!(!tree.search(&4));
    /// ```
    pub fn search(&self, target: &T) -> bool {
        match self {
            Self::Empty => false,
            Self::Node(node) => match target.cmp(&node.value) {
                Ordering::Equal => true,
                Ordering::Less => node.left.search(target),
                Ordering::Greater => node.right.search(target),
            },
        }
    }

    /// Inserts the given value, keeping the search invariant. Inserting into
    /// an empty tree turns it into a single-node tree in place. Duplicates
    /// are not rejected; a value equal to the current node's goes right.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    /// tree.insert(3);
    ///
    /// assert!(tree.search(&3));
    /// ```
    pub fn insert(&mut self, value: T) {
        match self {
            Self::Empty => *self = Self::with_value(value),
            Self::Node(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                // Duplicates route right.
                Ordering::Equal | Ordering::Greater => node.right.insert(value),
            },
        }
    }
}

impl<T: Ord + Clone> Tree<T> {
    /// Deletes one occurrence of the given value from the tree. Deleting a
    /// value that is not present is a silent no-op; deleting the last node
    /// reverts the tree to the empty state.
    ///
    /// When the doomed node has two children its value is overwritten with
    /// its in-order predecessor (the largest value of the left subtree) and
    /// that occurrence is then deleted from the left subtree - hence the
    /// `Clone` bound, to copy the predecessor up before removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeleteFromEmptyError`] when the tree is empty; no state
    /// changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// // The root has two children; its predecessor 4 is promoted.
    /// tree.delete(&5).unwrap();
    /// assert_eq!(tree.value(), Some(&4));
    ///
    /// let mut visited = Vec::new();
    /// tree.inorder(|v| visited.push(*v));
    /// assert_eq!(visited, vec![1, 3, 4, 8]);
    /// ```
    pub fn delete(&mut self, target: &T) -> Result<(), DeleteFromEmptyError> {
        if self.is_empty() {
            return Err(DeleteFromEmptyError);
        }
        if let Some(replacement) = self.delete_rec(target) {
            // There is no parent frame above the root to perform the splice,
            // so the root installs its own replacement. An empty replacement
            // reverts the whole tree to the empty state.
            *self = replacement;
        }
        Ok(())
    }

    /// Recursive search-and-splice. Returns `None` when the caller's child
    /// slot needs no change, or `Some(replacement)` when the caller must
    /// install the returned subtree in this one's place. `Some(Tree::Empty)`
    /// means "replace me with nothing" and is deliberately distinct from
    /// `None`.
    fn delete_rec(&mut self, target: &T) -> Option<Tree<T>> {
        let Self::Node(node) = self else {
            // Running off the tree means the value wasn't present.
            return None;
        };
        match target.cmp(&node.value) {
            Ordering::Equal => match (node.left.is_empty(), node.right.is_empty()) {
                (true, true) => Some(Tree::Empty),
                (true, false) => Some(mem::take(&mut *node.right)),
                (false, true) => Some(mem::take(&mut *node.left)),
                (false, false) => {
                    // Promote the in-order predecessor: copy the largest
                    // value of the left subtree into this node, then delete
                    // that occurrence from the left subtree, splicing in its
                    // replacement if it produced one. This node itself stays
                    // put, so the parent has nothing to do.
                    let predecessor = node
                        .left
                        .max_value()
                        .expect("two-children case implies a non-empty left subtree")
                        .clone();
                    node.value = predecessor;
                    if let Some(new_left) = node.left.delete_rec(&node.value) {
                        *node.left = new_left;
                    }
                    None
                }
            },
            Ordering::Less => {
                if let Some(new_left) = node.left.delete_rec(target) {
                    *node.left = new_left;
                }
                None
            }
            Ordering::Greater => {
                if let Some(new_right) = node.right.delete_rec(target) {
                    *node.right = new_right;
                }
                None
            }
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

/// The diagnostic dump: `"Tree is empty"` for the empty tree, otherwise a
/// depth-indented rendering labeling each subtree `Leaf`/`Node` and calling
/// out absent children explicitly.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => writeln!(f, "Tree is empty"),
            Self::Node(_) => self.fmt_at_depth(f, 0),
        }
    }
}

impl<T: fmt::Display> Tree<T> {
    fn fmt_at_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let Self::Node(node) = self else {
            return Ok(());
        };
        let indent = " ".repeat(depth);
        if self.is_leaf() {
            return writeln!(f, "{indent}Leaf: {}", node.value);
        }
        let indent_plus = " ".repeat(depth + INDENT_WIDTH);
        writeln!(f, "{indent}Node: {}", node.value)?;
        if node.left.is_empty() {
            writeln!(f, "{indent_plus}LEFT:  no left child")?;
        } else {
            writeln!(f, "{indent_plus}LEFT:")?;
            node.left.fmt_at_depth(f, depth + INDENT_WIDTH)?;
        }
        if node.right.is_empty() {
            writeln!(f, "{indent_plus}RIGHT:  no right child")
        } else {
            writeln!(f, "{indent_plus}RIGHT:")?;
            node.right.fmt_at_depth(f, depth + INDENT_WIDTH)
        }
    }
}
