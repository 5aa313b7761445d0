//! # avl-rs
//!
//! A height-balanced binary search tree (AVL tree) with ordered insertion.
//!
//! Every insertion rebalances the path back to the root with at most one
//! single or double rotation, keeping the height within `1.44 * log2(n + 2)`.
//! Nodes expose their value, cached height and children through read-only
//! accessors so rendering code can walk the structure without being able to
//! break it.
//!
//! ## Example
//!
//! ```rust
//! use avl_rs::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.insert(10);
//! tree.insert(20);
//! tree.insert(30);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(*root.value(), 20);
//! assert_eq!(root.height(), 1);
//! assert_eq!(root.left().map(|n| *n.value()), Some(10));
//! assert_eq!(root.right().map(|n| *n.value()), Some(30));
//! ```

#![deny(unsafe_code)]

mod debug;
mod key;
mod node;

use std::borrow::Borrow;
use std::fmt;

pub use debug::Violation;
pub use key::{FiniteF64, KeyError};
pub use node::{balance, height, Node};

use node::Link;

/// An ordered set of unique values kept as an AVL tree.
///
/// The tree is a plain caller-owned value; all mutation goes through
/// `&mut self`.
pub struct AvlTree<T> {
    root: Link<T>,
    count: usize,
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Height of the whole tree: `-1` when empty, `0` for a single node.
    #[inline]
    pub fn height(&self) -> i32 {
        height(self.root())
    }

    #[inline]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.count = 0;
    }

    /// Smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// Largest value in the tree.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// Ascending iterator over the values.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.count,
        };
        iter.push_left_spine(self.root());
        iter
    }
}

impl<T: Ord> AvlTree<T> {
    /// Inserts `value`, rebalancing on the way back up.
    ///
    /// Returns `false` and leaves the tree untouched if an equal value is
    /// already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Some(node::insert(self.root.take(), value, &mut inserted));
        if inserted {
            self.count += 1;
        } else {
            log::debug!("duplicate insert ignored");
        }
        inserted
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(value).is_some()
    }

    /// Node holding a value equal to `value`, if any.
    pub fn find<Q>(&self, value: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node::find(self.root(), value)
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for AvlTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            count: self.count,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator; the stack holds the ancestors still to be yielded.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}


#[cfg(test)]
mod proptests;
