//! Tree nodes, height bookkeeping and the insert/rebalance protocol.

use std::borrow::Borrow;
use std::cmp::Ordering;

use log::trace;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single entry in an [`AvlTree`](crate::AvlTree).
///
/// Nodes are only handed out by shared reference, so every accessor is a
/// read-only view of the structure.
#[derive(Clone)]
pub struct Node<T> {
    value: T,
    /// Height of the subtree rooted here. A leaf has height 0.
    height: i32,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            height: 0,
            left: None,
            right: None,
        })
    }

    /// Assembles a node verbatim, cached height included, so tests can build
    /// trees that break the invariants.
    #[cfg(test)]
    pub(crate) fn from_parts(value: T, height: i32, left: Link<T>, right: Link<T>) -> Box<Self> {
        Box::new(Self {
            value,
            height,
            left,
            right,
        })
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        height(self.left()) - height(self.right())
    }

    #[inline]
    fn update_height(&mut self) {
        self.height = height(self.left()).max(height(self.right())) + 1;
    }
}

/// Height of a possibly absent subtree; absent subtrees have height `-1`.
#[inline]
pub fn height<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(-1, Node::height)
}

/// Balance factor of a possibly absent subtree; absent subtrees are balanced.
#[inline]
pub fn balance<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(0, Node::balance_factor)
}

/// Promotes `node.right` into `node`'s place.
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        debug_assert!(false, "left rotation requires a right child");
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Promotes `node.left` into `node`'s place.
fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        debug_assert!(false, "right rotation requires a left child");
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Restores the AVL balance of `node` after one insertion below it.
///
/// `toward` is the inserted value compared against the value of the child it
/// descended into. On the heavy side it separates the straight-line cases
/// (LL, RR) from the zig-zag ones (LR, RL).
fn rebalance<T>(mut node: Box<Node<T>>, toward: Ordering) -> Box<Node<T>> {
    let bf = node.balance_factor();
    if bf < -1 {
        match toward {
            Ordering::Greater => {
                trace!("right-right imbalance (bf={bf}), rotating left");
                rotate_left(node)
            }
            Ordering::Less => {
                trace!("right-left imbalance (bf={bf}), double rotation");
                node.right = node.right.take().map(rotate_right);
                rotate_left(node)
            }
            Ordering::Equal => node,
        }
    } else if bf > 1 {
        match toward {
            Ordering::Less => {
                trace!("left-left imbalance (bf={bf}), rotating right");
                rotate_right(node)
            }
            Ordering::Greater => {
                trace!("left-right imbalance (bf={bf}), double rotation");
                node.left = node.left.take().map(rotate_left);
                rotate_right(node)
            }
            Ordering::Equal => node,
        }
    } else {
        node
    }
}

/// Inserts `value` below `link` and returns the new subtree root.
///
/// `inserted` is set when a new node was created; duplicates leave the
/// subtree untouched.
pub(crate) fn insert<T: Ord>(link: Link<T>, value: T, inserted: &mut bool) -> Box<Node<T>> {
    let mut node = match link {
        Some(node) => node,
        None => {
            *inserted = true;
            return Node::leaf(value);
        }
    };

    let mut toward = Ordering::Equal;
    match value.cmp(&node.value) {
        Ordering::Less => {
            let left = node.left.take();
            if let Some(child) = &left {
                toward = value.cmp(&child.value);
            }
            node.left = Some(insert(left, value, inserted));
        }
        Ordering::Greater => {
            let right = node.right.take();
            if let Some(child) = &right {
                toward = value.cmp(&child.value);
            }
            node.right = Some(insert(right, value, inserted));
        }
        Ordering::Equal => {}
    }

    let mut node = rebalance(node, toward);
    node.update_height();
    node
}

/// Locates the node holding a value equal to `value`.
pub(crate) fn find<'a, T, Q>(mut link: Option<&'a Node<T>>, value: &Q) -> Option<&'a Node<T>>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    while let Some(node) = link {
        link = match value.cmp(node.value.borrow()) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}
