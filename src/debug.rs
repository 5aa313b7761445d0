//! Debug utilities for tree troubleshooting.

use std::fmt::{self, Write as _};

use thiserror::Error;

use super::node::Node;
use super::AvlTree;

/// A broken structural invariant found by [`AvlTree::check_invariants`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("node {value} is out of order with its ancestors")]
    Order { value: String },
    #[error("node {value} has balance factor {balance}")]
    Balance { value: String, balance: i32 },
    #[error("node {value} caches height {cached} but its subtree has height {actual}")]
    Height {
        value: String,
        cached: i32,
        actual: i32,
    },
    #[error("tree reports {reported} elements but {reachable} are reachable")]
    Count { reported: usize, reachable: usize },
}

impl<T: Ord + fmt::Debug> AvlTree<T> {
    /// Verify tree integrity - returns every violation found.
    pub fn check_invariants(&self) -> Vec<Violation> {
        let mut issues = Vec::new();
        let mut reachable = 0usize;
        Self::verify_node(self.root(), None, None, &mut reachable, &mut issues);
        if reachable != self.len() {
            issues.push(Violation::Count {
                reported: self.len(),
                reachable,
            });
        }
        issues
    }

    /// Returns the true height of `node`'s subtree, recording anything wrong below it.
    fn verify_node(
        node: Option<&Node<T>>,
        lower: Option<&T>,
        upper: Option<&T>,
        reachable: &mut usize,
        issues: &mut Vec<Violation>,
    ) -> i32 {
        let Some(node) = node else {
            return -1;
        };
        *reachable += 1;

        let value = node.value();
        let below_lower = lower.is_some_and(|lo| value <= lo);
        let above_upper = upper.is_some_and(|hi| value >= hi);
        if below_lower || above_upper {
            issues.push(Violation::Order {
                value: format!("{value:?}"),
            });
        }

        let lh = Self::verify_node(node.left(), lower, Some(value), reachable, issues);
        let rh = Self::verify_node(node.right(), Some(value), upper, reachable, issues);

        if (lh - rh).abs() > 1 {
            issues.push(Violation::Balance {
                value: format!("{value:?}"),
                balance: lh - rh,
            });
        }
        let actual = lh.max(rh) + 1;
        if node.height() != actual {
            issues.push(Violation::Height {
                value: format!("{value:?}"),
                cached: node.height(),
                actual,
            });
        }
        actual
    }
}

impl<T: fmt::Debug> AvlTree<T> {
    /// Renders the structure, one node per line, children indented below
    /// their parent.
    pub fn debug_string(&self) -> String {
        let mut out = String::new();
        match self.root() {
            Some(root) => Self::debug_node(root, 0, "root", &mut out),
            None => out.push_str("(empty)\n"),
        }
        out
    }

    /// Print the tree structure for debugging.
    pub fn debug_print(&self) {
        println!("=== AVL Debug ===");
        println!("Size: {}", self.len());
        print!("{}", self.debug_string());
        println!("=================");
    }

    fn debug_node(node: &Node<T>, depth: usize, side: &str, out: &mut String) {
        let indent = "  ".repeat(depth);
        let _ = writeln!(
            out,
            "{indent}{side}: {:?} (h={}, bf={})",
            node.value(),
            node.height(),
            node.balance_factor(),
        );
        if let Some(left) = node.left() {
            Self::debug_node(left, depth + 1, "L", out);
        }
        if let Some(right) = node.right() {
            Self::debug_node(right, depth + 1, "R", out);
        }
    }
}
