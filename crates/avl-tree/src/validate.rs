//! Structural invariant checks.

use thiserror::Error;

use crate::node::{height, Link, Node};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("keys out of order: {prev} is followed by {next}")]
    OrderViolated { prev: i32, next: i32 },
    #[error("node {key} stores height {actual}, expected {expected}")]
    HeightMismatch { key: i32, expected: i32, actual: i32 },
    #[error("node {key} is unbalanced (balance factor {balance})")]
    Unbalanced { key: i32, balance: i32 },
}

/// Checks strict key ordering, stored heights and the balance bound over the
/// whole tree.
pub fn assert_avl_tree(root: &Link) -> Result<(), InvariantError> {
    let mut prev = None;
    check(root.as_deref(), &mut prev)?;
    Ok(())
}

/// Validates the subtree in order, threading the previously visited key, and
/// returns its recomputed height.
fn check(node: Option<&Node>, prev: &mut Option<i32>) -> Result<i32, InvariantError> {
    let Some(node) = node else {
        return Ok(0);
    };

    let lh = check(node.left(), prev)?;
    if let Some(p) = *prev {
        if p >= node.key {
            return Err(InvariantError::OrderViolated {
                prev: p,
                next: node.key,
            });
        }
    }
    *prev = Some(node.key);
    let rh = check(node.right(), prev)?;

    let expected = 1 + lh.max(rh);
    if node.height != expected {
        return Err(InvariantError::HeightMismatch {
            key: node.key,
            expected,
            actual: node.height,
        });
    }
    // Stored child heights are verified above, so this agrees with `lh - rh`.
    let balance = height(&node.left) - height(&node.right);
    if !(-1..=1).contains(&balance) {
        return Err(InvariantError::Unbalanced {
            key: node.key,
            balance,
        });
    }
    Ok(expected)
}
