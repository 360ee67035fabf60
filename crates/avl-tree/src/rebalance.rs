//! Case selection for restoring the balance bound at a single node.
//!
//! A node whose balance factor left `[-1, 1]` is repaired by exactly one of
//! four rotations. Insertion picks the case by comparing the inserted key with
//! the heavy child's key; deletion has no such key and picks it from the sign
//! of the heavy child's own balance factor.

use std::fmt;

use tracing::debug;

use crate::node::{balance, Node};
use crate::rotate::{left_rotate, right_rotate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// Single right rotation.
    LeftLeft,
    /// Single left rotation.
    RightRight,
    /// Left-rotate the left child, then right-rotate the node.
    LeftRight,
    /// Right-rotate the right child, then left-rotate the node.
    RightLeft,
}

impl Rotation {
    pub fn name(self) -> &'static str {
        match self {
            Rotation::LeftLeft => "left-left",
            Rotation::RightRight => "right-right",
            Rotation::LeftRight => "left-right",
            Rotation::RightLeft => "right-left",
        }
    }

    /// Applies the rotation to `node`, returning the new subtree root.
    pub fn apply(self, mut node: Box<Node>) -> Box<Node> {
        debug!(key = node.key, case = self.name(), "rebalancing");
        match self {
            Rotation::LeftLeft => right_rotate(node),
            Rotation::RightRight => left_rotate(node),
            Rotation::LeftRight => {
                node.left = node.left.take().map(left_rotate);
                right_rotate(node)
            }
            Rotation::RightLeft => {
                node.right = node.right.take().map(right_rotate);
                left_rotate(node)
            }
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case to apply after inserting `key` below `node`, whose height is current.
pub fn insert_case(node: &Node, key: i32) -> Option<Rotation> {
    let bf = node.balance();
    let left_key = node.left.as_ref().map(|l| l.key);
    let right_key = node.right.as_ref().map(|r| r.key);

    if bf > 1 && left_key.is_some_and(|k| key < k) {
        return Some(Rotation::LeftLeft);
    }
    if bf < -1 && right_key.is_some_and(|k| key > k) {
        return Some(Rotation::RightRight);
    }
    if bf > 1 && left_key.is_some_and(|k| key > k) {
        return Some(Rotation::LeftRight);
    }
    if bf < -1 && right_key.is_some_and(|k| key < k) {
        return Some(Rotation::RightLeft);
    }
    None
}

/// Case to apply after a removal below `node`, whose height is current.
///
/// Ties (`balance(child) == 0`) resolve to the single rotation.
pub fn delete_case(node: &Node) -> Option<Rotation> {
    let bf = node.balance();
    if bf > 1 {
        return Some(if balance(&node.left) >= 0 {
            Rotation::LeftLeft
        } else {
            Rotation::LeftRight
        });
    }
    if bf < -1 {
        return Some(if balance(&node.right) <= 0 {
            Rotation::RightRight
        } else {
            Rotation::RightLeft
        });
    }
    None
}
