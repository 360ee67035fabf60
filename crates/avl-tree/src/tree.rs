//! Root-replacing tree operations.
//!
//! The tree is nothing more than a [`Link`] held by the caller. Every mutating
//! operation consumes the current root and hands back the (possibly different)
//! new root, which the caller must store in place of the old one.

use std::cmp::Ordering;

use tracing::debug;

use crate::node::{min_key, Link, Node};
use crate::rebalance::{delete_case, insert_case};

/// Inserts `key`, returning the new root. Inserting a key that is already
/// present leaves the tree unchanged.
pub fn insert(root: Link, key: i32) -> Link {
    let Some(mut node) = root else {
        return Some(Box::new(Node::new(key)));
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = insert(node.left.take(), key),
        Ordering::Greater => node.right = insert(node.right.take(), key),
        Ordering::Equal => {
            debug!(key, "duplicate key ignored");
            return Some(node);
        }
    }

    node.update_height();
    Some(match insert_case(&node, key) {
        Some(rotation) => rotation.apply(node),
        None => node,
    })
}

/// Removes `key`, returning the new root. Removing a missing key leaves the
/// tree unchanged.
///
/// A node with two children takes over the key of its in-order successor,
/// which is then removed from the right subtree.
pub fn delete_node(root: Link, key: i32) -> Link {
    let Some(mut node) = root else {
        debug!(key, "key to delete not found");
        return None;
    };

    let mut node = match key.cmp(&node.key) {
        Ordering::Less => {
            node.left = delete_node(node.left.take(), key);
            node
        }
        Ordering::Greater => {
            node.right = delete_node(node.right.take(), key);
            node
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return None,
            (Some(child), None) | (None, Some(child)) => child,
            (Some(left), Some(right)) => {
                let successor = min_key(&right);
                node.key = successor;
                node.left = Some(left);
                node.right = delete_node(Some(right), successor);
                node
            }
        },
    };

    node.update_height();
    Some(match delete_case(&node) {
        Some(rotation) => rotation.apply(node),
        None => node,
    })
}

/// Releases every node of the tree, children before parents, and returns the
/// number of nodes released.
pub fn delete_tree(root: Link) -> usize {
    let released = release(root);
    debug!(released, "tree released");
    released
}

fn release(link: Link) -> usize {
    let Some(mut node) = link else {
        return 0;
    };
    let left = release(node.left.take());
    let right = release(node.right.take());
    drop(node);
    left + right + 1
}

/// Whether `key` is present.
pub fn find(root: &Link, key: i32) -> bool {
    let mut curr = root.as_deref();
    while let Some(node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return true,
        };
    }
    false
}

/// Keys in ascending order (left, node, right).
pub fn in_order(root: &Link) -> Vec<i32> {
    fn walk(link: &Link, out: &mut Vec<i32>) {
        if let Some(node) = link {
            walk(&node.left, out);
            out.push(node.key);
            walk(&node.right, out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Keys in node, left, right order. Unlike [`in_order`], this reveals the
/// shape of the tree.
pub fn pre_order(root: &Link) -> Vec<i32> {
    fn walk(link: &Link, out: &mut Vec<i32>) {
        if let Some(node) = link {
            out.push(node.key);
            walk(&node.left, out);
            walk(&node.right, out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Number of nodes.
pub fn len(root: &Link) -> usize {
    match root {
        Some(node) => 1 + len(&node.left) + len(&node.right),
        None => 0,
    }
}
