//! Single rotations. Both run in constant time and only recompute the heights
//! of the two nodes that change position, lower node first.

use tracing::trace;

use crate::node::Node;

/// Promotes the left child `x` of `y`:
///
/// ```text
///       y            x
///      / \          / \
///     x   C   ->   A   y
///    / \              / \
///   A   B            B   C
/// ```
///
/// Returns `y` unchanged when it has no left child.
pub fn right_rotate(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    trace!(pivot = y.key, promoted = x.key, "right rotation");

    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Mirror of [`right_rotate`]: promotes the right child of `x`.
///
/// Returns `x` unchanged when it has no right child.
pub fn left_rotate(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    trace!(pivot = x.key, promoted = y.key, "left rotation");

    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}
