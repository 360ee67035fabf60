/// Owning link to a subtree. `None` is the empty subtree.
pub type Link = Option<Box<Node>>;

/// A tree node: key, cached subtree height and two owned children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: i32,
    /// Height of the subtree rooted here; a leaf has height 1.
    pub(crate) height: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// New nodes are always inserted as leaves.
    pub(crate) fn new(key: i32) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> i32 {
        self.key
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recomputes the cached height from the children's cached heights.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Balance factor, `height(left) - height(right)`.
    pub fn balance(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

/// Height of a subtree, `0` when absent.
#[inline]
pub fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Balance factor of a subtree, `0` when absent.
#[inline]
pub fn balance(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.balance())
}

/// Smallest key of a non-empty subtree (leftmost node).
pub(crate) fn min_key(node: &Node) -> i32 {
    let mut curr = node;
    while let Some(left) = curr.left.as_deref() {
        curr = left;
    }
    curr.key
}
