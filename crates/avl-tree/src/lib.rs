//! Height-balanced (AVL) binary search tree over `i32` keys.
//!
//! The tree has no handle type of its own: it is the [`Link`] to its root,
//! owned by the caller. Mutating operations consume the current root and
//! return the new one, so the caller always reassigns:
//!
//! ```
//! use avl_tree::{delete_node, find, in_order, insert, Link};
//!
//! let mut root: Link = None;
//! for key in [10, 20, 30] {
//!     root = insert(root, key);
//! }
//! // The right-right case promoted 20.
//! assert_eq!(root.as_deref().map(|n| n.key()), Some(20));
//!
//! root = delete_node(root, 20);
//! assert_eq!(in_order(&root), vec![10, 30]);
//! assert!(!find(&root, 20));
//! ```
//!
//! After every `insert` and `delete_node`, each node satisfies
//! `|height(left) - height(right)| <= 1`, keys are strictly ordered, and the
//! cached heights are exact. Duplicate inserts and deletes of missing keys are
//! no-ops.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`Node`], [`Link`], height and balance factor |
//! | [`rotate`] | single left / right rotations |
//! | [`rebalance`] | the four rebalancing cases and how each path picks one |
//! | [`tree`] | `insert`, `delete_node`, `delete_tree`, `find`, traversals |
//! | [`validate`] | invariant checker |
//! | [`print`] | text rendering of lookups, traversals and tree shape |
//! | [`cli`] | command-script interpreter behind the `avl-tree` binary |

pub mod cli;
pub mod node;
pub mod print;
pub mod rebalance;
pub mod rotate;
pub mod tree;
pub mod validate;

pub use node::{balance, height, Link, Node};
pub use rebalance::Rotation;
pub use tree::{delete_node, delete_tree, find, in_order, insert, len, pre_order};
pub use validate::{assert_avl_tree, InvariantError};
