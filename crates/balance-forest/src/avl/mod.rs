//! Height-balanced (AVL) engine.
//!
//! Each node carries its exact subtree height; every insert and removal
//! runs a fix-up pass that repairs heights along the mutation path and
//! restores `|height(l) - height(r)| <= 1` through the four canonical
//! rotations.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, balance_of, rebalance};
