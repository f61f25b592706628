//! Self-balancing binary search trees over a shared arena-backed ordered
//! tree base.
//!
//! Two rebalancing strategies over the same node-link abstraction:
//!
//! - [`avl`] — height-balanced: every node keeps
//!   `|height(l) - height(r)| <= 1`, restored by the four canonical
//!   LL / LR / RL / RR rotations after each insert and removal.
//! - [`splay`] — self-adjusting: every structural mutation rotates the
//!   touched node (or its nearest surviving neighbor) to the root through
//!   zig / zig-zig / zig-zag steps, and the tree tracks how many
//!   insertions landed deeper than the `2·log2(n)` amortized bound.
//!
//! Instead of raw pointers, all links are `Option<u32>` indices into a
//! `Vec`-backed arena owned by the tree; the parent link is a non-owning
//! back reference. Rotations are pure index relinking — no node is copied
//! or moved. Trees are single-threaded; callers serialize access.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] and [`KvNode`] link traits |
//! | [`base`] | unbalanced find / insert / detach and in-order traversal |
//! | [`avl`] | [`AvlTree`], height bookkeeping and rotations |
//! | [`splay`] | [`SplayTree`], splay steps and the bad-insert statistic |
//! | [`error`] | [`InvariantError`] reported by the validators |

pub mod avl;
pub mod base;
pub mod error;
pub mod splay;
pub mod types;

pub use avl::AvlTree;
pub use error::InvariantError;
pub use splay::SplayTree;
pub use types::{KvNode, Node};
