//! Self-adjusting (splay) engine.
//!
//! Restructures the tree on every structural mutation: the touched node (or
//! its nearest surviving neighbor after a removal) is rotated to the root
//! through zig / zig-zig / zig-zag steps, and the tree records how many
//! insertions landed deeper than the `2·log2(n)` amortized bound.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::SplayTree;
pub use types::SplayNode;
pub use util::splay_to_root;
