//! Invariant violations reported by the tree validators.

use thiserror::Error;

/// Structural defect found by [`crate::base::assert_linked_order`] or
/// [`crate::avl::assert_avl_tree`].
///
/// The validators are diagnostics for tests and debugging; the mutation
/// paths themselves never return these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root node {0} has a parent link")]
    RootHasParent(u32),
    #[error("parent link of node {child} does not point back to node {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("key order violated between node {prev} and node {next}")]
    OrderViolated { prev: u32, next: u32 },
    #[error("node {node} stores height {stored} but its subtree has height {computed}")]
    HeightMismatch { node: u32, stored: u32, computed: u32 },
    #[error("balance factor {bf} at node {node} is outside -1..=1")]
    BalanceViolated { node: u32, bf: i32 },
}
