//! Node trait definitions shared by both engines.
//!
//! Nodes live in a `Vec`-backed arena owned by the tree; every "pointer" is
//! an `Option<u32>` index into that arena. The `l` / `r` slots own their
//! subtrees, while `p` is a non-owning back reference that must always
//! mirror the owning child slot of the parent.

/// Tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by the map engines.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Key/value node interface used by the map engines.
///
/// Keys are unique within a tree; setting an existing key overwrites its
/// value in place through [`KvNode::set_value`] without touching the links.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V);
}
