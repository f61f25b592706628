//! Unbalanced ordered-tree primitives shared by both engines.
//!
//! Nothing here maintains a balancing invariant: the engines call these
//! functions for structural positioning (find, raw leaf insert, splice-out)
//! and run their own fix-up pass afterwards. All functions take the arena
//! slice plus node indices and return the new root where the root can move.

use std::fmt::Debug;

use crate::error::InvariantError;
use crate::types::{KvNode, Node};

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

// ── traversal ─────────────────────────────────────────────────────────────

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        let mut curr = r;
        while let Some(l) = get_l(arena, curr) {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        let mut curr = l;
        while let Some(r) = get_r(arena, curr) {
            curr = r;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

// ── point lookup ──────────────────────────────────────────────────────────

/// Finds a node by key.
pub fn find<K, V, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i as usize].key());
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

// ── structural mutation ───────────────────────────────────────────────────

/// Raw unbalanced insert: attaches `node` as a leaf by ordinary BST descent.
///
/// `node` must carry a key not already present in the tree, with all three
/// links cleared. Returns the new root.
pub fn insert<K, V, N, C>(arena: &mut [N], root: Option<u32>, node: u32, comparator: &C) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Some(node);
    };

    loop {
        let cmp = comparator(arena[node as usize].key(), arena[curr as usize].key());
        let child = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match child {
            Some(child) => curr = child,
            None => {
                if cmp < 0 {
                    set_l(arena, curr, Some(node));
                } else {
                    set_r(arena, curr, Some(node));
                }
                set_p(arena, node, Some(curr));
                return root;
            }
        }
    }
}

/// Outcome of a structural removal.
pub struct Detach {
    /// Root after the splice.
    pub root: Option<u32>,
    /// Deepest surviving node whose child set changed: the former parent for
    /// leaf and one-child removals, the in-order successor's former parent
    /// for two-child removals, or the successor itself when it was the
    /// removed node's direct right child. `None` when no such node remains.
    pub anchor: Option<u32>,
}

/// Splices `node` out of the tree, leaving its arena slot unlinked.
///
/// Handles the 0-, 1- and 2-child cases; the 2-child case replaces `node`
/// with its in-order successor, preserving the successor's own right
/// subtree. Heights and balance are the caller's problem.
pub fn detach<N: Node>(arena: &mut [N], root: Option<u32>, node: u32) -> Detach {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);

    match (l, r) {
        (None, None) => {
            let Some(p) = p else {
                return Detach { root: None, anchor: None };
            };
            if get_l(arena, p) == Some(node) {
                set_l(arena, p, None);
            } else {
                set_r(arena, p, None);
            }
            Detach { root, anchor: Some(p) }
        }
        (Some(l), Some(r)) => {
            let mut s = r;
            while let Some(sl) = get_l(arena, s) {
                s = sl;
            }
            let anchor = if s == r {
                // Direct right child: it keeps its own right subtree.
                s
            } else {
                let sp = get_p(arena, s).expect("successor has a parent");
                let sr = get_r(arena, s);
                set_l(arena, sp, sr);
                if let Some(sr) = sr {
                    set_p(arena, sr, Some(sp));
                }
                set_r(arena, s, Some(r));
                set_p(arena, r, Some(s));
                sp
            };
            set_l(arena, s, Some(l));
            set_p(arena, l, Some(s));
            set_p(arena, s, p);
            match p {
                Some(p) => {
                    if get_l(arena, p) == Some(node) {
                        set_l(arena, p, Some(s));
                    } else {
                        set_r(arena, p, Some(s));
                    }
                    Detach { root, anchor: Some(anchor) }
                }
                None => Detach { root: Some(s), anchor: Some(anchor) },
            }
        }
        _ => {
            let child = l.or(r).expect("exactly one child");
            set_p(arena, child, p);
            match p {
                Some(p) => {
                    if get_l(arena, p) == Some(node) {
                        set_l(arena, p, Some(child));
                    } else {
                        set_r(arena, p, Some(child));
                    }
                    Detach { root, anchor: Some(p) }
                }
                // Promoted child becomes the root; no surviving node's
                // child set changed.
                None => Detach { root: Some(child), anchor: None },
            }
        }
    }
}

// ── diagnostics ───────────────────────────────────────────────────────────

/// Validates parent links and strict in-order key ordering.
pub fn assert_linked_order<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), InvariantError>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p().is_some() {
        return Err(InvariantError::RootHasParent(root));
    }

    fn check_links<K, V, N: KvNode<K, V>>(arena: &[N], node: u32) -> Result<(), InvariantError> {
        for child in [arena[node as usize].l(), arena[node as usize].r()]
            .into_iter()
            .flatten()
        {
            if arena[child as usize].p() != Some(node) {
                return Err(InvariantError::BrokenParentLink { parent: node, child });
            }
            check_links(arena, child)?;
        }
        Ok(())
    }
    check_links(arena, root)?;

    let mut prev_node: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) >= 0 {
                return Err(InvariantError::OrderViolated { prev, next: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer: one line per node with indented children.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: KvNode<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.key(),
                n.value()
            )
        }
    }
}
