//! Height bookkeeping, rotations and rebalancing for the AVL engine.
//!
//! The mutation entry points are [`fix_after_insert`] (run after the base
//! tree attached a fresh leaf) and [`remove`] (full structural removal with
//! rebalancing along the path to the root). Both are explicit iterative
//! walks from the mutation point upward, never recursive.

use std::fmt::Debug;

use crate::base;
use crate::error::InvariantError;
use crate::types::KvNode;

use super::types::AvlNodeLike;

#[inline]
fn get_p<K, V, N: AvlNodeLike<K, V>>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].p()
}

#[inline]
fn get_l<K, V, N: AvlNodeLike<K, V>>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].l()
}

#[inline]
fn get_r<K, V, N: AvlNodeLike<K, V>>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].r()
}

#[inline]
fn set_p<K, V, N: AvlNodeLike<K, V>>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_p(v);
}

#[inline]
fn set_l<K, V, N: AvlNodeLike<K, V>>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
fn set_r<K, V, N: AvlNodeLike<K, V>>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

/// Stored height of an optional subtree, 0 for a missing child.
#[inline]
fn height<K, V, N: AvlNodeLike<K, V>>(arena: &[N], node: Option<u32>) -> u32 {
    node.map_or(0, |i| arena[i as usize].h())
}

#[inline]
fn update_height<K, V, N: AvlNodeLike<K, V>>(arena: &mut [N], i: u32) {
    let h = 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i)));
    arena[i as usize].set_h(h);
}

/// Balance factor, `height(left) - height(right)`.
pub fn balance_of<K, V, N: AvlNodeLike<K, V>>(arena: &[N], i: u32) -> i32 {
    height(arena, get_l(arena, i)) as i32 - height(arena, get_r(arena, i)) as i32
}

// ── rotations ─────────────────────────────────────────────────────────────

/// Single right rotation: promotes `n`'s left child over `n`, rewiring the
/// subtree into `n`'s former parent slot. Returns the promoted index.
fn rotate_right<K, V, N: AvlNodeLike<K, V>>(arena: &mut [N], n: u32) -> u32 {
    let l = get_l(arena, n).expect("left child exists");
    let p = get_p(arena, n);
    let lr = get_r(arena, l);

    set_l(arena, n, lr);
    if let Some(lr) = lr {
        set_p(arena, lr, Some(n));
    }
    set_r(arena, l, Some(n));
    set_p(arena, n, Some(l));
    set_p(arena, l, p);
    if let Some(p) = p {
        if get_l(arena, p) == Some(n) {
            set_l(arena, p, Some(l));
        } else {
            set_r(arena, p, Some(l));
        }
    }

    update_height(arena, n);
    update_height(arena, l);
    l
}

/// Single left rotation: promotes `n`'s right child over `n`.
fn rotate_left<K, V, N: AvlNodeLike<K, V>>(arena: &mut [N], n: u32) -> u32 {
    let r = get_r(arena, n).expect("right child exists");
    let p = get_p(arena, n);
    let rl = get_l(arena, r);

    set_r(arena, n, rl);
    if let Some(rl) = rl {
        set_p(arena, rl, Some(n));
    }
    set_l(arena, r, Some(n));
    set_p(arena, n, Some(r));
    set_p(arena, r, p);
    if let Some(p) = p {
        if get_l(arena, p) == Some(n) {
            set_l(arena, p, Some(r));
        } else {
            set_r(arena, p, Some(r));
        }
    }

    update_height(arena, n);
    update_height(arena, r);
    r
}

/// Recompute stored heights along `node`'s parent chain up to the root.
fn propagate_heights<K, V, N: AvlNodeLike<K, V>>(arena: &mut [N], node: u32) {
    let mut p = get_p(arena, node);
    while let Some(i) = p {
        update_height(arena, i);
        p = get_p(arena, i);
    }
}

/// Restores the balance invariant at `n` when `|balance_of(n)| > 1`,
/// choosing among the LL / LR / RL / RR rotations.
///
/// A tie between the heavy child's subtree heights resolves to the single
/// rotation on the left side and to the double rotation on the right side;
/// callers rely on this exact convention. Corrected heights are propagated
/// to the root. Returns the new tree root.
pub fn rebalance<K, V, N: AvlNodeLike<K, V>>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
) -> Option<u32> {
    let bf = balance_of(arena, n);
    let sub = if bf > 1 {
        let l = get_l(arena, n).expect("left child exists");
        if height(arena, get_l(arena, l)) >= height(arena, get_r(arena, l)) {
            rotate_right(arena, n)
        } else {
            rotate_left(arena, l);
            rotate_right(arena, n)
        }
    } else if bf < -1 {
        let r = get_r(arena, n).expect("right child exists");
        if height(arena, get_l(arena, r)) >= height(arena, get_r(arena, r)) {
            rotate_right(arena, r);
            rotate_left(arena, n)
        } else {
            rotate_left(arena, n)
        }
    } else {
        return root;
    };

    propagate_heights(arena, sub);
    if arena[sub as usize].p().is_some() {
        root
    } else {
        Some(sub)
    }
}

// ── mutation entry points ─────────────────────────────────────────────────

/// Fix-up pass after the base tree attached the fresh leaf `leaf`.
///
/// Climbs from the leaf updating ancestor heights, stopping at the first
/// ancestor whose height does not grow (nothing above it can change after a
/// single insert). Then climbs again and rebalances the *nearest* ancestor
/// whose balance factor left `{-1, 0, 1}`; a single insert cannot unbalance
/// more than one. Returns the new tree root.
pub fn fix_after_insert<K, V, N: AvlNodeLike<K, V>>(
    arena: &mut [N],
    root: Option<u32>,
    leaf: u32,
) -> Option<u32> {
    let mut c = leaf;
    while let Some(p) = get_p(arena, c) {
        let grown = arena[c as usize].h() + 1;
        if grown <= arena[p as usize].h() {
            break;
        }
        arena[p as usize].set_h(grown);
        c = p;
    }

    let mut c = leaf;
    while let Some(p) = get_p(arena, c) {
        let bf = balance_of(arena, p);
        if !(-1..=1).contains(&bf) {
            return rebalance(arena, root, p);
        }
        c = p;
    }
    root
}

/// Structural removal of `n` with height repair and rebalancing.
///
/// Splices the node out through the base tree, recomputes heights bottom-up
/// from the splice point, then walks toward the root rebalancing *every*
/// out-of-balance node encountered — unlike insert, one removal can require
/// rotations at several ancestors. Returns the new tree root.
pub fn remove<K, V, N: AvlNodeLike<K, V>>(
    arena: &mut [N],
    root: Option<u32>,
    n: u32,
) -> Option<u32> {
    let detached = base::detach(arena, root, n);
    let mut root = detached.root;
    let Some(anchor) = detached.anchor else {
        return root;
    };

    update_height(arena, anchor);
    propagate_heights(arena, anchor);

    let mut curr = Some(anchor);
    while let Some(i) = curr {
        // The node above the rotated subtree, captured before `i` moves down.
        let parent = get_p(arena, i);
        root = rebalance(arena, root, i);
        curr = parent;
    }
    root
}

// ── diagnostics ───────────────────────────────────────────────────────────

/// Validates parent links, key order, stored heights and the balance
/// invariant for the whole tree.
pub fn assert_avl_tree<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), InvariantError>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> i32,
{
    base::assert_linked_order(arena, root, comparator)?;

    fn check_heights<K, V, N: AvlNodeLike<K, V>>(
        arena: &[N],
        node: Option<u32>,
    ) -> Result<u32, InvariantError> {
        let Some(i) = node else {
            return Ok(0);
        };
        let lh = check_heights(arena, arena[i as usize].l())?;
        let rh = check_heights(arena, arena[i as usize].r())?;
        let computed = 1 + lh.max(rh);
        let stored = arena[i as usize].h();
        if stored != computed {
            return Err(InvariantError::HeightMismatch { node: i, stored, computed });
        }
        let bf = lh as i32 - rh as i32;
        if !(-1..=1).contains(&bf) {
            return Err(InvariantError::BalanceViolated { node: i, bf });
        }
        Ok(computed)
    }
    check_heights(arena, root).map(|_| ())
}

/// Debug printer for AVL trees.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: AvlNodeLike<K, V> + KvNode<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.h(),
                n.key(),
                n.value()
            )
        }
    }
}
