//! Splay rotations: zig, zig-zig and zig-zag steps plus the iterative
//! splay-to-root loop.
//!
//! All functions take the arena slice and node indices. The double steps
//! take and return the tree root, since a zig-zig or zig-zag can reseat the
//! rotated subtree under an arbitrary grandparent slot or make it the root.

use crate::base::{get_l, get_p, get_r, set_l, set_p, set_r};
use crate::types::Node;

// ── zig: parent is the root ───────────────────────────────────────────────

/// Promotes `n` over the root `p` when `n` is a left child.
///
/// ```text
///     p          n
///    /    →       \
///   n              p
///    \            /
///     b          b
/// ```
fn zig_right<N: Node>(arena: &mut [N], n: u32, p: u32) {
    let b = get_r(arena, n);
    set_p(arena, n, None);
    set_r(arena, n, Some(p));
    set_p(arena, p, Some(n));
    set_l(arena, p, b);
    if let Some(b) = b {
        set_p(arena, b, Some(p));
    }
}

/// Promotes `n` over the root `p` when `n` is a right child.
fn zig_left<N: Node>(arena: &mut [N], n: u32, p: u32) {
    let b = get_l(arena, n);
    set_p(arena, n, None);
    set_l(arena, n, Some(p));
    set_p(arena, p, Some(n));
    set_r(arena, p, b);
    if let Some(b) = b {
        set_p(arena, b, Some(p));
    }
}

// ── zig-zig and zig-zag: grandparent present ──────────────────────────────

/// Zig-zig, both left children: `x` under `p` under `g`, all on the left
/// spine. `x` ends two levels up with `p` and `g` strung to its right.
fn zig_zig_left<N: Node>(arena: &mut [N], root: Option<u32>, x: u32, p: u32, g: u32) -> Option<u32> {
    let xr = get_r(arena, x);
    let pr = get_r(arena, p);
    let gp = get_p(arena, g);

    set_p(arena, x, gp);
    set_r(arena, x, Some(p));
    set_p(arena, p, Some(x));
    set_l(arena, p, xr);
    set_r(arena, p, Some(g));
    set_p(arena, g, Some(p));
    set_l(arena, g, pr);
    if let Some(xr) = xr {
        set_p(arena, xr, Some(p));
    }
    if let Some(pr) = pr {
        set_p(arena, pr, Some(g));
    }
    reseat(arena, root, gp, g, x)
}

/// Zig-zig, both right children.
fn zig_zig_right<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    x: u32,
    p: u32,
    g: u32,
) -> Option<u32> {
    let xl = get_l(arena, x);
    let pl = get_l(arena, p);
    let gp = get_p(arena, g);

    set_p(arena, x, gp);
    set_l(arena, x, Some(p));
    set_p(arena, p, Some(x));
    set_r(arena, p, xl);
    set_l(arena, p, Some(g));
    set_p(arena, g, Some(p));
    set_r(arena, g, pl);
    if let Some(xl) = xl {
        set_p(arena, xl, Some(p));
    }
    if let Some(pl) = pl {
        set_p(arena, pl, Some(g));
    }
    reseat(arena, root, gp, g, x)
}

/// Zig-zag: `x` is a right child of `p`, `p` a left child of `g`. `x` ends
/// two levels up with `p` on its left and `g` on its right.
fn zig_zag_left_right<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    x: u32,
    p: u32,
    g: u32,
) -> Option<u32> {
    let xl = get_l(arena, x);
    let xr = get_r(arena, x);
    let gp = get_p(arena, g);

    set_p(arena, x, gp);
    set_l(arena, x, Some(p));
    set_r(arena, x, Some(g));
    set_p(arena, p, Some(x));
    set_r(arena, p, xl);
    set_p(arena, g, Some(x));
    set_l(arena, g, xr);
    if let Some(xl) = xl {
        set_p(arena, xl, Some(p));
    }
    if let Some(xr) = xr {
        set_p(arena, xr, Some(g));
    }
    reseat(arena, root, gp, g, x)
}

/// Zig-zag: `x` is a left child of `p`, `p` a right child of `g`.
fn zig_zag_right_left<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    x: u32,
    p: u32,
    g: u32,
) -> Option<u32> {
    let xl = get_l(arena, x);
    let xr = get_r(arena, x);
    let gp = get_p(arena, g);

    set_p(arena, x, gp);
    set_l(arena, x, Some(g));
    set_r(arena, x, Some(p));
    set_p(arena, p, Some(x));
    set_l(arena, p, xr);
    set_p(arena, g, Some(x));
    set_r(arena, g, xl);
    if let Some(xl) = xl {
        set_p(arena, xl, Some(g));
    }
    if let Some(xr) = xr {
        set_p(arena, xr, Some(p));
    }
    reseat(arena, root, gp, g, x)
}

/// After a double step moved `x` into the slot `g` occupied, wires `x` into
/// `g`'s former parent `gp`, or makes `x` the root.
fn reseat<N: Node>(arena: &mut [N], root: Option<u32>, gp: Option<u32>, g: u32, x: u32) -> Option<u32> {
    match gp {
        Some(gp) => {
            if get_l(arena, gp) == Some(g) {
                set_l(arena, gp, Some(x));
            } else {
                set_r(arena, gp, Some(x));
            }
            root
        }
        None => Some(x),
    }
}

// ── splay-to-root ─────────────────────────────────────────────────────────

/// Rotates `node` to the root. Returns the new root together with the
/// number of levels climbed: one per zig, two per zig-zig or zig-zag, so
/// the total equals the node's pre-splay depth.
pub fn splay_to_root<N: Node>(
    arena: &mut [N],
    mut root: Option<u32>,
    node: u32,
) -> (Option<u32>, usize) {
    let mut steps = 0usize;
    while let Some(p) = get_p(arena, node) {
        let is_left = get_l(arena, p) == Some(node);
        match get_p(arena, p) {
            None => {
                if is_left {
                    zig_right(arena, node, p);
                } else {
                    zig_left(arena, node, p);
                }
                root = Some(node);
                steps += 1;
            }
            Some(g) => {
                let p_is_left = get_l(arena, g) == Some(p);
                root = match (p_is_left, is_left) {
                    (true, true) => zig_zig_left(arena, root, node, p, g),
                    (true, false) => zig_zag_left_right(arena, root, node, p, g),
                    (false, true) => zig_zag_right_left(arena, root, node, p, g),
                    (false, false) => zig_zig_right(arena, root, node, p, g),
                };
                steps += 2;
            }
        }
    }
    (root, steps)
}
