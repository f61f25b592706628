use std::fmt::Debug;

use crate::base;
use crate::error::InvariantError;
use crate::types::KvNode;

use super::types::SplayNode;
use super::util::splay_to_root;

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Self-adjusting ordered map.
///
/// Every insert splays the new node to the root; every removal splays the
/// deletion point's surviving neighbor. Frequently touched keys therefore
/// drift toward the root, matching the amortized analysis of splay trees.
///
/// The tree tracks how many insertions landed at a depth strictly greater
/// than `2·log2(n)` (with `n` the number of keys ever inserted, counted
/// after the insertion); [`SplayTree::report`] exposes that counter.
pub struct SplayTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    pub root: Option<u32>,
    pub comparator: C,
    arena: Vec<SplayNode<K, V>>,
    free: Vec<u32>,
    length: usize,
    node_count: usize,
    bad_inserts: usize,
}

impl<K, V> SplayTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for SplayTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> SplayTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Vec::new(),
            free: Vec::new(),
            length: 0,
            node_count: 0,
            bad_inserts: 0,
        }
    }

    fn alloc(&mut self, node: SplayNode<K, V>) -> u32 {
        match self.free.pop() {
            Some(i) => {
                self.arena[i as usize] = node;
                i
            }
            None => {
                self.arena.push(node);
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Upserts `key`. An existing key gets its value overwritten in place —
    /// no splay, no counter changes. A new key is attached by raw BST
    /// descent and splayed to the root; if the splay climbed more than
    /// `2·log2(n)` levels the insertion counts as bad. Returns the index.
    pub fn set(&mut self, key: K, value: V) -> u32 {
        if let Some(i) = base::find(&self.arena, self.root, &key, &self.comparator) {
            self.arena[i as usize].set_value(value);
            return i;
        }
        let idx = self.alloc(SplayNode::new(key, value));
        self.root = base::insert(&mut self.arena, self.root, idx, &self.comparator);
        self.length += 1;
        self.node_count += 1;

        let (root, steps) = splay_to_root(&mut self.arena, self.root, idx);
        self.root = root;
        // With n = 1 the bound is zero, so the first insert (depth 0) never
        // counts as bad.
        if steps as f64 > 2.0 * (self.node_count as f64).log2() {
            self.bad_inserts += 1;
        }
        idx
    }

    /// Removes `key`; a no-op returning `false` if absent. After the
    /// splice, the deletion point's surviving neighbor — the former parent
    /// for a leaf or one-child removal, the successor's former parent (or
    /// the successor's new position, when it was the direct right child)
    /// for a two-child removal — is splayed to the root.
    pub fn del(&mut self, key: &K) -> bool {
        let Some(i) = base::find(&self.arena, self.root, key, &self.comparator) else {
            return false;
        };
        let detached = base::detach(&mut self.arena, self.root, i);
        self.root = detached.root;
        if let Some(anchor) = detached.anchor {
            let (root, _) = splay_to_root(&mut self.arena, self.root, anchor);
            self.root = root;
        }
        self.free.push(i);
        self.length -= 1;
        true
    }

    /// Cumulative count of insertions that landed deeper than `2·log2(n)`.
    /// Read-only diagnostic.
    pub fn report(&self) -> usize {
        self.bad_inserts
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        base::find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| &self.arena[i as usize].v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = base::find(&self.arena, self.root, key, &self.comparator)?;
        Some(&mut self.arena[i as usize].v)
    }

    pub fn has(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub fn key(&self, idx: u32) -> &K {
        &self.arena[idx as usize].k
    }

    pub fn value(&self, idx: u32) -> &V {
        &self.arena[idx as usize].v
    }

    pub fn value_mut(&mut self, idx: u32) -> &mut V {
        &mut self.arena[idx as usize].v
    }

    /// Borrow a node by live index, links included.
    pub fn node(&self, idx: u32) -> &SplayNode<K, V> {
        &self.arena[idx as usize]
    }

    pub fn size(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.length = 0;
        self.node_count = 0;
        self.bad_inserts = 0;
    }

    pub fn first(&self) -> Option<u32> {
        base::first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        base::last(&self.arena, self.root)
    }

    pub fn next(&self, idx: u32) -> Option<u32> {
        base::next(&self.arena, idx)
    }

    pub fn prev(&self, idx: u32) -> Option<u32> {
        base::prev(&self.arena, idx)
    }

    pub fn iterator(&self) -> impl Iterator<Item = u32> + '_ {
        let mut curr = self.first();
        std::iter::from_fn(move || {
            let i = curr?;
            curr = self.next(i);
            Some(i)
        })
    }

    pub fn for_each<G: FnMut(u32, &SplayNode<K, V>)>(&self, mut f: G) {
        let mut curr = self.first();
        while let Some(i) = curr {
            f(i, &self.arena[i as usize]);
            curr = self.next(i);
        }
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        base::assert_linked_order(&self.arena, self.root, &self.comparator)
    }
}

impl<K, V, C> SplayTree<K, V, C>
where
    K: Debug,
    V: Debug,
    C: Fn(&K, &K) -> i32,
{
    pub fn print(&self) -> String {
        base::print::<K, V, _>(&self.arena, self.root, "")
    }
}
