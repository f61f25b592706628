use std::fmt::Debug;

use crate::base;
use crate::error::InvariantError;
use crate::types::KvNode;

use super::types::AvlNode;
use super::util;

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Height-balanced ordered map.
///
/// Every node's balance factor stays in `{-1, 0, 1}`, restored by single or
/// double rotations after each insert and removal, so lookups run in
/// `O(log n)` worst case.
///
/// Node storage is a slot-recycling arena: all links are `u32` indices, a
/// removal invalidates only the removed index, and rotations relink indices
/// without moving nodes.
pub struct AvlTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    pub root: Option<u32>,
    pub comparator: C,
    arena: Vec<AvlNode<K, V>>,
    free: Vec<u32>,
    length: usize,
}

impl<K, V> AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlTree<K, V, C>
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
        }
    }

    fn alloc(&mut self, node: AvlNode<K, V>) -> u32 {
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

    /// Upserts `key`. An existing key gets its value overwritten in place
    /// with no structural or height side effects; a new key is attached as
    /// a leaf and the tree is rebalanced. Returns the node index.
    pub fn set(&mut self, key: K, value: V) -> u32 {
        if let Some(i) = base::find(&self.arena, self.root, &key, &self.comparator) {
            self.arena[i as usize].set_value(value);
            return i;
        }
        let idx = self.alloc(AvlNode::new(key, value));
        self.root = base::insert(&mut self.arena, self.root, idx, &self.comparator);
        self.root = util::fix_after_insert(&mut self.arena, self.root, idx);
        self.length += 1;
        idx
    }

    /// Removes `key`. Returns `false` (a no-op, not an error) if absent.
    pub fn del(&mut self, key: &K) -> bool {
        let Some(i) = base::find(&self.arena, self.root, key, &self.comparator) else {
            return false;
        };
        self.root = util::remove(&mut self.arena, self.root, i);
        self.free.push(i);
        self.length -= 1;
        true
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

    /// Borrow a node by live index, links and height included.
    pub fn node(&self, idx: u32) -> &AvlNode<K, V> {
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

    pub fn for_each<G: FnMut(u32, &AvlNode<K, V>)>(&self, mut f: G) {
        let mut curr = self.first();
        while let Some(i) = curr {
            f(i, &self.arena[i as usize]);
            curr = self.next(i);
        }
    }

    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        util::assert_avl_tree(&self.arena, self.root, &self.comparator)
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    K: Debug,
    V: Debug,
    C: Fn(&K, &K) -> i32,
{
    pub fn print(&self) -> String {
        util::print::<K, V, _>(&self.arena, self.root, "")
    }
}
