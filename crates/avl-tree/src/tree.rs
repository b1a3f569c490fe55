use std::fmt;

use crate::arena::Arena;
use crate::error::InvariantViolation;
use crate::snapshot::{collect_links, NodeLinks};
use crate::util::{self, find, find_max, find_min};

/// Height-balanced binary search tree.
///
/// Duplicate keys are kept: each [`insert`](AvlTree::insert) adds a node,
/// each successful [`delete`](AvlTree::delete) removes one.
#[derive(Clone, Debug)]
pub struct AvlTree<K> {
    root: Option<u32>,
    size: usize,
    arena: Arena<K>,
}

impl<K> AvlTree<K> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
            arena: Arena::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root, 0 when empty.
    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn root(&self) -> Option<&K> {
        self.root.map(|i| &self.arena[i].k)
    }

    /// Arena index of the root node.
    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    /// Key stored at arena index `idx`, if that slot is live.
    pub fn key(&self, idx: u32) -> Option<&K> {
        self.arena.get(idx).map(|n| &n.k)
    }

    pub fn min(&self) -> Option<&K> {
        self.root.map(|r| &self.arena[find_min(&self.arena, r)].k)
    }

    pub fn max(&self) -> Option<&K> {
        self.root.map(|r| &self.arena[find_max(&self.arena, r)].k)
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
        self.arena.clear();
    }

    /// In-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.arena, self.root)
    }
}

impl<K: Ord> AvlTree<K> {
    /// Adds `key` and rebalances. Returns the arena index of the new node.
    pub fn insert(&mut self, key: K) -> u32 {
        let n = self.arena.alloc(key);
        self.root = Some(util::insert(&mut self.arena, self.root, n));
        self.size += 1;
        n
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Checks ordering, cached heights, balance and node accounting.
    pub fn assert_valid(&self) -> Result<(), InvariantViolation> {
        let count = util::assert_avl_tree(&self.arena, self.root)?;
        if count != self.size {
            return Err(InvariantViolation::SizeMismatch {
                expected: self.size,
                actual: count,
            });
        }
        let live = self.arena.live();
        if live != self.size {
            return Err(InvariantViolation::Leaked {
                live,
                size: self.size,
            });
        }
        Ok(())
    }
}

impl<K: Ord + Clone> AvlTree<K> {
    /// Removes one occurrence of `key` and rebalances.
    ///
    /// Returns `false`, leaving the tree untouched, when `key` is absent.
    pub fn delete(&mut self, key: &K) -> bool {
        let mut removed = false;
        self.root = util::remove(&mut self.arena, self.root, key, &mut removed);
        if removed {
            self.size -= 1;
        }
        removed
    }
}

impl<K: Clone> AvlTree<K> {
    /// Pre-order `(key, left, right)` triples describing the current shape.
    pub fn snapshot(&self) -> Vec<NodeLinks<K>> {
        collect_links(&self.arena, self.root)
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Display for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&util::print(&self.arena, self.root, ""))
    }
}

/// In-order key iterator returned by [`AvlTree::iter`].
pub struct Iter<'a, K> {
    arena: &'a Arena<K>,
    stack: Vec<u32>,
}

impl<'a, K> Iter<'a, K> {
    fn new(arena: &'a Arena<K>, root: Option<u32>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.stack.push(i);
            node = self.arena[i].l;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let i = self.stack.pop()?;
        let arena = self.arena;
        let n = &arena[i];
        self.push_left(n.r);
        Some(&n.k)
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree() {
        let tree = AvlTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.root(), None);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert!(tree.snapshot().is_empty());
        assert_eq!(tree.to_string(), "∅");
        tree.assert_valid().unwrap();
    }

    #[test]
    fn delete_from_empty_tree_is_noop() {
        let mut tree = AvlTree::<i32>::new();
        assert!(!tree.delete(&1));
        assert!(tree.is_empty());
        tree.assert_valid().unwrap();
    }

    #[test]
    fn insert_returns_index_of_new_node() {
        let mut tree = AvlTree::new();
        let a = tree.insert(5);
        let b = tree.insert(3);
        assert_eq!(tree.key(a), Some(&5));
        assert_eq!(tree.key(b), Some(&3));
        assert_eq!(tree.find(&3), Some(b));
    }

    #[test]
    fn clear_resets_everything() {
        let mut tree = AvlTree::new();
        for k in [3, 1, 2] {
            tree.insert(k);
        }
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.insert(9), 0);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn leaked_node_is_reported() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.arena.alloc(2);
        assert_eq!(
            tree.assert_valid(),
            Err(InvariantViolation::Leaked { live: 2, size: 1 })
        );
    }

    #[test]
    fn size_drift_is_reported() {
        let mut tree = AvlTree::new();
        tree.insert(1);
        tree.size = 2;
        assert_eq!(
            tree.assert_valid(),
            Err(InvariantViolation::SizeMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn iter_via_into_iterator() {
        let mut tree = AvlTree::new();
        for k in [4, 2, 6, 1, 3] {
            tree.insert(k);
        }
        let mut seen = Vec::new();
        for k in &tree {
            seen.push(*k);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 6]);
    }
}
