//! Slot table backing the tree.

use std::ops::{Index, IndexMut};

use crate::types::AvlNode;

/// Growable node table addressed by `u32` indices.
///
/// Released slots are kept on a free list and handed out again by
/// [`Arena::alloc`], so an index is only meaningful while its node is in the
/// tree.
#[derive(Clone, Debug)]
pub struct Arena<K> {
    slots: Vec<Option<AvlNode<K>>>,
    free: Vec<u32>,
}

impl<K> Arena<K> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores a fresh leaf holding `k` and returns its index.
    pub fn alloc(&mut self, k: K) -> u32 {
        let node = AvlNode::new(k);
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                (self.slots.len() - 1) as u32
            }
        }
    }

    /// Drops the node at `idx` and makes the slot reusable.
    pub fn release(&mut self, idx: u32) {
        if self.slots[idx as usize].take().is_some() {
            self.free.push(idx);
        }
    }

    pub fn get(&self, idx: u32) -> Option<&AvlNode<K>> {
        self.slots.get(idx as usize).and_then(Option::as_ref)
    }

    /// Number of occupied slots.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<K> Default for Arena<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Index<u32> for Arena<K> {
    type Output = AvlNode<K>;

    fn index(&self, idx: u32) -> &AvlNode<K> {
        self.slots[idx as usize]
            .as_ref()
            .expect("arena slot is live")
    }
}

impl<K> IndexMut<u32> for Arena<K> {
    fn index_mut(&mut self, idx: u32) -> &mut AvlNode<K> {
        self.slots[idx as usize]
            .as_mut()
            .expect("arena slot is live")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_reuses_released_slots() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        assert_eq!((a, b), (0, 1));
        assert_eq!(arena.live(), 2);

        arena.release(a);
        assert_eq!(arena.live(), 1);
        assert!(arena.get(a).is_none());

        let c = arena.alloc(3);
        assert_eq!(c, a);
        assert_eq!(arena[c].k, 3);
        assert_eq!(arena[c].height, 1);
        assert!(arena[c].is_leaf());
    }

    #[test]
    fn double_release_is_ignored() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        arena.release(a);
        arena.release(a);
        assert_eq!(arena.live(), 0);
        assert_eq!(arena.alloc("b"), a);
        assert_eq!(arena.alloc("c"), 1);
    }
}
