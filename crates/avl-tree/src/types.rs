//! Node type stored in the [`Arena`](crate::arena::Arena).
//!
//! Children are `Option<u32>` indices into the arena rather than owning
//! pointers. Each index is referenced by at most one parent (or by the tree
//! root), so the arena behaves like an exclusively-owned tree.

/// One AVL tree element.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// Longest downward path to an empty subtree. A leaf has height 1.
    pub height: usize,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            height: 1,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }
}
