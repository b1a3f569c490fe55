//! Read-only shape export for renderers.

use serde::{Deserialize, Serialize};

use crate::arena::Arena;

/// One node of a shape snapshot: its key and the keys of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeLinks<K> {
    pub key: K,
    pub left: Option<K>,
    pub right: Option<K>,
}

impl<K> NodeLinks<K> {
    pub fn new(key: K, left: Option<K>, right: Option<K>) -> Self {
        Self { key, left, right }
    }
}

/// Pre-order list of [`NodeLinks`] for the subtree rooted at `root`.
///
/// Pre-order pins every triple to a position, so the shape can be rebuilt
/// unambiguously even when keys repeat.
pub fn collect_links<K: Clone>(arena: &Arena<K>, root: Option<u32>) -> Vec<NodeLinks<K>> {
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        let n = &arena[i];
        out.push(NodeLinks {
            key: n.k.clone(),
            left: n.l.map(|l| arena[l].k.clone()),
            right: n.r.map(|r| arena[r].k.clone()),
        });
        if let Some(r) = n.r {
            stack.push(r);
        }
        if let Some(l) = n.l {
            stack.push(l);
        }
    }
    out
}
