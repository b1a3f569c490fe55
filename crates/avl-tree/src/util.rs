//! Recursive AVL insert/delete over an [`Arena`].
//!
//! Every function takes the arena plus a subtree root index and returns the
//! (possibly different) root of that subtree. Callers reattach the result to
//! the parent link they passed in.

use std::cmp::Ordering;
use std::fmt::Debug;

use log::{debug, trace};

use crate::arena::Arena;
use crate::error::InvariantViolation;

/// Cached height of `node`, 0 for an absent subtree.
#[inline]
pub fn height<K>(arena: &Arena<K>, node: Option<u32>) -> usize {
    node.map_or(0, |i| arena[i].height)
}

/// `height(left) - height(right)`; positive means left-heavy.
#[inline]
pub fn balance_factor<K>(arena: &Arena<K>, node: Option<u32>) -> i32 {
    match node {
        None => 0,
        Some(i) => {
            height(arena, arena[i].l) as i32 - height(arena, arena[i].r) as i32
        }
    }
}

#[inline]
fn update_height<K>(arena: &mut Arena<K>, i: u32) {
    let h = 1 + height(arena, arena[i].l).max(height(arena, arena[i].r));
    arena[i].height = h;
}

/// Lifts `z.l` above `z`. Returns the new subtree root.
pub fn rotate_right<K>(arena: &mut Arena<K>, z: u32) -> u32 {
    let y = arena[z].l.expect("rotate_right requires a left child");
    let t = arena[y].r;
    arena[y].r = Some(z);
    arena[z].l = t;
    // z now hangs below y, so its height goes first.
    update_height(arena, z);
    update_height(arena, y);
    trace!("rotate_right: z={z} y={y}");
    y
}

/// Lifts `z.r` above `z`. Returns the new subtree root.
pub fn rotate_left<K>(arena: &mut Arena<K>, z: u32) -> u32 {
    let y = arena[z].r.expect("rotate_left requires a right child");
    let t = arena[y].l;
    arena[y].l = Some(z);
    arena[z].r = t;
    update_height(arena, z);
    update_height(arena, y);
    trace!("rotate_left: z={z} y={y}");
    y
}

/// Inserts the detached leaf `n` into the subtree rooted at `root`.
///
/// Keys equal to a node's key descend to the right. The rotation case is
/// picked by comparing the new key with the heavy child's key, which
/// reproduces the route the key took one level down.
pub fn insert<K: Ord>(arena: &mut Arena<K>, root: Option<u32>, n: u32) -> u32 {
    let Some(curr) = root else {
        return n;
    };

    if arena[n].k < arena[curr].k {
        let l = arena[curr].l;
        let l = insert(arena, l, n);
        arena[curr].l = Some(l);
    } else {
        let r = arena[curr].r;
        let r = insert(arena, r, n);
        arena[curr].r = Some(r);
    }

    update_height(arena, curr);
    let balance = balance_factor(arena, Some(curr));

    if balance > 1 {
        let l = arena[curr].l.expect("left-heavy node has a left child");
        if arena[n].k < arena[l].k {
            // LL
            return rotate_right(arena, curr);
        }
        // LR
        let l = rotate_left(arena, l);
        arena[curr].l = Some(l);
        return rotate_right(arena, curr);
    }

    if balance < -1 {
        let r = arena[curr].r.expect("right-heavy node has a right child");
        if arena[n].k < arena[r].k {
            // RL
            let r = rotate_right(arena, r);
            arena[curr].r = Some(r);
            return rotate_left(arena, curr);
        }
        // RR
        return rotate_left(arena, curr);
    }

    curr
}

/// Leftmost node of the subtree rooted at `node`.
pub fn find_min<K>(arena: &Arena<K>, node: u32) -> u32 {
    let mut curr = node;
    while let Some(l) = arena[curr].l {
        curr = l;
    }
    curr
}

/// Rightmost node of the subtree rooted at `node`.
pub fn find_max<K>(arena: &Arena<K>, node: u32) -> u32 {
    let mut curr = node;
    while let Some(r) = arena[curr].r {
        curr = r;
    }
    curr
}

/// First node on the search path whose key equals `key`.
pub fn find<K: Ord>(arena: &Arena<K>, root: Option<u32>, key: &K) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        curr = match key.cmp(&arena[i].k) {
            Ordering::Less => arena[i].l,
            Ordering::Greater => arena[i].r,
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Removes one node holding `key` from the subtree rooted at `root`.
///
/// A node with two children is not unlinked: it takes a copy of its
/// in-order successor's key and the successor is removed from the right
/// subtree instead, so the matched arena index stays in the tree.
///
/// `removed` is set when a node was actually released.
pub fn remove<K: Ord + Clone>(
    arena: &mut Arena<K>,
    root: Option<u32>,
    key: &K,
    removed: &mut bool,
) -> Option<u32> {
    let curr = root?;

    let ord = key.cmp(&arena[curr].k);
    let (l, r) = (arena[curr].l, arena[curr].r);
    match ord {
        Ordering::Less => {
            let l = remove(arena, l, key, removed);
            arena[curr].l = l;
        }
        Ordering::Greater => {
            let r = remove(arena, r, key, removed);
            arena[curr].r = r;
        }
        Ordering::Equal => match (l, r) {
            (None, r) => {
                debug!("remove: splice node {curr} for its right link");
                arena.release(curr);
                *removed = true;
                return r;
            }
            (l, None) => {
                debug!("remove: splice node {curr} for its left link");
                arena.release(curr);
                *removed = true;
                return l;
            }
            (Some(_), Some(r)) => {
                let successor = find_min(arena, r);
                debug!("remove: node {curr} takes key of successor {successor}");
                let k = arena[successor].k.clone();
                arena[curr].k = k.clone();
                let r = remove(arena, Some(r), &k, removed);
                arena[curr].r = r;
            }
        },
    }

    update_height(arena, curr);
    let balance = balance_factor(arena, Some(curr));

    if balance > 1 {
        let l = arena[curr].l.expect("left-heavy node has a left child");
        if balance_factor(arena, Some(l)) >= 0 {
            // LL
            return Some(rotate_right(arena, curr));
        }
        // LR
        let l = rotate_left(arena, l);
        arena[curr].l = Some(l);
        return Some(rotate_right(arena, curr));
    }

    if balance < -1 {
        let r = arena[curr].r.expect("right-heavy node has a right child");
        if balance_factor(arena, Some(r)) <= 0 {
            // RR
            return Some(rotate_left(arena, curr));
        }
        // RL
        let r = rotate_right(arena, r);
        arena[curr].r = Some(r);
        return Some(rotate_left(arena, curr));
    }

    Some(curr)
}

fn validate_heights<K>(arena: &Arena<K>, node: u32) -> Result<usize, InvariantViolation> {
    let lh = match arena[node].l {
        Some(l) => validate_heights(arena, l)?,
        None => 0,
    };
    let rh = match arena[node].r {
        Some(r) => validate_heights(arena, r)?,
        None => 0,
    };

    let expected = 1 + lh.max(rh);
    let actual = arena[node].height;
    if actual != expected {
        return Err(InvariantViolation::HeightMismatch {
            node,
            expected,
            actual,
        });
    }

    let balance = lh as i32 - rh as i32;
    if !(-1..=1).contains(&balance) {
        return Err(InvariantViolation::Unbalanced { node, balance });
    }

    Ok(expected)
}

/// Recomputes every height from scratch and checks ordering, cached heights
/// and balance. Returns the number of reachable nodes.
pub fn assert_avl_tree<K: Ord>(
    arena: &Arena<K>,
    root: Option<u32>,
) -> Result<usize, InvariantViolation> {
    let Some(root) = root else {
        return Ok(0);
    };

    validate_heights(arena, root)?;

    // Equal keys may sit on either side after a rotation, so ordering is
    // checked as a non-decreasing in-order walk.
    let mut count = 0;
    let mut prev: Option<&K> = None;
    let mut stack = Vec::new();
    let mut curr = Some(root);
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = arena[i].l;
        }
        let Some(i) = stack.pop() else {
            break;
        };
        if prev.is_some_and(|p| *p > arena[i].k) {
            return Err(InvariantViolation::OrderViolated { node: i });
        }
        prev = Some(&arena[i].k);
        count += 1;
        curr = arena[i].r;
    }

    Ok(count)
}

/// Debug printer for AVL trees.
pub fn print<K: Debug>(arena: &Arena<K>, node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height, n.k
            )
        }
    }
}
