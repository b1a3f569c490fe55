//! Owned tree rebuilt from a snapshot.
//!
//! Used for rendering and for the "imbalanced" previews, which apply a
//! plain BST insert or delete without any rebalancing.

use std::cmp::Ordering;
use std::fmt::Display;

use avl_tree::NodeLinks;

use crate::error::DemoError;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ShapeNode<K> {
    key: K,
    left: Option<Box<ShapeNode<K>>>,
    right: Option<Box<ShapeNode<K>>>,
}

impl<K> ShapeNode<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape<K> {
    root: Option<Box<ShapeNode<K>>>,
}

impl<K: Clone + PartialEq> Shape<K> {
    /// Rebuilds the shape from pre-order triples.
    pub fn from_links(links: &[NodeLinks<K>]) -> Result<Self, DemoError> {
        if links.is_empty() {
            return Ok(Self { root: None });
        }
        let mut pos = 0;
        let root = build(links, &mut pos)?;
        if pos != links.len() {
            return Err(DemoError::MalformedSnapshot(format!(
                "{} trailing entries after the tree",
                links.len() - pos
            )));
        }
        Ok(Self { root: Some(root) })
    }

    /// Pre-order triples, the inverse of [`Shape::from_links`].
    pub fn to_links(&self) -> Vec<NodeLinks<K>> {
        let mut out = Vec::new();
        let mut stack: Vec<&ShapeNode<K>> = self.root.as_deref().into_iter().collect();
        while let Some(n) = stack.pop() {
            out.push(NodeLinks::new(
                n.key.clone(),
                n.left.as_ref().map(|l| l.key.clone()),
                n.right.as_ref().map(|r| r.key.clone()),
            ));
            if let Some(r) = n.right.as_deref() {
                stack.push(r);
            }
            if let Some(l) = n.left.as_deref() {
                stack.push(l);
            }
        }
        out
    }
}

fn build<K: Clone + PartialEq>(
    links: &[NodeLinks<K>],
    pos: &mut usize,
) -> Result<Box<ShapeNode<K>>, DemoError> {
    let at = *pos;
    let link = links
        .get(at)
        .ok_or_else(|| DemoError::MalformedSnapshot(format!("entry {at} is missing")))?;
    *pos += 1;

    let mut node = ShapeNode::leaf(link.key.clone());
    if let Some(key) = &link.left {
        node.left = Some(build_child(links, pos, key)?);
    }
    if let Some(key) = &link.right {
        node.right = Some(build_child(links, pos, key)?);
    }
    Ok(Box::new(node))
}

fn build_child<K: Clone + PartialEq>(
    links: &[NodeLinks<K>],
    pos: &mut usize,
    expected: &K,
) -> Result<Box<ShapeNode<K>>, DemoError> {
    let at = *pos;
    match links.get(at) {
        Some(link) if link.key == *expected => build(links, pos),
        Some(_) => Err(DemoError::MalformedSnapshot(format!(
            "entry {at} does not match its parent's child key"
        ))),
        None => Err(DemoError::MalformedSnapshot(format!("entry {at} is missing"))),
    }
}

impl<K: Ord + Clone> Shape<K> {
    /// Plain BST insert; equal keys go right.
    pub fn attach(&mut self, key: K) {
        attach_at(&mut self.root, key);
    }

    /// Plain BST delete. A node with two children takes its successor's key.
    pub fn detach(&mut self, key: &K) -> bool {
        detach_at(&mut self.root, key)
    }
}

fn attach_at<K: Ord>(slot: &mut Option<Box<ShapeNode<K>>>, key: K) {
    match slot {
        None => *slot = Some(Box::new(ShapeNode::leaf(key))),
        Some(node) => {
            if key < node.key {
                attach_at(&mut node.left, key);
            } else {
                attach_at(&mut node.right, key);
            }
        }
    }
}

fn min_key<K>(mut node: &ShapeNode<K>) -> &K {
    while let Some(l) = node.left.as_deref() {
        node = l;
    }
    &node.key
}

fn detach_at<K: Ord + Clone>(slot: &mut Option<Box<ShapeNode<K>>>, key: &K) -> bool {
    let Some(node) = slot else {
        return false;
    };
    match key.cmp(&node.key) {
        Ordering::Less => detach_at(&mut node.left, key),
        Ordering::Greater => detach_at(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_none() {
                let right = node.right.take();
                *slot = right;
            } else if node.right.is_none() {
                let left = node.left.take();
                *slot = left;
            } else if let Some(right) = node.right.as_deref() {
                let successor = min_key(right).clone();
                node.key = successor.clone();
                detach_at(&mut node.right, &successor);
            }
            true
        }
    }
}

impl<K: Display> Shape<K> {
    /// Box-drawing rendering; a missing sibling prints as `∅`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self.root.as_deref() {
            Some(root) => render_node(root, "", &mut out),
            None => out.push('∅'),
        }
        out
    }
}

fn render_node<K: Display>(node: &ShapeNode<K>, tab: &str, out: &mut String) {
    out.push_str(&node.key.to_string());
    if node.left.is_none() && node.right.is_none() {
        return;
    }
    let children = [node.left.as_deref(), node.right.as_deref()];
    for (i, child) in children.into_iter().enumerate() {
        let is_last = i == children.len() - 1;
        out.push('\n');
        out.push_str(tab);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        match child {
            Some(child) => {
                let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
                render_node(child, &child_tab, out);
            }
            None => out.push('∅'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(rows: &[(i64, Option<i64>, Option<i64>)]) -> Shape<i64> {
        let links: Vec<_> = rows
            .iter()
            .map(|&(k, l, r)| NodeLinks::new(k, l, r))
            .collect();
        Shape::from_links(&links).unwrap()
    }

    #[test]
    fn render_marks_missing_sibling() {
        let s = shape(&[
            (50, Some(30), Some(70)),
            (30, Some(20), None),
            (20, None, None),
            (70, None, None),
        ]);
        assert_eq!(s.render(), "50\n├─ 30\n│  ├─ 20\n│  └─ ∅\n└─ 70");
    }

    #[test]
    fn render_empty() {
        assert_eq!(Shape::<i64>::from_links(&[]).unwrap().render(), "∅");
    }

    #[test]
    fn links_roundtrip_with_duplicates() {
        let rows = [(5, Some(5), Some(5)), (5, None, None), (5, None, None)];
        let s = shape(&rows);
        let back: Vec<_> = s
            .to_links()
            .into_iter()
            .map(|l| (l.key, l.left, l.right))
            .collect();
        assert_eq!(back, rows);
    }

    #[test]
    fn attach_does_not_rebalance() {
        let mut s = shape(&[(50, Some(40), None), (40, None, None)]);
        s.attach(30);
        assert_eq!(s.render(), "50\n├─ 40\n│  ├─ 30\n│  └─ ∅\n└─ ∅");
    }

    #[test]
    fn detach_copies_successor_key() {
        let mut s = shape(&[
            (50, Some(30), Some(70)),
            (30, None, None),
            (70, Some(60), None),
            (60, None, None),
        ]);
        assert!(s.detach(&50));
        assert_eq!(s.render(), "60\n├─ 30\n└─ 70");
        assert!(!s.detach(&50));
    }

    #[test]
    fn child_key_mismatch_is_rejected() {
        let links = [NodeLinks::new(2, Some(1), None), NodeLinks::new(9, None, None)];
        assert!(matches!(
            Shape::from_links(&links),
            Err(DemoError::MalformedSnapshot(_))
        ));
    }

    #[test]
    fn trailing_and_missing_entries_are_rejected() {
        let trailing = [NodeLinks::new(1, None, None), NodeLinks::new(2, None, None)];
        assert!(Shape::from_links(&trailing).is_err());
        let missing = [NodeLinks::new(1, None, Some(2))];
        assert!(Shape::from_links(&missing).is_err());
    }
}
