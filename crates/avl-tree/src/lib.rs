//! Arena-based AVL tree.
//!
//! Nodes live in a [`Vec`]-backed [`Arena`] and refer to their children by
//! `Option<u32>` index. Insert and delete are recursive: each level
//! reattaches the subtree returned by the level below, refreshes its cached
//! height and applies at most one single or double rotation.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`AvlNode`] |
//! [`arena`] | [`Arena`] slot table with free list |
//! [`util`] | rotations, `insert`, `remove`, `find_min`, invariant checks, debug printer |
//! [`snapshot`] | [`NodeLinks`] shape export |
//! [`tree`] | [`AvlTree`] owning wrapper |
//!
//! # Example
//!
//! ```
//! use avl_tree::{AvlTree, NodeLinks};
//!
//! let mut tree = AvlTree::new();
//! for key in [50, 40, 30] {
//!     tree.insert(key);
//! }
//! assert_eq!(
//!     tree.snapshot(),
//!     vec![
//!         NodeLinks::new(40, Some(30), Some(50)),
//!         NodeLinks::new(30, None, None),
//!         NodeLinks::new(50, None, None),
//!     ]
//! );
//! assert!(tree.delete(&40));
//! assert!(!tree.delete(&40));
//! tree.assert_valid().unwrap();
//! ```

pub mod arena;
pub mod error;
pub mod snapshot;
pub mod tree;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use error::InvariantViolation;
pub use snapshot::{collect_links, NodeLinks};
pub use tree::{AvlTree, Iter};
pub use types::AvlNode;
