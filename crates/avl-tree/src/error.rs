use thiserror::Error;

/// A broken structural invariant, reported by
/// [`assert_avl_tree`](crate::util::assert_avl_tree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("node {node}: cached height {actual}, expected {expected}")]
    HeightMismatch {
        node: u32,
        expected: usize,
        actual: usize,
    },
    #[error("node {node}: balance factor {balance} out of range")]
    Unbalanced { node: u32, balance: i32 },
    #[error("node {node}: key out of order")]
    OrderViolated { node: u32 },
    #[error("tree reaches {actual} nodes but records size {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("arena holds {live} live nodes but tree records size {size}")]
    Leaked { live: usize, size: usize },
}
