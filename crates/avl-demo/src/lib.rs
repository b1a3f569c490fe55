//! Rotation walkthroughs on top of [`avl_tree`].
//!
//! Each [`Scenario`] builds a tree from a fixed key list and records a
//! snapshot after every step, plus a preview of the shape the final insert
//! or delete would leave without rebalancing. The crate only talks to the
//! tree through `insert`, `delete` and `snapshot`.

pub mod cli;
pub mod error;
pub mod scenario;
pub mod shape;
pub mod walkthrough;

pub use error::DemoError;
pub use scenario::{Operation, Scenario, SCENARIOS};
pub use shape::Shape;
pub use walkthrough::{Step, StepState, Walkthrough};
