//! Canned rotation scenarios.

use serde::Serialize;

use crate::error::DemoError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "lowercase")]
pub enum Operation {
    /// The last key of the scenario is the one that triggers rebalancing.
    Insert,
    /// Build from all keys, then delete this one.
    Delete(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: &'static str,
    pub keys: &'static [i64],
    pub operation: Operation,
    pub explanation: &'static str,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "ll-insert",
        keys: &[50, 40, 30],
        operation: Operation::Insert,
        explanation: "Keys arrive in descending order. After 30 the root 50 has balance \
            factor +2 and 30 sits below the left child 40 on its left side, so one right \
            rotation at 50 lifts 40 to the root.",
    },
    Scenario {
        name: "rr-insert",
        keys: &[10, 20, 30],
        operation: Operation::Insert,
        explanation: "Keys arrive in ascending order. After 30 the root 10 has balance \
            factor -2 and 30 sits below the right child 20 on its right side, so one left \
            rotation at 10 lifts 20 to the root.",
    },
    Scenario {
        name: "lr-insert",
        keys: &[50, 30, 40],
        operation: Operation::Insert,
        explanation: "30 hangs left of 50 and 40 lands right of 30. The root is left-heavy \
            while the imbalance sits on the inner side, so 30 is rotated left first and \
            then 50 is rotated right, leaving 40 on top.",
    },
    Scenario {
        name: "rl-insert",
        keys: &[10, 30, 20],
        operation: Operation::Insert,
        explanation: "30 hangs right of 10 and 20 lands left of 30. The root is right-heavy \
            while the imbalance sits on the inner side, so 30 is rotated right first and \
            then 10 is rotated left, leaving 20 on top.",
    },
    Scenario {
        name: "ll-delete",
        keys: &[50, 30, 70, 20, 40, 60, 80, 10, 25],
        operation: Operation::Delete(60),
        explanation: "Removing 60 leaves 70 with only its right child. The root tips to \
            balance factor +1, which is still within bounds, so the tree keeps its shape \
            and 50 stays at the root.",
    },
    Scenario {
        name: "rr-delete",
        keys: &[50, 30, 70, 20, 40, 60, 80, 35, 45],
        operation: Operation::Delete(20),
        explanation: "Removing 20 leaves 30 with only the right subtree rooted at 40. 30 \
            reaches balance factor -2 and 40 is evenly balanced, so one left rotation at 30 \
            lifts 40 under the root.",
    },
    Scenario {
        name: "lr-delete",
        keys: &[50, 20, 70, 10, 30, 60, 80, 25, 35],
        operation: Operation::Delete(10),
        explanation: "Removing 10 leaves 20 with only the right subtree rooted at 30. 20 \
            reaches balance factor -2 and 30 is evenly balanced, so the child balance rule \
            picks one left rotation at 20 and 30 takes its place under the root.",
    },
    Scenario {
        name: "rl-delete",
        keys: &[50, 30, 80, 20, 40, 70, 90, 60, 75],
        operation: Operation::Delete(90),
        explanation: "Removing 90 leaves 80 with only the left subtree rooted at 70. 80 \
            reaches balance factor +2 and 70 is evenly balanced, so one right rotation at \
            80 lifts 70 under the root.",
    },
];

pub fn find(name: &str) -> Result<&'static Scenario, DemoError> {
    SCENARIOS
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| DemoError::UnknownScenario(name.to_string()))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SCENARIOS.iter().map(|s| s.name)
}
