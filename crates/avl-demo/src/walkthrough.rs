//! Replays a [`Scenario`] into a list of snapshot steps.

use avl_tree::{AvlTree, NodeLinks};
use log::debug;
use serde::Serialize;

use crate::error::DemoError;
use crate::scenario::{Operation, Scenario};
use crate::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Normal,
    Before,
    Imbalanced,
    Balanced,
}

impl StepState {
    pub fn as_str(self) -> &'static str {
        match self {
            StepState::Normal => "normal",
            StepState::Before => "before",
            StepState::Imbalanced => "imbalanced",
            StepState::Balanced => "balanced",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub description: String,
    pub state: StepState,
    pub snapshot: Vec<NodeLinks<i64>>,
}

impl Step {
    fn new(description: String, state: StepState, snapshot: Vec<NodeLinks<i64>>) -> Self {
        Self {
            description,
            state,
            snapshot,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Walkthrough {
    pub scenario: &'static str,
    pub operation: Operation,
    pub explanation: &'static str,
    pub steps: Vec<Step>,
}

pub fn run(scenario: &Scenario) -> Result<Walkthrough, DemoError> {
    debug!("walkthrough: {} over {:?}", scenario.name, scenario.keys);
    let mut tree = AvlTree::new();
    let mut steps = Vec::new();

    match scenario.operation {
        Operation::Insert => {
            let (&last, init) = scenario
                .keys
                .split_last()
                .ok_or_else(|| DemoError::EmptyScenario(scenario.name.to_string()))?;

            for &k in init {
                tree.insert(k);
                steps.push(Step::new(format!("Inserted {k}"), StepState::Normal, tree.snapshot()));
            }

            let before = tree.snapshot();
            let mut preview = Shape::from_links(&before)?;
            preview.attach(last);
            steps.push(Step::new(
                format!("Tree before inserting {last}"),
                StepState::Before,
                before,
            ));
            steps.push(Step::new(
                format!("Tree after inserting {last} (imbalanced)"),
                StepState::Imbalanced,
                preview.to_links(),
            ));

            tree.insert(last);
        }
        Operation::Delete(key) => {
            for &k in scenario.keys {
                tree.insert(k);
                steps.push(Step::new(format!("Inserted {k}"), StepState::Normal, tree.snapshot()));
            }

            let before = tree.snapshot();
            let mut preview = Shape::from_links(&before)?;
            preview.detach(&key);
            steps.push(Step::new(
                format!("Tree before deleting {key}"),
                StepState::Before,
                before,
            ));
            steps.push(Step::new(
                format!("Tree after deleting {key} (imbalanced)"),
                StepState::Imbalanced,
                preview.to_links(),
            ));

            if !tree.delete(&key) {
                debug!("walkthrough: {key} was not in the tree");
            }
        }
    }

    tree.assert_valid()?;
    steps.push(Step::new(
        "Tree after rebalancing".to_string(),
        StepState::Balanced,
        tree.snapshot(),
    ));

    Ok(Walkthrough {
        scenario: scenario.name,
        operation: scenario.operation,
        explanation: scenario.explanation,
        steps,
    })
}
