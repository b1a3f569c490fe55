use avl_tree::InvariantViolation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Invalid demo case: {0}")]
    UnknownScenario(String),
    #[error("Scenario {0} has no keys")]
    EmptyScenario(String),
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("--format expects text or json")]
    MissingFormat,
    #[error("First argument must be a scenario name (see --list).")]
    MissingScenario,
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
