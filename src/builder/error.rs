//! Build errors for the FSM builder.

use crate::validation::TableViolation;
use thiserror::Error;

/// Errors that can occur when building a driver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State table rejected with {} violation(s): {}", .0.len(), summarize(.0))]
    InvalidTable(Vec<TableViolation>),
}

fn summarize(violations: &[TableViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
