//! Task List Errors

use thiserror::Error;

/// Message shown when the add action is triggered with blank input
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a task.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Input was empty after trimming
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,
}
