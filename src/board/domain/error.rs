//! Error types for board domain validation and parsing.

use super::{Stage, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name exceeds the configured length limit.
    #[error("task name is {actual} characters long, limit is {max}")]
    TaskNameTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },

    /// The requested stage move is not an edge of the stage policy.
    #[error("invalid transition from {from} → {to} for task {task_id}")]
    IllegalTransition {
        /// Task that was asked to move.
        task_id: TaskId,
        /// Stage the task is currently in.
        from: Stage,
        /// Requested destination stage.
        to: Stage,
    },

    /// The referenced task does not exist on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// Error returned while parsing stages from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);
