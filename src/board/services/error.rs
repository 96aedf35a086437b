//! Service-level error type for board commands.

use crate::board::{
    domain::{BoardDomainError, Stage, TaskId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Service-level errors for board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Another stage move is already awaiting confirmation.
    #[error("transition of task {task_id} to {target} is awaiting confirmation")]
    TransitionPending {
        /// Task of the pending move.
        task_id: TaskId,
        /// Destination of the pending move.
        target: Stage,
    },

    /// No stage move is awaiting confirmation.
    #[error("no transition is awaiting confirmation")]
    NoPendingTransition,
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;
