//! Repository port for task storage, lookup and identifier allocation.

use crate::board::domain::{Task, TaskId};
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Implementations hold the board's task collection for the lifetime of a
/// session. All methods are synchronous; a board is driven by one command
/// at a time.
pub trait TaskRepository {
    /// Allocates a fresh identifier.
    ///
    /// Identifiers are never handed out twice, even after the task that held
    /// one has been removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::IdsExhausted`] once every identifier
    /// has been used.
    fn next_id(&mut self) -> TaskRepositoryResult<TaskId>;

    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    fn store(&mut self, task: Task) -> TaskRepositoryResult<()>;

    /// Replaces an existing task with an updated copy.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    fn update(&mut self, task: Task) -> TaskRepositoryResult<()>;

    /// Removes a task, returning it if it was present.
    fn remove(&mut self, id: TaskId) -> Option<Task>;

    /// Finds a task by identifier.
    fn find_by_id(&self, id: TaskId) -> Option<&Task>;

    /// Returns every stored task in ascending identifier order.
    fn all(&self) -> Vec<&Task>;

    /// Returns the number of stored tasks.
    fn len(&self) -> usize;

    /// Returns whether no tasks are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// No unused task identifier remains.
    #[error("task identifiers exhausted")]
    IdsExhausted,
}
