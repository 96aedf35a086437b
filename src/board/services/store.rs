//! Task store: the task collection and its mutation rules.

use crate::board::{
    config::BoardConfig,
    domain::{BoardDomainError, Stage, Task, TaskId, TaskName, TransitionNote, is_legal_edge},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

use super::BoardResult;

/// Owner of a board's tasks.
///
/// Every mutation is applied to a copy of the affected task and written
/// back only when it succeeds, so a failed call leaves the store untouched.
#[derive(Debug)]
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    repository: R,
    clock: Arc<C>,
    config: BoardConfig,
}

impl<R, C> Clone for TaskStore<R, C>
where
    R: TaskRepository + Clone,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
        }
    }
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Creates a task store over `repository`.
    #[must_use]
    pub const fn new(repository: R, clock: Arc<C>, config: BoardConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Returns whether `(from, to)` is an edge of the stage policy.
    #[must_use]
    pub const fn is_legal_edge(from: Stage, to: Stage) -> bool {
        is_legal_edge(from, to)
    }

    /// Creates a task in [`Stage::ToDo`] and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskName`] or
    /// [`BoardDomainError::TaskNameTooLong`] when the name is rejected, and
    /// a repository error when no identifier is left or the task cannot be
    /// stored.
    pub fn add_task(&mut self, name: &str) -> BoardResult<TaskId> {
        let task_name = TaskName::new(name, self.config.max_task_name_length)?;
        let id = self.repository.next_id()?;
        let task = Task::new(id, task_name, &*self.clock);
        self.repository.store(task)?;
        debug!(task_id = %id, "task added");
        Ok(id)
    }

    /// Removes a task, returning it if it was present.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.repository.remove(id);
        if removed.is_some() {
            debug!(task_id = %id, "task removed");
        }
        removed
    }

    /// Moves a task to `target` and appends a history entry carrying `note`.
    ///
    /// The edge is checked again against the task's current stage.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the task is absent
    /// and [`BoardDomainError::IllegalTransition`] when the move is not a
    /// policy edge for the task's current stage.
    pub fn commit_transition(
        &mut self,
        id: TaskId,
        target: Stage,
        note: &TransitionNote,
    ) -> BoardResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .cloned()
            .ok_or(BoardDomainError::TaskNotFound(id))?;
        let from = task.stage();
        task.apply_transition(target, note, &*self.clock)?;

        let committed = task.clone();
        self.repository.update(task)?;
        info!(task_id = %id, %from, to = %target, "transition committed");
        Ok(committed)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.repository.find_by_id(id)
    }

    /// Returns every task in ascending identifier order.
    #[must_use]
    pub fn tasks(&self) -> Vec<&Task> {
        self.repository.all()
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    /// Returns whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }
}
