//! In-memory task repository.

use std::collections::BTreeMap;

use crate::board::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Ordered in-memory task repository.
///
/// Cloning the repository yields an independent snapshot of the board.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: BTreeMap<TaskId, Task>,
    next_id: Option<u64>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates an empty repository whose first identifier is `first_id`.
    #[must_use]
    pub const fn starting_at(first_id: u64) -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: Some(first_id),
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn next_id(&mut self) -> TaskRepositoryResult<TaskId> {
        let value = self.next_id.ok_or(TaskRepositoryError::IdsExhausted)?;
        self.next_id = value.checked_add(1);
        Ok(TaskId::new(value))
    }

    fn store(&mut self, task: Task) -> TaskRepositoryResult<()> {
        if self.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        self.tasks.insert(task.id(), task);
        Ok(())
    }

    fn update(&mut self, task: Task) -> TaskRepositoryResult<()> {
        let slot = self
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task;
        Ok(())
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.tasks.remove(&id)
    }

    fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    fn all(&self) -> Vec<&Task> {
        self.tasks.values().collect()
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
