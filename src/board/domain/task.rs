//! Task aggregate root.

use super::{BoardDomainError, HistoryEntry, Stage, TaskId, TaskName, TransitionNote};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Task aggregate root.
///
/// A task always sits in one of the fixed [`Stage`]s and keeps an
/// append-only history with one entry per committed stage move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    stage: Stage,
    history: Vec<HistoryEntry>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in [`Stage::ToDo`] with an empty history.
    #[must_use]
    pub fn new(id: TaskId, name: TaskName, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            name,
            stage: Stage::ToDo,
            history: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the committed stage moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether this task may move to `target` from its current stage.
    #[must_use]
    pub const fn can_move_to(&self, target: Stage) -> bool {
        self.stage.can_transition_to(target)
    }

    /// Moves the task to `target` and records the move in its history.
    ///
    /// The edge is checked against the task's current stage, so a move that
    /// was legal when proposed but has since gone stale is rejected here.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IllegalTransition`] when `target` is not
    /// reachable from the current stage. The task is left unchanged.
    pub fn apply_transition(
        &mut self,
        target: Stage,
        note: &TransitionNote,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        if !self.can_move_to(target) {
            return Err(BoardDomainError::IllegalTransition {
                task_id: self.id,
                from: self.stage,
                to: target,
            });
        }

        let timestamp = clock.utc();
        let entry = HistoryEntry::new(self.stage, target, note, timestamp);
        self.stage = target;
        self.updated_at = timestamp;
        self.history.push(entry);
        Ok(())
    }
}
