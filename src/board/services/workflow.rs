//! Confirmation workflow for proposed stage moves.
//!
//! A drop gesture proposes a move. A legal proposal parks the workflow in
//! [`WorkflowState::AwaitingConfirmation`] until the user confirms or
//! cancels; nothing blocks in the meantime. Only one move may be pending.

use crate::board::{
    domain::{BoardDomainError, Stage, Task, TaskId, TransitionNote},
    ports::TaskRepository,
};
use mockable::Clock;
use serde::Serialize;
use tracing::debug;

use super::{BoardError, BoardResult, TaskStore};

/// Stage move awaiting user confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingTransition {
    task_id: TaskId,
    from: Stage,
    target: Stage,
    draft_note: TransitionNote,
    visible: bool,
}

impl PendingTransition {
    /// Returns the task being moved.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the stage the task was in when the move was proposed.
    #[must_use]
    pub const fn from(&self) -> Stage {
        self.from
    }

    /// Returns the proposed destination stage.
    #[must_use]
    pub const fn target(&self) -> Stage {
        self.target
    }

    /// Returns the note drafted so far.
    #[must_use]
    pub const fn draft_note(&self) -> &TransitionNote {
        &self.draft_note
    }

    /// Returns whether the confirmation prompt should be shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Workflow state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkflowState {
    /// No move is pending.
    #[default]
    Idle,
    /// A legal move has been proposed and awaits confirm or cancel.
    AwaitingConfirmation(PendingTransition),
}

/// Render-ready view of the confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSnapshot {
    /// Whether the prompt is shown.
    pub visible: bool,
    /// Task being moved, if a move is pending.
    pub task_id: Option<TaskId>,
    /// Proposed destination, if a move is pending.
    pub target_stage: Option<Stage>,
    /// Current draft note text.
    pub draft_note: String,
}

impl PromptSnapshot {
    /// Returns the snapshot shown while no move is pending.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            visible: false,
            task_id: None,
            target_stage: None,
            draft_note: String::new(),
        }
    }
}

/// Holder of the single pending-transition slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionWorkflow {
    state: WorkflowState,
}

impl TransitionWorkflow {
    /// Creates an idle workflow.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: WorkflowState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Returns the pending move, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingTransition> {
        match &self.state {
            WorkflowState::Idle => None,
            WorkflowState::AwaitingConfirmation(pending) => Some(pending),
        }
    }

    /// Returns whether no move is pending.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, WorkflowState::Idle)
    }

    /// Returns the prompt as the shell should render it.
    #[must_use]
    pub fn prompt(&self) -> PromptSnapshot {
        self.pending()
            .map_or_else(PromptSnapshot::hidden, |pending| PromptSnapshot {
                visible: pending.visible,
                task_id: Some(pending.task_id),
                target_stage: Some(pending.target),
                draft_note: pending.draft_note.as_str().to_owned(),
            })
    }

    /// Proposes moving `task_id` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TransitionPending`] while another move awaits
    /// confirmation, [`BoardDomainError::TaskNotFound`] when the task is
    /// absent and [`BoardDomainError::IllegalTransition`] when the move is
    /// not a policy edge. The workflow state is unchanged on error.
    pub fn propose<R, C>(
        &mut self,
        store: &TaskStore<R, C>,
        task_id: TaskId,
        target: Stage,
    ) -> BoardResult<()>
    where
        R: TaskRepository,
        C: Clock,
    {
        if let Some(pending) = self.pending() {
            return Err(BoardError::TransitionPending {
                task_id: pending.task_id,
                target: pending.target,
            });
        }

        let task = store
            .task(task_id)
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;
        let from = task.stage();
        if !TaskStore::<R, C>::is_legal_edge(from, target) {
            return Err(BoardDomainError::IllegalTransition {
                task_id,
                from,
                to: target,
            }
            .into());
        }

        debug!(task_id = %task_id, %from, to = %target, "transition proposed");
        self.state = WorkflowState::AwaitingConfirmation(PendingTransition {
            task_id,
            from,
            target,
            draft_note: TransitionNote::empty(),
            visible: true,
        });
        Ok(())
    }

    /// Replaces the draft note of the pending move verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoPendingTransition`] when no move is pending.
    pub fn edit_note(&mut self, text: impl Into<String>) -> BoardResult<()> {
        match &mut self.state {
            WorkflowState::Idle => Err(BoardError::NoPendingTransition),
            WorkflowState::AwaitingConfirmation(pending) => {
                pending.draft_note = TransitionNote::new(text);
                Ok(())
            }
        }
    }

    /// Commits the pending move through `store` and returns to idle.
    ///
    /// The pending slot is cleared whether or not the commit succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoPendingTransition`] when no move is pending,
    /// or the store's error when the task has gone or the move has become
    /// illegal since it was proposed.
    pub fn confirm<R, C>(&mut self, store: &mut TaskStore<R, C>) -> BoardResult<Task>
    where
        R: TaskRepository,
        C: Clock,
    {
        let WorkflowState::AwaitingConfirmation(pending) = std::mem::take(&mut self.state) else {
            return Err(BoardError::NoPendingTransition);
        };
        store.commit_transition(pending.task_id, pending.target, &pending.draft_note)
    }

    /// Discards the pending move, if any. Calling this while idle does nothing.
    pub fn cancel(&mut self) -> Option<PendingTransition> {
        match std::mem::take(&mut self.state) {
            WorkflowState::Idle => None,
            WorkflowState::AwaitingConfirmation(pending) => {
                debug!(task_id = %pending.task_id, "transition cancelled");
                Some(pending)
            }
        }
    }
}
