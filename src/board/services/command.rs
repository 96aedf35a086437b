//! Commands accepted from the presentation shell and their outcomes.

use serde::{Deserialize, Serialize};

use crate::board::domain::{BoardDomainError, Stage, TaskId};

use super::BoardError;

/// A user gesture forwarded by the presentation shell.
///
/// Commands deserialize from tagged JSON, for example
/// `{"command": "propose_transition", "task_id": 3, "target_stage": "done"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum BoardCommand {
    /// Create a task in To Do.
    AddTask {
        /// Display name; ignored when blank.
        name: String,
    },
    /// Delete a task.
    RemoveTask {
        /// Task to delete.
        id: TaskId,
    },
    /// Drop a task onto a stage column.
    ProposeTransition {
        /// Task being dragged.
        task_id: TaskId,
        /// Column it was dropped on.
        target_stage: Stage,
    },
    /// Replace the draft note of the pending move.
    EditDraftNote {
        /// New draft text, kept verbatim.
        text: String,
    },
    /// Commit the pending move.
    ConfirmTransition,
    /// Discard the pending move.
    CancelTransition,
    /// Change the name filter.
    SetFilterText {
        /// Raw filter text.
        text: String,
    },
    /// Show a task's history.
    SelectTask {
        /// Task to select.
        id: TaskId,
    },
    /// Hide the selected task's history.
    ClearSelection,
    /// Acknowledge the current notice.
    DismissNotice,
}

/// Category of a user-visible rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The requested move is not a policy edge.
    IllegalTransition,
    /// The task of a pending move no longer exists.
    TaskMissing,
    /// Storage refused a new task or a committed move.
    StorageFailure,
}

/// Blocking, user-visible rejection message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
}

impl Notice {
    /// Creates a notice.
    #[must_use]
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the notice category.
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Returns the message to show.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the notice for an illegal move.
    #[must_use]
    pub fn illegal_transition(from: Stage, to: Stage) -> Self {
        Self::new(
            NoticeKind::IllegalTransition,
            format!("Invalid transition from {from} → {to}"),
        )
    }

    /// Returns the notice to show when a proposal fails, if the failure is
    /// user-visible.
    ///
    /// Only illegal moves are surfaced; drops naming a missing task are
    /// discarded silently.
    #[must_use]
    pub fn for_proposal(error: &BoardError) -> Option<Self> {
        match error {
            BoardError::Domain(BoardDomainError::IllegalTransition { from, to, .. }) => {
                Some(Self::illegal_transition(*from, *to))
            }
            _ => None,
        }
    }

    /// Returns the notice to show when a new task cannot be stored, if the
    /// failure is user-visible.
    ///
    /// Rejected names are discarded silently.
    #[must_use]
    pub fn for_addition(error: &BoardError) -> Option<Self> {
        match error {
            BoardError::Repository(err) => Some(Self::new(
                NoticeKind::StorageFailure,
                format!("The task could not be added: {err}"),
            )),
            BoardError::Domain(_)
            | BoardError::TransitionPending { .. }
            | BoardError::NoPendingTransition => None,
        }
    }

    /// Returns the notice to show when a confirmed move fails to commit, if
    /// the failure is user-visible.
    ///
    /// Every store failure is surfaced; confirming while idle is not.
    #[must_use]
    pub fn for_commit(error: &BoardError) -> Option<Self> {
        match error {
            BoardError::Domain(BoardDomainError::IllegalTransition { from, to, .. }) => {
                Some(Self::illegal_transition(*from, *to))
            }
            BoardError::Domain(BoardDomainError::TaskNotFound(id)) => Some(Self::new(
                NoticeKind::TaskMissing,
                format!("Task {id} no longer exists; the transition was discarded"),
            )),
            BoardError::Repository(err) => Some(Self::new(
                NoticeKind::StorageFailure,
                format!("The transition could not be saved: {err}"),
            )),
            BoardError::Domain(_)
            | BoardError::TransitionPending { .. }
            | BoardError::NoPendingTransition => None,
        }
    }

    /// Never surfaces anything.
    #[must_use]
    pub const fn silent(_error: &BoardError) -> Option<Self> {
        None
    }
}

/// Result of dispatching one [`BoardCommand`].
///
/// Errors never escape a command: they are either ignored silently or
/// surfaced as a [`Notice`]. In both cases the board is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command took effect.
    Applied,
    /// The command was a silent no-op.
    Ignored(BoardError),
    /// The command was refused with a user-visible notice.
    Rejected(Notice),
}

impl CommandOutcome {
    /// Returns whether the command took effect.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Returns the notice of a rejected command.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Rejected(notice) => Some(notice),
            Self::Applied | Self::Ignored(_) => None,
        }
    }
}
