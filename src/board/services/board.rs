//! Board facade: command dispatch, selection, filter and notice state.

use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::board::{
    adapters::memory::InMemoryTaskRepository,
    config::BoardConfig,
    domain::{BoardDomainError, FilterText, Stage, Task, TaskId},
    ports::TaskRepository,
};

use super::{
    BoardCommand, BoardError, BoardResult, BoardSnapshot, CommandOutcome, Notice, PromptSnapshot,
    ProjectedView, TaskStore, TransitionWorkflow, project,
};

/// Board backed by the in-memory repository and the system clock.
pub type InMemoryBoard = Board<InMemoryTaskRepository, DefaultClock>;

/// A single task board and all of its interaction state.
///
/// The typed methods return a [`BoardResult`] for callers that want the
/// error as a value. [`Board::dispatch`] is the shell-facing entry point: it
/// classifies each failure as silent or user-visible and keeps the latest
/// visible one as the board's [`Notice`].
#[derive(Debug)]
pub struct Board<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    store: TaskStore<R, C>,
    workflow: TransitionWorkflow,
    selection: Option<TaskId>,
    filter: FilterText,
    notice: Option<Notice>,
}

impl<R, C> Clone for Board<R, C>
where
    R: TaskRepository + Clone,
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            workflow: self.workflow.clone(),
            selection: self.selection,
            filter: self.filter.clone(),
            notice: self.notice.clone(),
        }
    }
}

impl InMemoryBoard {
    /// Creates an empty in-memory board with default configuration.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::in_memory_with_config(BoardConfig::default())
    }

    /// Creates an empty in-memory board with `config`.
    #[must_use]
    pub fn in_memory_with_config(config: BoardConfig) -> Self {
        let repository = InMemoryTaskRepository::starting_at(config.first_task_id);
        Self::new(TaskStore::new(repository, Arc::new(DefaultClock), config))
    }
}

impl<R, C> Board<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Creates a board around an existing store.
    #[must_use]
    pub const fn new(store: TaskStore<R, C>) -> Self {
        Self {
            store,
            workflow: TransitionWorkflow::new(),
            selection: None,
            filter: FilterText::empty(),
            notice: None,
        }
    }

    /// Applies one shell command.
    pub fn dispatch(&mut self, command: BoardCommand) -> CommandOutcome {
        debug!(?command, "dispatching board command");
        match command {
            BoardCommand::AddTask { name } => {
                let result = self.add_task(&name).map(drop);
                self.settle(result, Notice::for_addition)
            }
            BoardCommand::RemoveTask { id } => {
                let result = self.remove_task(id).map(drop);
                self.settle(result, Notice::silent)
            }
            BoardCommand::ProposeTransition {
                task_id,
                target_stage,
            } => {
                let result = self.propose_transition(task_id, target_stage);
                self.settle(result, Notice::for_proposal)
            }
            BoardCommand::EditDraftNote { text } => {
                let result = self.edit_draft_note(text);
                self.settle(result, Notice::silent)
            }
            BoardCommand::ConfirmTransition => {
                let result = self.confirm_transition().map(drop);
                self.settle(result, Notice::for_commit)
            }
            BoardCommand::CancelTransition => {
                self.cancel_transition();
                CommandOutcome::Applied
            }
            BoardCommand::SetFilterText { text } => {
                self.set_filter_text(&text);
                CommandOutcome::Applied
            }
            BoardCommand::SelectTask { id } => {
                let result = self.select_task(id);
                self.settle(result, Notice::silent)
            }
            BoardCommand::ClearSelection => {
                self.clear_selection();
                CommandOutcome::Applied
            }
            BoardCommand::DismissNotice => {
                self.dismiss_notice();
                CommandOutcome::Applied
            }
        }
    }

    fn settle(
        &mut self,
        result: BoardResult<()>,
        surface: fn(&BoardError) -> Option<Notice>,
    ) -> CommandOutcome {
        let Err(error) = result else {
            return CommandOutcome::Applied;
        };

        if let Some(notice) = surface(&error) {
            warn!(%error, "board command rejected");
            self.notice = Some(notice.clone());
            CommandOutcome::Rejected(notice)
        } else {
            debug!(%error, "board command ignored");
            CommandOutcome::Ignored(error)
        }
    }

    /// Creates a task in To Do.
    ///
    /// # Errors
    ///
    /// Returns the store's validation error when the name is rejected.
    pub fn add_task(&mut self, name: &str) -> BoardResult<TaskId> {
        self.store.add_task(name)
    }

    /// Deletes a task and clears the selection if it pointed at it.
    ///
    /// A pending move of the removed task stays pending; confirming it
    /// reports the task as missing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no such task exists.
    pub fn remove_task(&mut self, id: TaskId) -> BoardResult<Task> {
        let removed = self
            .store
            .remove_task(id)
            .ok_or(BoardDomainError::TaskNotFound(id))?;
        if self.selection == Some(id) {
            self.selection = None;
        }
        Ok(removed)
    }

    /// Proposes moving a task to `target`.
    ///
    /// # Errors
    ///
    /// See [`TransitionWorkflow::propose`].
    pub fn propose_transition(&mut self, task_id: TaskId, target: Stage) -> BoardResult<()> {
        self.workflow.propose(&self.store, task_id, target)
    }

    /// Replaces the draft note of the pending move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoPendingTransition`] when no move is pending.
    pub fn edit_draft_note(&mut self, text: impl Into<String>) -> BoardResult<()> {
        self.workflow.edit_note(text)
    }

    /// Commits the pending move.
    ///
    /// # Errors
    ///
    /// See [`TransitionWorkflow::confirm`].
    pub fn confirm_transition(&mut self) -> BoardResult<Task> {
        self.workflow.confirm(&mut self.store)
    }

    /// Discards the pending move, if any.
    pub fn cancel_transition(&mut self) {
        self.workflow.cancel();
    }

    /// Replaces the name filter.
    pub fn set_filter_text(&mut self, text: &str) {
        self.filter = FilterText::new(text);
    }

    /// Selects a task to show its history.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no such task exists;
    /// the current selection is kept.
    pub fn select_task(&mut self, id: TaskId) -> BoardResult<()> {
        if self.store.task(id).is_none() {
            return Err(BoardDomainError::TaskNotFound(id).into());
        }
        self.selection = Some(id);
        Ok(())
    }

    /// Clears the selection.
    pub const fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Acknowledges and returns the current notice.
    pub const fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Returns the task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore<R, C> {
        &self.store
    }

    /// Returns the transition workflow.
    #[must_use]
    pub const fn workflow(&self) -> &TransitionWorkflow {
        &self.workflow
    }

    /// Returns every task in ascending identifier order.
    #[must_use]
    pub fn tasks(&self) -> Vec<&Task> {
        self.store.tasks()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.task(id)
    }

    /// Returns the selected task, resolved against the live store.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.selection.and_then(|id| self.store.task(id))
    }

    /// Returns the current name filter.
    #[must_use]
    pub const fn filter_text(&self) -> &FilterText {
        &self.filter
    }

    /// Returns the notice awaiting acknowledgement, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns the confirmation prompt as it should be rendered.
    #[must_use]
    pub fn prompt(&self) -> PromptSnapshot {
        self.workflow.prompt()
    }

    /// Returns the filtered, ordered view of the board.
    #[must_use]
    pub fn projected(&self) -> ProjectedView<'_> {
        project(self.store.tasks(), &self.filter)
    }

    /// Captures everything the shell renders.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }
}
