//! Shared helpers for in-memory board integration tests.

use stageboard::board::{
    domain::{Stage, TaskId},
    services::{BoardCommand, CommandOutcome, InMemoryBoard},
};

/// Adds a task through the command interface and returns its identifier.
///
/// # Errors
///
/// Returns an error if the command is not applied or the task cannot be
/// found afterwards.
pub fn add_task(board: &mut InMemoryBoard, name: &str) -> Result<TaskId, eyre::Report> {
    let outcome = board.dispatch(BoardCommand::AddTask {
        name: name.to_owned(),
    });
    eyre::ensure!(outcome.is_applied(), "add_task({name}) was not applied: {outcome:?}");
    board
        .tasks()
        .into_iter()
        .rev()
        .find(|task| task.name().as_str() == name.trim())
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("task {name} missing after creation"))
}

/// Proposes and confirms a move in one go.
///
/// # Errors
///
/// Returns an error if either step is not applied.
pub fn move_task(
    board: &mut InMemoryBoard,
    task_id: TaskId,
    target_stage: Stage,
    note: &str,
) -> Result<(), eyre::Report> {
    let proposed = board.dispatch(BoardCommand::ProposeTransition {
        task_id,
        target_stage,
    });
    eyre::ensure!(proposed.is_applied(), "proposal was not applied: {proposed:?}");
    if !note.is_empty() {
        board.dispatch(BoardCommand::EditDraftNote {
            text: note.to_owned(),
        });
    }
    let confirmed = board.dispatch(BoardCommand::ConfirmTransition);
    eyre::ensure!(
        confirmed == CommandOutcome::Applied,
        "confirmation was not applied: {confirmed:?}"
    );
    Ok(())
}

/// Returns the rendered history lines of a task.
#[must_use]
pub fn history_lines(board: &InMemoryBoard, task_id: TaskId) -> Vec<String> {
    board
        .task(task_id)
        .map(|task| task.history().iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}
