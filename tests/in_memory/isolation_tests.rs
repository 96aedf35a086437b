//! Independence of boards and repository snapshots.

use std::sync::Arc;

use super::helpers::{add_task, history_lines, move_task};
use stageboard::board::{
    adapters::memory::InMemoryTaskRepository,
    config::BoardConfig,
    domain::{Stage, TaskId, TransitionNote},
    ports::{TaskRepository, TaskRepositoryError},
    services::{InMemoryBoard, TaskStore},
};

#[test]
fn boards_do_not_share_state() -> Result<(), eyre::Report> {
    let mut first = InMemoryBoard::in_memory();
    let mut second = InMemoryBoard::in_memory();

    let id = add_task(&mut first, "Design spec")?;
    move_task(&mut first, id, Stage::InProgress, "")?;

    assert!(second.tasks().is_empty());
    let other = add_task(&mut second, "Build UI")?;
    assert_eq!(other, id, "each board allocates its own identifiers");
    assert_eq!(history_lines(&second, other), Vec::<String>::new());
    Ok(())
}

#[test]
fn cloned_board_is_an_independent_snapshot() -> Result<(), eyre::Report> {
    let mut board = InMemoryBoard::in_memory();
    let id = add_task(&mut board, "Design spec")?;
    let snapshot = board.clone();

    move_task(&mut board, id, Stage::InProgress, "started")?;

    assert_eq!(snapshot.task(id).map(|task| task.stage()), Some(Stage::ToDo));
    assert_eq!(board.task(id).map(|task| task.stage()), Some(Stage::InProgress));
    Ok(())
}

#[test]
fn repository_clone_keeps_identifier_sequence() -> Result<(), eyre::Report> {
    let mut store = TaskStore::new(
        InMemoryTaskRepository::new(),
        Arc::new(mockable::DefaultClock),
        BoardConfig::default(),
    );
    let first = store.add_task("Design spec")?;
    store.commit_transition(first, Stage::InProgress, &TransitionNote::empty())?;

    let mut repository = store.repository().clone();
    assert_eq!(repository.len(), 1);
    assert_eq!(repository.next_id(), Ok(TaskId::new(2)));
    Ok(())
}

#[test]
fn repository_never_reissues_the_last_identifier() {
    let mut repository = InMemoryTaskRepository::starting_at(u64::MAX - 1);
    assert_eq!(repository.next_id(), Ok(TaskId::new(u64::MAX - 1)));
    assert_eq!(repository.next_id(), Ok(TaskId::new(u64::MAX)));
    assert_eq!(repository.next_id(), Err(TaskRepositoryError::IdsExhausted));
    assert_eq!(repository.next_id(), Err(TaskRepositoryError::IdsExhausted));
}
