//! End-to-end command sessions on a single in-memory board.

use super::helpers::{add_task, history_lines, move_task};
use rstest::{fixture, rstest};
use stageboard::board::{
    domain::{Stage, TaskId},
    services::{BoardCommand, CommandOutcome, InMemoryBoard, NoticeKind},
};

#[fixture]
fn board() -> InMemoryBoard {
    InMemoryBoard::in_memory()
}

#[rstest]
fn task_travels_through_every_stage(mut board: InMemoryBoard) -> Result<(), eyre::Report> {
    let id = add_task(&mut board, "Design spec")?;

    move_task(&mut board, id, Stage::InProgress, "")?;
    move_task(&mut board, id, Stage::ToDo, "blocked on review")?;
    move_task(&mut board, id, Stage::InProgress, "")?;
    move_task(&mut board, id, Stage::Done, "merged")?;

    assert_eq!(
        history_lines(&board, id),
        vec![
            "To Do → In Progress".to_owned(),
            "In Progress → To Do: blocked on review".to_owned(),
            "To Do → In Progress".to_owned(),
            "In Progress → Done: merged".to_owned(),
        ]
    );
    assert_eq!(board.task(id).map(|task| task.stage()), Some(Stage::Done));
    Ok(())
}

#[rstest]
#[case(Stage::ToDo)]
#[case(Stage::InProgress)]
#[case(Stage::Done)]
fn done_tasks_reject_every_drop(
    mut board: InMemoryBoard,
    #[case] target_stage: Stage,
) -> Result<(), eyre::Report> {
    let id = add_task(&mut board, "Ship release")?;
    move_task(&mut board, id, Stage::InProgress, "")?;
    move_task(&mut board, id, Stage::Done, "")?;

    let outcome = board.dispatch(BoardCommand::ProposeTransition {
        task_id: id,
        target_stage,
    });

    let notice = outcome
        .notice()
        .ok_or_else(|| eyre::eyre!("expected a rejection, got {outcome:?}"))?;
    assert_eq!(notice.kind(), NoticeKind::IllegalTransition);
    assert!(notice.message().contains(&format!("Done → {target_stage}")));
    assert_eq!(history_lines(&board, id).len(), 2);
    Ok(())
}

#[rstest]
fn snapshot_groups_filtered_tasks_into_columns(
    mut board: InMemoryBoard,
) -> Result<(), eyre::Report> {
    let spec = add_task(&mut board, "Design spec")?;
    let logo = add_task(&mut board, "Design logo")?;
    add_task(&mut board, "Build UI")?;
    move_task(&mut board, logo, Stage::InProgress, "")?;

    board.dispatch(BoardCommand::SetFilterText {
        text: "Design".to_owned(),
    });
    board.dispatch(BoardCommand::SelectTask { id: logo });
    let snapshot = board.snapshot();

    assert_eq!(snapshot.tasks.len(), 3);
    assert_eq!(snapshot.filter_text, "design");
    let titles: Vec<&str> = snapshot.columns.iter().map(|column| column.title).collect();
    assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
    let ids_per_column: Vec<Vec<_>> = snapshot
        .columns
        .iter()
        .map(|column| column.tasks.iter().map(|task| task.id()).collect())
        .collect();
    assert_eq!(ids_per_column, vec![vec![spec], vec![logo], vec![]]);
    assert_eq!(
        snapshot.selected.as_ref().map(|task| task.history().len()),
        Some(1)
    );
    assert!(!snapshot.prompt.visible);
    Ok(())
}

#[rstest]
fn notice_persists_until_dismissed(mut board: InMemoryBoard) -> Result<(), eyre::Report> {
    let id = add_task(&mut board, "Design spec")?;
    board.dispatch(BoardCommand::ProposeTransition {
        task_id: id,
        target_stage: Stage::Done,
    });

    add_task(&mut board, "Build UI")?;
    assert!(board.notice().is_some());
    assert!(board.snapshot().notice.is_some());

    assert_eq!(
        board.dispatch(BoardCommand::DismissNotice),
        CommandOutcome::Applied
    );
    assert!(board.snapshot().notice.is_none());
    Ok(())
}

#[rstest]
fn drop_of_unknown_task_is_silent(mut board: InMemoryBoard) {
    let outcome = board.dispatch(BoardCommand::ProposeTransition {
        task_id: TaskId::new(5),
        target_stage: Stage::InProgress,
    });

    assert!(matches!(outcome, CommandOutcome::Ignored(_)));
    assert!(board.notice().is_none());
    assert!(board.workflow().is_idle());
}
