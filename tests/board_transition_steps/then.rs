//! Then steps for board transition BDD scenarios.

use super::world::{BoardWorld, parse_stage};
use rstest_bdd_macros::then;

#[then(r#"the task "{name}" is in stage "{stage}""#)]
fn task_in_stage(world: &BoardWorld, name: String, stage: String) -> Result<(), eyre::Report> {
    let expected = parse_stage(&stage)?;
    let task = world.task_named(&name)?;
    if task.stage() != expected {
        return Err(eyre::eyre!(
            "expected stage {expected}, found {}",
            task.stage()
        ));
    }
    Ok(())
}

#[then(r#"the task "{name}" has no history"#)]
fn task_has_no_history(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let task = world.task_named(&name)?;
    eyre::ensure!(
        task.history().is_empty(),
        "expected empty history, found {} entries",
        task.history().len()
    );
    Ok(())
}

#[then(r#"the history of "{name}" reads "{entry}""#)]
fn history_reads(world: &BoardWorld, name: String, entry: String) -> Result<(), eyre::Report> {
    let task = world.task_named(&name)?;
    let summaries: Vec<String> = task.history().iter().map(ToString::to_string).collect();
    eyre::ensure!(
        summaries == vec![entry.clone()],
        "expected history [{entry}], found {summaries:?}"
    );
    Ok(())
}

#[then(r#"the latest history entry of "{name}" mentions "{text}""#)]
fn latest_entry_mentions(
    world: &BoardWorld,
    name: String,
    text: String,
) -> Result<(), eyre::Report> {
    let task = world.task_named(&name)?;
    let latest = task
        .history()
        .last()
        .ok_or_else(|| eyre::eyre!("task {name} has no history"))?;
    eyre::ensure!(
        latest.summary().contains(&text),
        "expected {latest} to mention {text}"
    );
    Ok(())
}

#[then("the confirmation prompt is shown with an empty note")]
fn prompt_shown(world: &BoardWorld) -> Result<(), eyre::Report> {
    let prompt = world.board.prompt();
    eyre::ensure!(prompt.visible, "expected the prompt to be visible");
    eyre::ensure!(
        prompt.draft_note.is_empty(),
        "expected an empty draft note, found {:?}",
        prompt.draft_note
    );
    Ok(())
}

#[then("no transition is pending")]
fn no_transition_pending(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.board.workflow().is_idle(),
        "expected idle workflow, found {:?}",
        world.board.workflow().state()
    );
    Ok(())
}

#[then(r#"a notice reports "{pair}""#)]
fn notice_reports(world: &BoardWorld, pair: String) -> Result<(), eyre::Report> {
    let notice = world
        .board
        .notice()
        .ok_or_else(|| eyre::eyre!("expected a notice on the board"))?;
    eyre::ensure!(
        notice.message().contains(&pair),
        "expected notice to mention {pair}, found {}",
        notice.message()
    );
    let outcome_notice = world.last_outcome.as_ref().and_then(|outcome| outcome.notice());
    eyre::ensure!(
        outcome_notice == Some(notice),
        "expected the last command to be rejected with the same notice"
    );
    Ok(())
}

#[then("the board has {count:usize} task")]
fn board_has_tasks(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.board.tasks().len();
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then(r#"the only projected task is "{name}""#)]
fn only_projected_task(world: &BoardWorld, name: String) -> Result<(), eyre::Report> {
    let names: Vec<&str> = world
        .board
        .projected()
        .iter()
        .map(|task| task.name().as_str())
        .collect();
    eyre::ensure!(names == vec![name.as_str()], "expected [{name}], found {names:?}");
    Ok(())
}
