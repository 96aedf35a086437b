//! Given steps for board transition BDD scenarios.

use super::world::{BoardWorld, parse_stage};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use stageboard::board::services::InMemoryBoard;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) {
    world.board = InMemoryBoard::in_memory();
    world.task_ids.clear();
    world.last_outcome = None;
}

#[given(r#"a task named "{name}""#)]
fn task_named(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let id = world
        .board
        .add_task(&name)
        .wrap_err("add task in scenario setup")?;
    world.task_ids.insert(name, id);
    Ok(())
}

#[given(r#"the task "{name}" has been dropped on "{stage}""#)]
fn task_dropped(world: &mut BoardWorld, name: String, stage: String) -> Result<(), eyre::Report> {
    let target = parse_stage(&stage)?;
    let id = world.task_named(&name)?.id();
    world
        .board
        .propose_transition(id, target)
        .wrap_err("propose transition in scenario setup")?;
    Ok(())
}
