//! Render-ready capture of a board.

use mockable::Clock;
use serde::Serialize;

use crate::board::{
    domain::{Stage, Task},
    ports::TaskRepository,
};

use super::{Board, Notice, PromptSnapshot};

/// One rendered stage column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageColumn {
    /// Column stage.
    pub stage: Stage,
    /// Column title.
    pub title: &'static str,
    /// Visible tasks in this column, ordered by identifier.
    pub tasks: Vec<Task>,
}

/// Everything the presentation shell needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    /// All tasks, unfiltered, in ascending identifier order.
    pub tasks: Vec<Task>,
    /// Filtered tasks grouped into the three stage columns.
    pub columns: Vec<StageColumn>,
    /// Confirmation prompt state.
    pub prompt: PromptSnapshot,
    /// Selected task with its history, if it still exists.
    pub selected: Option<Task>,
    /// Current normalised filter text.
    pub filter_text: String,
    /// Notice awaiting acknowledgement.
    pub notice: Option<Notice>,
}

impl BoardSnapshot {
    pub(super) fn capture<R, C>(board: &Board<R, C>) -> Self
    where
        R: TaskRepository,
        C: Clock,
    {
        let view = board.projected();
        let columns = view
            .groups()
            .map(|group| StageColumn {
                stage: group.stage(),
                title: group.stage().label(),
                tasks: group.tasks().cloned().collect(),
            })
            .collect();

        Self {
            tasks: board.tasks().into_iter().cloned().collect(),
            columns,
            prompt: board.prompt(),
            selected: board.selected_task().cloned(),
            filter_text: board.filter_text().as_str().to_owned(),
            notice: board.notice().cloned(),
        }
    }

    /// Returns the column for `stage`.
    #[must_use]
    pub fn column(&self, stage: Stage) -> Option<&StageColumn> {
        self.columns.iter().find(|column| column.stage == stage)
    }
}
