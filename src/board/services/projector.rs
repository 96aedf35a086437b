//! Filtered, stage-grouped projection of the board.

use std::cmp::Ordering;

use crate::board::domain::{FilterText, Stage, Task};

/// Orders tasks by stage column, then by ascending identifier.
///
/// Two tasks compare equal only when they share an identifier.
#[must_use]
pub fn projection_order(left: &Task, right: &Task) -> Ordering {
    left.stage()
        .position()
        .cmp(&right.stage().position())
        .then_with(|| left.id().cmp(&right.id()))
}

/// Projects `tasks` through `filter` into render order.
#[must_use]
pub fn project<'a, I>(tasks: I, filter: &FilterText) -> ProjectedView<'a>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut entries: Vec<&'a Task> = tasks
        .into_iter()
        .filter(|task| filter.matches(task.name().as_str()))
        .collect();
    entries.sort_by(|left, right| projection_order(left, right));
    ProjectedView { entries }
}

/// Tasks that passed the filter, in render order.
///
/// Every accessor returns a fresh iterator, so the view can be walked any
/// number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedView<'a> {
    entries: Vec<&'a Task>,
}

impl<'a> ProjectedView<'a> {
    /// Iterates over all visible tasks in render order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Task> {
        self.entries.iter().copied()
    }

    /// Returns the number of visible tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no task passed the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the visible tasks in `stage`, ordered by identifier.
    pub fn group(&self, stage: Stage) -> impl Iterator<Item = &'a Task> {
        self.iter().filter(move |task| task.stage() == stage)
    }

    /// Returns one group per stage in column order, including empty ones.
    pub fn groups(&self) -> impl Iterator<Item = StageGroup<'_, 'a>> {
        Stage::ALL
            .into_iter()
            .map(move |stage| StageGroup { stage, view: self })
    }
}

/// The visible tasks of one stage column.
#[derive(Debug, Clone, Copy)]
pub struct StageGroup<'v, 'a> {
    stage: Stage,
    view: &'v ProjectedView<'a>,
}

impl<'v, 'a> StageGroup<'v, 'a> {
    /// Returns the stage of this column.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Iterates over the tasks in this column.
    pub fn tasks(self) -> impl Iterator<Item = &'a Task> {
        self.view.group(self.stage)
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(self) -> usize {
        self.tasks().count()
    }

    /// Returns whether this column is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.tasks().next().is_none()
    }
}
