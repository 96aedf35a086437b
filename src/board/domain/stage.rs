//! Board stages and the fixed stage transition policy.

use super::ParseStageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board stage a task sits in.
///
/// Stages are ordered; the declaration order is the column order used when
/// projecting the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Work has not started.
    ToDo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl Stage {
    /// Every stage in board column order.
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the zero-based column position of this stage.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Returns the canonical machine representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to_do",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable column title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns whether moving from this stage to `target` is a policy edge.
    ///
    /// The graph is fixed: To Do → In Progress, In Progress → Done and
    /// In Progress → To Do. Done has no outgoing edges and no stage may
    /// move to itself.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::ToDo, Self::InProgress) | (Self::InProgress, Self::Done | Self::ToDo)
        )
    }

    /// Returns the stages this stage may move to, in column order.
    pub fn successors(self) -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(move |target| self.can_transition_to(*target))
    }

    /// Returns whether no move out of this stage is permitted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Returns whether `(from, to)` is an edge of the stage policy graph.
#[must_use]
pub const fn is_legal_edge(from: Stage, to: Stage) -> bool {
    from.can_transition_to(to)
}

impl fmt::Display for Stage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl TryFrom<&str> for Stage {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to_do" | "to do" | "todo" => Ok(Self::ToDo),
            "in_progress" | "in progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseStageError(value.to_owned())),
        }
    }
}
