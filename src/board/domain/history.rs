//! Transition notes and per-task history entries.

use super::Stage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text context attached to a confirmed stage move.
///
/// The note is kept verbatim while it is being drafted; no validation is
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionNote(String);

impl TransitionNote {
    /// Creates a note from draft text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns an empty note.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Returns the note text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the note carries no visible text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for TransitionNote {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Immutable record of one committed stage move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    from: Stage,
    to: Stage,
    note: Option<String>,
    recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates an entry for a move from `from` to `to`.
    ///
    /// Blank notes are recorded as absent.
    #[must_use]
    pub fn new(from: Stage, to: Stage, note: &TransitionNote, recorded_at: DateTime<Utc>) -> Self {
        let recorded_note = (!note.is_blank()).then(|| note.as_str().to_owned());
        Self {
            from,
            to,
            note: recorded_note,
            recorded_at,
        }
    }

    /// Returns the stage the task left.
    #[must_use]
    pub const fn from(&self) -> Stage {
        self.from
    }

    /// Returns the stage the task entered.
    #[must_use]
    pub const fn to(&self) -> Stage {
        self.to
    }

    /// Returns the note recorded with the move, if any.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns when the move was committed.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Returns the human-readable log line for this entry.
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)?;
        if let Some(note) = &self.note {
            write!(f, ": {note}")?;
        }
        Ok(())
    }
}
