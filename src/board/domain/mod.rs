//! Domain model for the task board.
//!
//! The board domain models tasks, the fixed stage policy, history entries
//! and filter text while keeping storage and presentation concerns outside
//! of the domain boundary.

mod error;
mod filter;
mod history;
mod ids;
mod stage;
mod task;

pub use error::{BoardDomainError, ParseStageError};
pub use filter::FilterText;
pub use history::{HistoryEntry, TransitionNote};
pub use ids::{TaskId, TaskName};
pub use stage::{Stage, is_legal_edge};
pub use task::Task;
