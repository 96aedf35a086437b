//! Application services for the task board.
//!
//! [`TaskStore`] owns the task collection, [`TransitionWorkflow`] holds the
//! single pending stage move awaiting confirmation, [`project`] derives the
//! rendered view, and [`Board`] ties them together behind
//! [`BoardCommand`] dispatch.

mod board;
mod command;
mod error;
mod projector;
mod snapshot;
mod store;
mod workflow;

pub use board::{Board, InMemoryBoard};
pub use command::{BoardCommand, CommandOutcome, Notice, NoticeKind};
pub use error::{BoardError, BoardResult};
pub use projector::{ProjectedView, StageGroup, project, projection_order};
pub use snapshot::{BoardSnapshot, StageColumn};
pub use store::TaskStore;
pub use workflow::{PendingTransition, PromptSnapshot, TransitionWorkflow, WorkflowState};
