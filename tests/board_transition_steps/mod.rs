//! Step definitions for board transition BDD scenarios.

pub mod given;
pub mod then;
