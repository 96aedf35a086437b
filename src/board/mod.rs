//! Task board management for Stageboard.
//!
//! The board owns a collection of tasks spread across three fixed stages.
//! Stage moves are proposed, confirmed with an optional note, and committed
//! into each task's append-only history. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Runtime tuning in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
