//! Stageboard: a single-board task tracker core.
//!
//! This crate provides the state machine behind a three-stage task board
//! (To Do, In Progress, Done): creating and removing tasks, moving them
//! between stages under a fixed policy, confirming moves with an optional
//! note that is written to each task's history, and projecting the board
//! into a filtered, stage-grouped view for rendering.
//!
//! # Architecture
//!
//! Stageboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Command handling, confirmation workflow and projection
//!
//! Rendering, input widgets and drag gestures belong to an embedding shell
//! which forwards user gestures as [`board::services::BoardCommand`] values
//! and renders [`board::services::BoardSnapshot`].
//!
//! # Modules
//!
//! - [`board`]: Task store, transition workflow and view projection

pub mod board;
