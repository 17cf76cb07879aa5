// Copyright (c) 2025 - Cowboy AI, Inc.
//! Command-Side Aggregate Contracts
//!
//! An aggregate is the unit of state whose history is a sequence of events.
//! This module declares the shapes that take part in changing it:
//!
//! - [`Command`]: an intent to change state
//! - [`CommandHandler`]: translates a command into exactly one event
//! - [`State`]: the aggregate snapshot, derived only from events
//!
//! # Handler Pattern
//!
//! ```text
//! CommandHandler::execute(Command) → Result<Event, CqrsError>
//! ```
//!
//! Handlers may read reference data (a product catalog, a price list) to
//! enrich the event, but they never append to the event log and never touch
//! aggregate state. Persisting both is the service's job.

pub mod commands;
pub mod state;

pub use commands::{Command, CommandHandler};
pub use state::State;
