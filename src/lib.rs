// Copyright (c) 2025 - Cowboy AI, Inc.
//! CQRS write path contracts for the Composable Information Machine
//!
//! This crate defines the minimal contract set for an event-sourced write
//! path and the orchestrator that composes it:
//!
//! ```text
//! Command → CommandHandler → Event → StateStore (load) → Projector → State
//!                                                                   ↓
//!                              EventStore (publish) ← StateStore (persist)
//! ```
//!
//! - [`aggregate`] - `Command`, `CommandHandler` and `State`
//! - [`events`] - the `Event` trait and the `StoredEvent` envelope
//! - [`projection`] - the pure `Projector` fold
//! - [`event_store`] - append-only `EventStore` and an in-memory log
//! - [`state_store`] - the `StateStore` strategy and in-memory stores
//! - [`query`] - read-side `Query`/`QueryHandler` contracts
//! - [`service`] - the `EventBasedService` orchestrator
//! - [`cart`] - a small shopping-cart domain built on the above

pub mod aggregate;
pub mod cart;
pub mod config;
pub mod errors;
pub mod event_store;
pub mod events;
pub mod projection;
pub mod query;
pub mod service;
pub mod state_store;

// Re-export commonly used types
pub use aggregate::{Command, CommandHandler, State};
pub use config::ServiceConfig;
pub use errors::{CqrsError, CqrsResult};
pub use event_store::{EventStore, InMemoryEventStore};
pub use events::{Event, StoredEvent};
pub use projection::Projector;
pub use query::{Query, QueryHandler, QueryResult};
pub use service::{EventBasedService, ExecutionStage, Service};
pub use state_store::{AggregateKeyed, InMemoryStateStore, KeyedStateStore, StateStore};
