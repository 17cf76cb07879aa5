// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for the Command Write Path
//!
//! This module provides the orchestrator that turns one command into one
//! persisted state and one recorded event.
//!
//! # Architecture
//!
//! ```text
//! Client Request
//!     ↓
//! Service::execute(Command)
//!     ↓
//! CommandHandler → Event
//!     ↓
//! StateStore::get_current_state(&Event) → State(n-1)
//!     ↓
//! Projector::project(State(n-1), Event) → State(n)
//!     ↓
//! StateStore::update_state(State(n))
//!     ↓
//! EventStore::publish(Event)
//!     ↓
//! State(n)
//! ```
//!
//! # Transaction Semantics
//!
//! Each `execute` call walks the stages below in order and never skips or
//! reorders them. A failure at any stage stops the call; later stages do not
//! run. Nothing is retried, compensated or rolled back.
//!
//! The event is published only after the new state is stored, so an event is
//! never recorded without its state. The reverse can happen: if publishing
//! fails, the stored state has no event. That case is reported as
//! [`CqrsError::PersistFailed`](crate::CqrsError::PersistFailed) so callers can
//! reconcile it.
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_cqrs::{EventBasedService, Service};
//!
//! let service = EventBasedService::new(handler, projector, event_store, state_store);
//! let state = service.execute(command).await?;
//! ```

pub mod event_based;
pub mod locks;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregate::{Command, State};
use crate::errors::CqrsResult;

pub use event_based::EventBasedService;
pub use locks::AggregateLocks;

/// Single public entry point of the write path
#[async_trait]
pub trait Service<C, S>: Send + Sync
where
    C: Command,
    S: State,
{
    /// Execute `command`, returning the aggregate state it produced
    async fn execute(&self, command: C) -> CqrsResult<S>;
}

/// Stages of a single `execute` call
///
/// ```text
/// Received → Handled → StateLoaded → Projected → StatePersisted → EventPublished → Completed
///     └──────────┴──────────┴────────────┴─────────────┴───────────────┴──→ Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionStage {
    /// Command accepted by the service
    Received,
    /// Command handler produced an event
    Handled,
    /// Current state loaded for the event
    StateLoaded,
    /// Projector produced the new state
    Projected,
    /// New state stored
    StatePersisted,
    /// Event recorded in the event store
    EventPublished,
    /// New state returned to the caller
    Completed,
    /// A stage failed
    Failed,
}

impl ExecutionStage {
    /// Stage that follows this one on success
    pub fn next(self) -> Option<ExecutionStage> {
        use ExecutionStage::*;

        match self {
            Received => Some(Handled),
            Handled => Some(StateLoaded),
            StateLoaded => Some(Projected),
            Projected => Some(StatePersisted),
            StatePersisted => Some(EventPublished),
            EventPublished => Some(Completed),
            Completed | Failed => None,
        }
    }

    /// Whether no further transition is possible
    pub fn is_terminal(self) -> bool {
        matches!(self, ExecutionStage::Completed | ExecutionStage::Failed)
    }
}

impl fmt::Display for ExecutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionStage::Received => "received",
            ExecutionStage::Handled => "handled",
            ExecutionStage::StateLoaded => "state_loaded",
            ExecutionStage::Projected => "projected",
            ExecutionStage::StatePersisted => "state_persisted",
            ExecutionStage::EventPublished => "event_published",
            ExecutionStage::Completed => "completed",
            ExecutionStage::Failed => "failed",
        };
        f.write_str(name)
    }
}
