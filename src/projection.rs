// Copyright (c) 2025 - Cowboy AI, Inc.

//! Projector - Pure Fold of Events into State
//!
//! A projector derives the next aggregate state from the current state and
//! one event:
//!
//! ```text
//! project(State(n-1), Event(n)) = State(n)
//! ```
//!
//! # Purity
//!
//! Implementations must be pure functions of their two inputs:
//!
//! 1. **No I/O**: the projector never reads or writes external systems
//! 2. **No mutation**: `current_state` is borrowed immutably; a new value is returned
//! 3. **Deterministic**: the same `(state, event)` pair always yields an equal state
//!
//! Re-applying an event onto its own output is *not* a no-op: every
//! application advances the state's `index` by one.
//!
//! # Example Implementation
//!
//! ```rust
//! use async_trait::async_trait;
//! use chrono::{DateTime, Utc};
//! use cim_cqrs::{CqrsResult, Event, Projector, State};
//! use uuid::Uuid;
//!
//! #[derive(Clone)]
//! struct Tally {
//!     index: u64,
//!     total: i64,
//! }
//!
//! impl State for Tally {
//!     fn index(&self) -> u64 {
//!         self.index
//!     }
//! }
//!
//! struct Added {
//!     id: Uuid,
//!     at: DateTime<Utc>,
//!     amount: i64,
//! }
//!
//! impl Event for Added {
//!     fn event_name(&self) -> &str { "Added" }
//!     fn version(&self) -> u32 { 1 }
//!     fn timestamp(&self) -> DateTime<Utc> { self.at }
//!     fn event_id(&self) -> Uuid { self.id }
//! }
//!
//! struct TallyProjector;
//!
//! #[async_trait]
//! impl Projector<Added, Tally> for TallyProjector {
//!     async fn project(&self, current_state: &Tally, event: &Added) -> CqrsResult<Tally> {
//!         Ok(Tally {
//!             index: current_state.index + 1,
//!             total: current_state.total + event.amount,
//!         })
//!     }
//!
//!     fn name(&self) -> &str {
//!         "tally"
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::aggregate::State;
use crate::errors::{CqrsError, CqrsResult};
use crate::events::Event;

/// Folds one event onto the current state
///
/// # Errors
///
/// `UnhandledEventKind` when the projector has no rule for the event.
/// Use [`unhandled`] to build it consistently.
#[async_trait]
pub trait Projector<E, S>: Send + Sync
where
    E: Event,
    S: State,
{
    /// Produce the state that follows `current_state` once `event` is applied
    async fn project(&self, current_state: &S, event: &E) -> CqrsResult<S>;

    /// Name of this projector, used in logs and errors
    fn name(&self) -> &str;
}

/// Build the error a projector returns for an event it does not recognise
pub fn unhandled<E: Event + ?Sized>(projector: &str, event: &E) -> CqrsError {
    CqrsError::UnhandledEventKind {
        projector: projector.to_string(),
        event_name: event.event_name().to_string(),
    }
}
