// Copyright (c) 2025 - Cowboy AI, Inc.
//! State Store Strategy
//!
//! The service does not own aggregate state. It asks a caller-supplied
//! [`StateStore`] for the current state (routed by the event being applied)
//! and hands it the projected state to persist.
//!
//! # Contract
//!
//! ```text
//! get_current_state(&Event) → State      (step 2 of execute)
//! update_state(State)       → ()         (step 4 of execute)
//! aggregate_key(&Event)     → String     (serialization key)
//! ```
//!
//! `update_state` must only return `Ok` once the state is durably stored
//! according to the store's own durability contract; the service publishes
//! the event right after.

use async_trait::async_trait;
use std::sync::Arc;

use crate::aggregate::State;
use crate::errors::CqrsResult;
use crate::events::Event;

pub mod memory;

pub use memory::{InMemoryStateStore, KeyedStateStore};

/// Key used by stores that hold a single aggregate
pub const DEFAULT_AGGREGATE_KEY: &str = "default";

/// Identifies the aggregate an event or state belongs to
pub trait AggregateKeyed {
    /// Stable key of the owning aggregate
    fn aggregate_key(&self) -> String;
}

/// Loads and persists aggregate state on behalf of the service
#[async_trait]
pub trait StateStore<E, S>: Send + Sync
where
    E: Event,
    S: State,
{
    /// Load the state `event` will be applied to
    ///
    /// # Errors
    ///
    /// `StateLoadFailed` if the state cannot be read
    async fn get_current_state(&self, event: &E) -> CqrsResult<S>;

    /// Durably store `state`
    ///
    /// # Errors
    ///
    /// `StatePersistFailed` if the state could not be stored
    async fn update_state(&self, state: S) -> CqrsResult<()>;

    /// Key of the aggregate `event` targets
    ///
    /// Calls that share a key are serialized by the service when
    /// aggregate serialization is enabled.
    fn aggregate_key(&self, _event: &E) -> String {
        DEFAULT_AGGREGATE_KEY.to_string()
    }
}

#[async_trait]
impl<E, S, T> StateStore<E, S> for Arc<T>
where
    E: Event,
    S: State + 'static,
    T: StateStore<E, S> + ?Sized,
{
    async fn get_current_state(&self, event: &E) -> CqrsResult<S> {
        (**self).get_current_state(event).await
    }

    async fn update_state(&self, state: S) -> CqrsResult<()> {
        (**self).update_state(state).await
    }

    fn aggregate_key(&self, event: &E) -> String {
        (**self).aggregate_key(event)
    }
}
