// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Store Abstraction
//!
//! This module defines the append-only sink that records domain events once
//! the state they produced has been persisted.
//!
//! # Architecture
//!
//! ```text
//! Command → Handler → Event → Projector → State → StateStore
//!                       │                              │
//!                       └──────────── EventStore ◄─────┘
//!                                  (after persist)
//! ```
//!
//! # Event Store Requirements
//!
//! 1. **Append-Only**: Events are never updated or deleted
//! 2. **Honest Acknowledgement**: `Ok(true)` only once the event is recorded
//! 3. **Collaborator-Owned Ordering**: partitioning and ordering of the log
//!    belong to the implementation
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_cqrs::event_store::{EventStore, InMemoryEventStore};
//!
//! let store = InMemoryEventStore::new();
//! assert!(store.publish(&event).await?);
//! assert_eq!(store.len().await, 1);
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CqrsResult;
use crate::events::Event;

pub mod memory;

pub use memory::InMemoryEventStore;

/// Append-only event sink
#[async_trait]
pub trait EventStore<E: Event>: Send + Sync {
    /// Append `event` to the log
    ///
    /// # Returns
    ///
    /// - `Ok(true)` once the event is durably recorded
    /// - `Ok(false)` if the store declined to record it
    ///
    /// # Errors
    ///
    /// `PersistFailed` (or any store-specific error) if the append failed
    async fn publish(&self, event: &E) -> CqrsResult<bool>;
}

#[async_trait]
impl<E, T> EventStore<E> for Arc<T>
where
    E: Event,
    T: EventStore<E> + ?Sized,
{
    async fn publish(&self, event: &E) -> CqrsResult<bool> {
        (**self).publish(event).await
    }
}
