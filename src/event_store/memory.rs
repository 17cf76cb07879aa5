// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory event store
//!
//! Keeps the log in a `Vec` behind an async lock. Useful for tests, demos and
//! as a reference for the append-only contract; nothing survives a restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::EventStore;
use crate::errors::CqrsResult;
use crate::events::{Event, StoredEvent};

/// Append-only event log held in memory
pub struct InMemoryEventStore<E> {
    log: RwLock<Vec<StoredEvent<E>>>,
}

impl<E> InMemoryEventStore<E> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            log: RwLock::new(Vec::new()),
        }
    }

    /// Number of recorded events
    pub async fn len(&self) -> usize {
        self.log.read().await.len()
    }

    /// Whether no event has been recorded yet
    pub async fn is_empty(&self) -> bool {
        self.log.read().await.is_empty()
    }
}

impl<E: Clone> InMemoryEventStore<E> {
    /// Snapshot of the log in append order
    pub async fn events(&self) -> Vec<StoredEvent<E>> {
        self.log.read().await.clone()
    }
}

impl<E> Default for InMemoryEventStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E> EventStore<E> for InMemoryEventStore<E>
where
    E: Event + Clone,
{
    async fn publish(&self, event: &E) -> CqrsResult<bool> {
        let mut log = self.log.write().await;
        let sequence = log.len() as u64 + 1;
        log.push(StoredEvent::new(sequence, event.clone()));

        debug!(
            "Recorded event {} ({}) at sequence {}",
            event.event_name(),
            event.event_id(),
            sequence
        );
        Ok(true)
    }
}
