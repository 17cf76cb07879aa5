// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory state stores

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::{AggregateKeyed, StateStore};
use crate::aggregate::State;
use crate::errors::CqrsResult;
use crate::events::Event;

/// Single-slot state store
///
/// Holds the state of exactly one aggregate. Construct it with the
/// aggregate's initial state and inject it into the service.
pub struct InMemoryStateStore<S> {
    slot: RwLock<S>,
}

impl<S: State> InMemoryStateStore<S> {
    /// Create a store holding `initial`
    pub fn new(initial: S) -> Self {
        Self {
            slot: RwLock::new(initial),
        }
    }

    /// Copy of the stored state
    pub async fn current(&self) -> S {
        self.slot.read().await.clone()
    }
}

#[async_trait]
impl<E, S> StateStore<E, S> for InMemoryStateStore<S>
where
    E: Event,
    S: State + 'static,
{
    async fn get_current_state(&self, _event: &E) -> CqrsResult<S> {
        Ok(self.slot.read().await.clone())
    }

    async fn update_state(&self, state: S) -> CqrsResult<()> {
        debug!("Storing state at index {}", state.index());
        *self.slot.write().await = state;
        Ok(())
    }
}

/// State store holding one slot per aggregate
///
/// Events and states name their aggregate through [`AggregateKeyed`].
/// Aggregates that have never been stored start from the state built by
/// the `initial` factory.
pub struct KeyedStateStore<S> {
    slots: RwLock<HashMap<String, S>>,
    initial: Box<dyn Fn(&str) -> S + Send + Sync>,
}

impl<S: State> KeyedStateStore<S> {
    /// Create an empty store using `initial` for unseen aggregates
    pub fn new<F>(initial: F) -> Self
    where
        F: Fn(&str) -> S + Send + Sync + 'static,
    {
        Self {
            slots: RwLock::new(HashMap::new()),
            initial: Box::new(initial),
        }
    }

    /// Copy of the stored state for `key`, if any has been persisted
    pub async fn get(&self, key: &str) -> Option<S> {
        self.slots.read().await.get(key).cloned()
    }

    /// Number of aggregates with persisted state
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    /// Whether no aggregate has persisted state yet
    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

#[async_trait]
impl<E, S> StateStore<E, S> for KeyedStateStore<S>
where
    E: Event + AggregateKeyed,
    S: State + AggregateKeyed + 'static,
{
    async fn get_current_state(&self, event: &E) -> CqrsResult<S> {
        let key = event.aggregate_key();
        let state = self
            .slots
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_else(|| (self.initial)(&key));
        Ok(state)
    }

    async fn update_state(&self, state: S) -> CqrsResult<()> {
        let key = state.aggregate_key();
        debug!("Storing state for {} at index {}", key, state.index());
        self.slots.write().await.insert(key, state);
        Ok(())
    }

    fn aggregate_key(&self, event: &E) -> String {
        event.aggregate_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    struct Ledger {
        account: String,
        index: u64,
    }

    impl State for Ledger {
        fn index(&self) -> u64 {
            self.index
        }
    }

    impl AggregateKeyed for Ledger {
        fn aggregate_key(&self) -> String {
            self.account.clone()
        }
    }

    struct Posted {
        account: String,
        id: Uuid,
        at: DateTime<Utc>,
    }

    impl Posted {
        fn to(account: &str) -> Self {
            Self {
                account: account.to_string(),
                id: Uuid::now_v7(),
                at: Utc::now(),
            }
        }
    }

    impl Event for Posted {
        fn event_name(&self) -> &str {
            "Posted"
        }

        fn version(&self) -> u32 {
            1
        }

        fn timestamp(&self) -> DateTime<Utc> {
            self.at
        }

        fn event_id(&self) -> Uuid {
            self.id
        }
    }

    impl AggregateKeyed for Posted {
        fn aggregate_key(&self) -> String {
            self.account.clone()
        }
    }

    fn empty_ledger(account: &str) -> Ledger {
        Ledger {
            account: account.to_string(),
            index: 0,
        }
    }

    #[tokio::test]
    async fn test_single_slot_replaces_state() {
        let store = InMemoryStateStore::new(empty_ledger("acc-1"));
        let event = Posted::to("acc-1");

        let loaded: Ledger = store.get_current_state(&event).await.unwrap();
        assert_eq!(loaded.index, 0);

        StateStore::<Posted, Ledger>::update_state(
            &store,
            Ledger {
                account: "acc-1".to_string(),
                index: 1,
            },
        )
        .await
        .unwrap();

        assert_eq!(store.current().await.index, 1);
        assert_eq!(
            StateStore::<Posted, Ledger>::aggregate_key(&store, &event),
            crate::state_store::DEFAULT_AGGREGATE_KEY
        );
    }

    #[tokio::test]
    async fn test_keyed_store_routes_by_event() {
        let store = KeyedStateStore::new(empty_ledger);
        assert!(store.is_empty().await);

        let first = store.get_current_state(&Posted::to("acc-1")).await.unwrap();
        assert_eq!(first, empty_ledger("acc-1"));

        StateStore::<Posted, Ledger>::update_state(
            &store,
            Ledger {
                account: "acc-1".to_string(),
                index: 3,
            },
        )
        .await
        .unwrap();

        let reloaded = store.get_current_state(&Posted::to("acc-1")).await.unwrap();
        let other = store.get_current_state(&Posted::to("acc-2")).await.unwrap();

        assert_eq!(reloaded.index, 3);
        assert_eq!(other, empty_ledger("acc-2"));
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("acc-2").await, None);
        assert_eq!(store.aggregate_key(&Posted::to("acc-9")), "acc-9");
    }
}
