// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-cqrs
//!
//! Provides deterministic cart data and instrumented collaborators for the
//! service integration tests.
//!
//! # Design Principles
//! - Fixture events carry a fixed timestamp so they compare by value; events
//!   produced through `Harness` are stamped by the handler at call time
//! - Collaborators record every call into a shared journal so tests can
//!   assert the order the service invoked them in
//! - Failing collaborators fail at exactly one step

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

use cim_cqrs::cart::{
    AddItemProjector, AddItemToCartHandler, CartService, CartState, ItemAddedToCart, Product,
    ProductCatalog,
};
use cim_cqrs::{
    CqrsError, CqrsResult, EventStore, InMemoryEventStore, InMemoryStateStore, ServiceConfig,
    StateStore,
};

pub const CART_ID: &str = "cart-1";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn race_car_toy() -> Product {
    Product::new("RaceCar Toy", 34.34, "SKRCT")
}

pub fn gaming_headphones() -> Product {
    Product::new("Gaming Headphones", 19.34, "SKGHF")
}

/// An ItemAddedToCart event for `item` with the fixed timestamp
pub fn item_added_fixture(item: Product) -> ItemAddedToCart {
    ItemAddedToCart::at(CART_ID, item, fixed_timestamp())
}

pub fn catalog() -> Arc<ProductCatalog> {
    Arc::new(ProductCatalog::demo())
}

/// Ordered record of collaborator calls
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().expect("journal poisoned").push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().expect("journal poisoned").clone()
    }
}

/// Which step a [`RecordingStateStore`] should fail at
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StateFailure {
    None,
    Load,
    Persist,
}

/// In-memory state store that journals and optionally fails
pub struct RecordingStateStore {
    inner: InMemoryStateStore<CartState>,
    journal: Journal,
    failure: StateFailure,
}

impl RecordingStateStore {
    pub fn new(journal: Journal, failure: StateFailure) -> Self {
        Self {
            inner: InMemoryStateStore::new(CartState::empty(CART_ID)),
            journal,
            failure,
        }
    }

    pub async fn current(&self) -> CartState {
        self.inner.current().await
    }
}

#[async_trait]
impl StateStore<ItemAddedToCart, CartState> for RecordingStateStore {
    async fn get_current_state(&self, event: &ItemAddedToCart) -> CqrsResult<CartState> {
        self.journal.record("get_current_state");
        if self.failure == StateFailure::Load {
            return Err(CqrsError::StateLoadFailed("state database unreachable".into()));
        }
        self.inner.get_current_state(event).await
    }

    async fn update_state(&self, state: CartState) -> CqrsResult<()> {
        self.journal.record("update_state");
        if self.failure == StateFailure::Persist {
            return Err(CqrsError::StatePersistFailed("write rejected".into()));
        }
        StateStore::<ItemAddedToCart, CartState>::update_state(&self.inner, state).await
    }
}

/// In-memory event store that journals every publish
pub struct RecordingEventStore {
    inner: InMemoryEventStore<ItemAddedToCart>,
    journal: Journal,
}

impl RecordingEventStore {
    pub fn new(journal: Journal) -> Self {
        Self {
            inner: InMemoryEventStore::new(),
            journal,
        }
    }

    pub async fn events(&self) -> Vec<ItemAddedToCart> {
        self.inner
            .events()
            .await
            .into_iter()
            .map(|stored| stored.into_data())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.len().await
    }
}

#[async_trait]
impl EventStore<ItemAddedToCart> for RecordingEventStore {
    async fn publish(&self, event: &ItemAddedToCart) -> CqrsResult<bool> {
        self.journal.record("publish");
        self.inner.publish(event).await
    }
}

/// Fully instrumented cart service plus handles on its stores
pub struct Harness {
    pub service: CartService<Arc<RecordingEventStore>, Arc<RecordingStateStore>>,
    pub events: Arc<RecordingEventStore>,
    pub states: Arc<RecordingStateStore>,
    pub journal: Journal,
}

impl Harness {
    pub fn new() -> Self {
        Self::failing_at(StateFailure::None)
    }

    pub fn failing_at(failure: StateFailure) -> Self {
        let journal = Journal::default();
        let events = Arc::new(RecordingEventStore::new(journal.clone()));
        let states = Arc::new(RecordingStateStore::new(journal.clone(), failure));
        let service = CartService::with_config(
            AddItemToCartHandler::new(catalog()),
            AddItemProjector,
            Arc::clone(&events),
            Arc::clone(&states),
            ServiceConfig::new("cart-test"),
        );

        Self {
            service,
            events,
            states,
            journal,
        }
    }
}
