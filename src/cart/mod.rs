// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shopping Cart Example Domain
//!
//! A small domain wired through the write path, used by the demo binary and
//! the integration tests:
//!
//! - [`AddItemToCart`] command, resolved against a [`ProductCatalog`]
//! - [`ItemAddedToCart`] event, the only fact this domain records
//! - [`CartState`] aggregate, one per `cart_id`
//! - [`CartQuery`] read side, answered from the keyed state store
//!
//! # Flow
//!
//! ```text
//! AddItemToCart { cart_id, sku }
//!     ↓ AddItemToCartHandler (catalog lookup)
//! ItemAddedToCart { cart_id, item }
//!     ↓ AddItemProjector
//! CartState { index + 1, items + [item] }
//! ```

pub mod catalog;
pub mod handlers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::{Command, State};
use crate::events::Event;
use crate::query::{Query, QueryResult};
use crate::service::EventBasedService;
use crate::state_store::AggregateKeyed;

pub use catalog::{Product, ProductCatalog};
pub use handlers::{AddItemProjector, AddItemToCartHandler, CartQueryHandler};

/// Event name recorded for [`ItemAddedToCart`]
pub const ITEM_ADDED_TO_CART: &str = "ItemAddedToCart";

/// Current shape of [`ItemAddedToCart`]
pub const ITEM_ADDED_TO_CART_VERSION: u32 = 1;

/// Cart service wired with the cart handler and projector
pub type CartService<ES, SS> = EventBasedService<
    AddItemToCart,
    ItemAddedToCart,
    CartState,
    AddItemToCartHandler,
    AddItemProjector,
    ES,
    SS,
>;

/// Add one unit of a catalog product to a cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemToCart {
    /// Target cart
    pub cart_id: String,

    /// Catalog SKU of the product to add
    pub sku: String,
}

impl AddItemToCart {
    pub fn new(cart_id: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            cart_id: cart_id.into(),
            sku: sku.into(),
        }
    }
}

impl Command for AddItemToCart {}

/// A product was added to a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAddedToCart {
    /// Event version for schema evolution
    pub event_version: u32,

    /// Unique event identifier (UUID v7 for time ordering)
    pub event_id: Uuid,

    /// When this event occurred
    pub timestamp: DateTime<Utc>,

    /// Cart the item went into
    pub cart_id: String,

    /// Product snapshot taken from the catalog
    pub item: Product,
}

impl ItemAddedToCart {
    /// Create the event for `item` going into `cart_id`, stamped now
    pub fn new(cart_id: impl Into<String>, item: Product) -> Self {
        Self::at(cart_id, item, Utc::now())
    }

    /// Create the event with an explicit timestamp
    pub fn at(cart_id: impl Into<String>, item: Product, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_version: ITEM_ADDED_TO_CART_VERSION,
            event_id: Uuid::now_v7(),
            timestamp,
            cart_id: cart_id.into(),
            item,
        }
    }
}

impl Event for ItemAddedToCart {
    fn event_name(&self) -> &str {
        ITEM_ADDED_TO_CART
    }

    fn version(&self) -> u32 {
        self.event_version
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }
}

impl AggregateKeyed for ItemAddedToCart {
    fn aggregate_key(&self) -> String {
        self.cart_id.clone()
    }
}

/// Cart aggregate state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub cart_id: String,
    pub index: u64,
    pub items: Vec<Product>,
}

impl CartState {
    /// A cart with no items and no applied events
    pub fn empty(cart_id: impl Into<String>) -> Self {
        Self {
            cart_id: cart_id.into(),
            index: 0,
            items: Vec::new(),
        }
    }

    /// Sum of item prices
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

impl State for CartState {
    fn index(&self) -> u64 {
        self.index
    }
}

impl AggregateKeyed for CartState {
    fn aggregate_key(&self) -> String {
        self.cart_id.clone()
    }
}

/// Ask for a cart's summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartQuery {
    pub cart_id: String,
}

impl Query for CartQuery {}

/// Summary of one cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub cart_id: String,
    pub index: u64,
    pub item_names: Vec<String>,
    pub total: f64,
}

impl QueryResult for CartSummary {}

impl From<&CartState> for CartSummary {
    fn from(state: &CartState) -> Self {
        Self {
            cart_id: state.cart_id.clone(),
            index: state.index,
            item_names: state.items.iter().map(|item| item.name.clone()).collect(),
            total: state.total(),
        }
    }
}
