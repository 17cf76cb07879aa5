// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cart command handler, projector and query handler

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::{
    AddItemToCart, CartQuery, CartState, CartSummary, ItemAddedToCart, ProductCatalog,
    ITEM_ADDED_TO_CART_VERSION,
};
use crate::aggregate::CommandHandler;
use crate::errors::{CqrsError, CqrsResult};
use crate::projection::{unhandled, Projector};
use crate::query::QueryHandler;
use crate::state_store::KeyedStateStore;

/// Resolves the command's SKU in the catalog and records the product snapshot
pub struct AddItemToCartHandler {
    catalog: Arc<ProductCatalog>,
}

impl AddItemToCartHandler {
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CommandHandler<AddItemToCart, ItemAddedToCart> for AddItemToCartHandler {
    async fn execute(&self, command: AddItemToCart) -> CqrsResult<ItemAddedToCart> {
        if command.cart_id.trim().is_empty() {
            return Err(CqrsError::ValidationFailed("cart_id must not be empty".to_string()));
        }
        if command.sku.trim().is_empty() {
            return Err(CqrsError::ValidationFailed("sku must not be empty".to_string()));
        }

        let product = self
            .catalog
            .lookup(&command.sku)
            .cloned()
            .ok_or_else(|| CqrsError::NotFound(format!("product with SKU {}", command.sku)))?;

        debug!("Resolved {} to {}", command.sku, product.name);
        Ok(ItemAddedToCart::new(command.cart_id, product))
    }
}

/// Appends the event's product to the cart
pub struct AddItemProjector;

#[async_trait]
impl Projector<ItemAddedToCart, CartState> for AddItemProjector {
    async fn project(
        &self,
        current_state: &CartState,
        event: &ItemAddedToCart,
    ) -> CqrsResult<CartState> {
        if event.event_version != ITEM_ADDED_TO_CART_VERSION {
            return Err(unhandled(self.name(), event));
        }

        let mut items = current_state.items.clone();
        items.push(event.item.clone());

        Ok(CartState {
            cart_id: current_state.cart_id.clone(),
            index: current_state.index + 1,
            items,
        })
    }

    fn name(&self) -> &str {
        "add-item"
    }
}

/// Answers cart queries straight from the keyed state store
pub struct CartQueryHandler {
    states: Arc<KeyedStateStore<CartState>>,
}

impl CartQueryHandler {
    pub fn new(states: Arc<KeyedStateStore<CartState>>) -> Self {
        Self { states }
    }
}

#[async_trait]
impl QueryHandler<CartQuery, CartSummary> for CartQueryHandler {
    async fn handle(&self, query: CartQuery) -> CqrsResult<CartSummary> {
        self.states
            .get(&query.cart_id)
            .await
            .map(|state| CartSummary::from(&state))
            .ok_or_else(|| CqrsError::NotFound(format!("cart {}", query.cart_id)))
    }
}
