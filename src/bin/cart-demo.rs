// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cart Demo
//!
//! Runs a few cart commands through the event-based service using the
//! in-memory stores, then prints the resulting carts and event log.
//!
//! Run with: cargo run --bin cart-demo
//!
//! Configuration comes from the environment:
//! - `RUST_LOG` (default `info`)
//! - `CQRS_SERVICE_NAME`, `CQRS_SERIALIZE_AGGREGATES`, `CQRS_STEP_TIMEOUT_MS`

use anyhow::{Context, Result};
use cim_cqrs::cart::{
    AddItemProjector, AddItemToCart, AddItemToCartHandler, CartQuery, CartQueryHandler,
    CartService, CartState, ItemAddedToCart, ProductCatalog,
};
use cim_cqrs::{InMemoryEventStore, KeyedStateStore, QueryHandler, Service, ServiceConfig};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env().context("Invalid service configuration")?;
    info!("Starting {} with {:?}", config.name, config);

    let catalog = Arc::new(ProductCatalog::demo());
    let events = Arc::new(InMemoryEventStore::<ItemAddedToCart>::new());
    let states = Arc::new(KeyedStateStore::new(|cart_id: &str| CartState::empty(cart_id)));

    let service: CartService<_, _> = CartService::with_config(
        AddItemToCartHandler::new(Arc::clone(&catalog)),
        AddItemProjector,
        Arc::clone(&events),
        Arc::clone(&states),
        config,
    );

    let commands = [
        AddItemToCart::new("cart-alice", "SKRCT"),
        AddItemToCart::new("cart-alice", "SKGHF"),
        AddItemToCart::new("cart-bob", "SKGHF"),
        AddItemToCart::new("cart-bob", "SKMISSING"),
    ];

    for command in commands {
        let label = format!("{} <- {}", command.cart_id, command.sku);
        match service.execute(command).await {
            Ok(state) => info!(
                "{}: cart at index {} with {} items",
                label,
                state.index,
                state.items.len()
            ),
            Err(err) => warn!("{}: rejected: {}", label, err),
        }
    }

    let queries = CartQueryHandler::new(Arc::clone(&states));
    for cart_id in ["cart-alice", "cart-bob"] {
        let summary = queries
            .handle(CartQuery {
                cart_id: cart_id.to_string(),
            })
            .await
            .with_context(|| format!("Failed to read {cart_id}"))?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    for stored in events.events().await {
        println!(
            "#{} {} v{} {} -> {}",
            stored.sequence,
            stored.event_type,
            stored.version,
            stored.data.item.sku,
            stored.data.cart_id
        );
    }

    Ok(())
}
