// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Cart Projector
//!
//! These tests verify properties that must hold for every state/event pair:
//! referential transparency, index advancement by exactly one, and that the
//! input state is never touched.

use cim_cqrs::cart::{AddItemProjector, CartState, ItemAddedToCart, Product};
use cim_cqrs::Projector;
use proptest::prelude::*;

use crate::fixtures::{item_added_fixture, CART_ID};

// ============================================================================
// Generators
// ============================================================================

fn arb_product() -> impl Strategy<Value = Product> {
    ("[A-Za-z ]{1,24}", 0.0f64..10_000.0, "SK[A-Z]{3}")
        .prop_map(|(name, price, sku)| Product::new(name, price, sku))
}

fn arb_cart() -> impl Strategy<Value = CartState> {
    (0u64..10_000, prop::collection::vec(arb_product(), 0..8)).prop_map(|(index, items)| {
        CartState {
            cart_id: CART_ID.to_string(),
            index,
            items,
        }
    })
}

fn project(state: &CartState, event: &ItemAddedToCart) -> CartState {
    tokio_test::block_on(AddItemProjector.project(state, event))
        .expect("projector accepts current-version events")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Same (state, event) always gives an equal result
    #[test]
    fn prop_projection_is_referentially_transparent(cart in arb_cart(), item in arb_product()) {
        let event = item_added_fixture(item);

        let first = project(&cart, &event);
        let second = project(&cart, &event);

        prop_assert_eq!(first, second);
    }

    /// Each projection advances the index by exactly one and appends the item
    #[test]
    fn prop_projection_advances_index(cart in arb_cart(), item in arb_product()) {
        let before = cart.clone();
        let event = item_added_fixture(item.clone());

        let next = project(&cart, &event);

        prop_assert_eq!(next.index, before.index + 1);
        prop_assert_eq!(next.items.len(), before.items.len() + 1);
        prop_assert_eq!(next.items.last(), Some(&item));
        prop_assert_eq!(&next.items[..before.items.len()], &before.items[..]);
        prop_assert_eq!(cart, before);
    }

    /// Folding n events from an empty cart lands on index n
    #[test]
    fn prop_folding_counts_events(items in prop::collection::vec(arb_product(), 0..16)) {
        let events: Vec<_> = items.iter().cloned().map(item_added_fixture).collect();

        let state = events
            .iter()
            .fold(CartState::empty(CART_ID), |state, event| project(&state, event));

        prop_assert_eq!(state.index, events.len() as u64);
        prop_assert_eq!(state.items, items);
    }
}
