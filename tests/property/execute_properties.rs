// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Service Execution
//!
//! For any sequence of commands, every successful `execute` advances the
//! cart by one and records one event, and every failed one leaves both
//! stores as they were.

use cim_cqrs::cart::AddItemToCart;
use cim_cqrs::Service;
use proptest::prelude::*;

use crate::fixtures::{Harness, CART_ID};

fn arb_sku() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("SKRCT"), Just("SKGHF"), Just("SKBAD"), Just("")]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_execute_is_all_or_nothing(skus in prop::collection::vec(arb_sku(), 0..20)) {
        let harness = Harness::new();

        tokio_test::block_on(async {
            for sku in &skus {
                let before_index = harness.states.current().await.index;
                let before_log = harness.events.len().await;

                match harness.service.execute(AddItemToCart::new(CART_ID, *sku)).await {
                    Ok(state) => {
                        assert_eq!(state.index, before_index + 1);
                        assert_eq!(harness.events.len().await, before_log + 1);
                    }
                    Err(_) => {
                        assert_eq!(harness.states.current().await.index, before_index);
                        assert_eq!(harness.events.len().await, before_log);
                    }
                }
            }
        });

        let accepted = skus.iter().filter(|sku| matches!(**sku, "SKRCT" | "SKGHF")).count();
        let final_state = tokio_test::block_on(harness.states.current());
        prop_assert_eq!(final_state.index, accepted as u64);
        prop_assert_eq!(tokio_test::block_on(harness.events.len()), accepted);
    }
}
