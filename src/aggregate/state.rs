// Copyright (c) 2025 - Cowboy AI, Inc.
//! Aggregate state

/// Aggregate snapshot
///
/// `index` is the revision marker: it starts at the value chosen when the
/// aggregate is initialized and advances by exactly one per applied event.
/// States are replaced, never mutated in place, so implementors are `Clone`.
pub trait State: Clone + Send + Sync {
    /// Number of events folded into this state
    fn index(&self) -> u64;
}
