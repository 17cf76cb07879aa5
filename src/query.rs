// Copyright (c) 2025 - Cowboy AI, Inc.
//! Read-Side Contracts
//!
//! Queries are request/response pairs that never touch the write path.
//! No routing is provided; whether a handler reads the state store directly
//! or a separate read model is the implementer's choice.

use async_trait::async_trait;

use crate::errors::CqrsResult;

/// A read request
pub trait Query: Send + Sync {}

/// The response to a [`Query`]
pub trait QueryResult: Send + Sync {}

/// Answers queries of type `Q` with results of type `R`
#[async_trait]
pub trait QueryHandler<Q, R>: Send + Sync
where
    Q: Query,
    R: QueryResult,
{
    /// Answer `query`
    async fn handle(&self, query: Q) -> CqrsResult<R>;
}
