// Copyright (c) 2025 - Cowboy AI, Inc.
//! Commands and command handlers

use async_trait::async_trait;

use crate::errors::CqrsResult;
use crate::events::Event;

/// An intent to change aggregate state
///
/// Commands carry whatever fields their handler needs to produce exactly one
/// event. They are consumed by value.
pub trait Command: Send + Sync {}

/// Translates a command into a single domain event
///
/// # Errors
///
/// - `NotFound` if the command references data the handler cannot resolve
/// - `ValidationFailed` if the command cannot be turned into a well-formed event
#[async_trait]
pub trait CommandHandler<C, E>: Send + Sync
where
    C: Command,
    E: Event,
{
    /// Handle `command`, returning the event it produces
    async fn execute(&self, command: C) -> CqrsResult<E>;
}
