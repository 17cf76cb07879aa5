// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event-based service
//!
//! Composes a command handler, a projector, an event store and a state store
//! into one unit of work:
//!
//! 1. Handle the command into an event
//! 2. Load the state the event applies to
//! 3. Project the event onto that state
//! 4. Persist the new state
//! 5. Publish the event
//!
//! If any step fails, the call fails and later steps are skipped.

use async_trait::async_trait;
use std::future::Future;
use std::marker::PhantomData;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::{AggregateLocks, ExecutionStage, Service};
use crate::aggregate::{Command, CommandHandler, State};
use crate::config::ServiceConfig;
use crate::errors::{CqrsError, CqrsResult};
use crate::event_store::EventStore;
use crate::events::Event;
use crate::projection::Projector;
use crate::state_store::StateStore;

/// Orchestrates one command through handler, projector and both stores
///
/// Collaborators are injected at construction; the service owns none of
/// the data they manage, only the order in which they are called.
pub struct EventBasedService<C, E, S, H, P, ES, SS> {
    command_handler: H,
    projector: P,
    event_store: ES,
    state_store: SS,
    config: ServiceConfig,
    locks: AggregateLocks,
    _types: PhantomData<fn(C) -> (E, S)>,
}

impl<C, E, S, H, P, ES, SS> EventBasedService<C, E, S, H, P, ES, SS>
where
    C: Command,
    E: Event,
    S: State,
    H: CommandHandler<C, E>,
    P: Projector<E, S>,
    ES: EventStore<E>,
    SS: StateStore<E, S>,
{
    /// Create a service with the default configuration
    pub fn new(command_handler: H, projector: P, event_store: ES, state_store: SS) -> Self {
        Self::with_config(
            command_handler,
            projector,
            event_store,
            state_store,
            ServiceConfig::default(),
        )
    }

    /// Create a service with an explicit configuration
    pub fn with_config(
        command_handler: H,
        projector: P,
        event_store: ES,
        state_store: SS,
        config: ServiceConfig,
    ) -> Self {
        Self {
            command_handler,
            projector,
            event_store,
            state_store,
            config,
            locks: AggregateLocks::new(),
            _types: PhantomData,
        }
    }

    /// The configuration this service runs with
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    async fn run(&self, command: C) -> CqrsResult<S> {
        debug!(stage = %ExecutionStage::Received, "Command received");

        let event = self
            .step(ExecutionStage::Handled, self.command_handler.execute(command))
            .await?;
        let event_name = event.event_name().to_string();

        let _guard = if self.config.serialize_aggregates {
            let key = self.state_store.aggregate_key(&event);
            debug!("Waiting for aggregate {}", key);
            Some(self.locks.acquire(&key).await)
        } else {
            None
        };

        let current_state = self
            .step(
                ExecutionStage::StateLoaded,
                self.state_store.get_current_state(&event),
            )
            .await?;

        let new_state = self
            .step(
                ExecutionStage::Projected,
                self.projector.project(&current_state, &event),
            )
            .await?;

        if current_state.index().checked_add(1) != Some(new_state.index()) {
            warn!(
                "Projector {} moved index from {} to {} for {}",
                self.projector.name(),
                current_state.index(),
                new_state.index(),
                event_name
            );
        }

        self.step(
            ExecutionStage::StatePersisted,
            self.state_store.update_state(new_state.clone()),
        )
        .await?;

        let published = self
            .step(ExecutionStage::EventPublished, self.event_store.publish(&event))
            .await
            .map_err(|err| divergence(&event_name, err))?;

        if !published {
            let err = CqrsError::PersistFailed {
                event_name,
                reason: "event store declined the event".to_string(),
            };
            error!(
                stage = %ExecutionStage::EventPublished,
                "State {} persisted without its event: {}",
                new_state.index(),
                err
            );
            return Err(err);
        }

        info!(
            stage = %ExecutionStage::Completed,
            "Applied {} ({}), state index now {}",
            event_name,
            event.event_id(),
            new_state.index()
        );
        Ok(new_state)
    }

    /// Await one collaborator call, bounded by the step timeout if set
    async fn step<T, F>(&self, stage: ExecutionStage, call: F) -> CqrsResult<T>
    where
        F: Future<Output = CqrsResult<T>>,
    {
        let result = match self.config.step_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => Err(CqrsError::Timeout { stage }),
            },
            None => call.await,
        };

        match &result {
            Ok(_) => debug!(stage = %stage, "Stage reached"),
            Err(err) if err.is_divergent() || stage == ExecutionStage::EventPublished => {
                error!(stage = %stage, "State may be persisted without its event: {}", err)
            }
            Err(err) => warn!(stage = %stage, "Execution failed: {}", err),
        }
        result
    }
}

/// Publish failures always surface as a divergence error
fn divergence(event_name: &str, err: CqrsError) -> CqrsError {
    if err.is_divergent() {
        err
    } else {
        CqrsError::PersistFailed {
            event_name: event_name.to_string(),
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl<C, E, S, H, P, ES, SS> Service<C, S> for EventBasedService<C, E, S, H, P, ES, SS>
where
    C: Command + 'static,
    E: Event + 'static,
    S: State + 'static,
    H: CommandHandler<C, E>,
    P: Projector<E, S>,
    ES: EventStore<E>,
    SS: StateStore<E, S>,
{
    async fn execute(&self, command: C) -> CqrsResult<S> {
        let span = info_span!("execute", service = %self.config.name);
        self.run(command).instrument(span).await
    }
}
