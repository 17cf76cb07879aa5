// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for the command write path

use thiserror::Error;

use crate::service::ExecutionStage;

/// Errors that can occur while executing a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CqrsError {
    /// Command cannot be translated into an event
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Referenced enrichment data is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Projector has no rule for this event
    #[error("Projector {projector} cannot handle event {event_name}")]
    UnhandledEventKind {
        projector: String,
        event_name: String,
    },

    /// Current state could not be loaded
    #[error("State load failed: {0}")]
    StateLoadFailed(String),

    /// New state could not be stored
    #[error("State persist failed: {0}")]
    StatePersistFailed(String),

    /// Event store append failed after the new state was stored
    #[error("Event {event_name} was not recorded, state already persisted: {reason}")]
    PersistFailed { event_name: String, reason: String },

    /// A collaborator call exceeded the configured step timeout
    #[error("Operation timed out during {stage}")]
    Timeout { stage: ExecutionStage },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for write path operations
pub type CqrsResult<T> = Result<T, CqrsError>;

impl CqrsError {
    /// Whether the aggregate state may have been stored without its event
    ///
    /// Callers use this to route failures to a republish or reconciliation
    /// job instead of treating them as clean aborts. A timeout while the
    /// state is being written counts: the write may still have landed.
    pub fn is_divergent(&self) -> bool {
        match self {
            CqrsError::PersistFailed { .. } => true,
            CqrsError::Timeout { stage } => matches!(
                stage,
                ExecutionStage::StatePersisted | ExecutionStage::EventPublished
            ),
            _ => false,
        }
    }

    /// The stage whose transition this error aborted, if it belongs to one
    pub fn stage(&self) -> Option<ExecutionStage> {
        match self {
            CqrsError::ValidationFailed(_) | CqrsError::NotFound(_) => {
                Some(ExecutionStage::Handled)
            }
            CqrsError::StateLoadFailed(_) => Some(ExecutionStage::StateLoaded),
            CqrsError::UnhandledEventKind { .. } => Some(ExecutionStage::Projected),
            CqrsError::StatePersistFailed(_) => Some(ExecutionStage::StatePersisted),
            CqrsError::PersistFailed { .. } => Some(ExecutionStage::EventPublished),
            CqrsError::Timeout { stage } => Some(*stage),
            CqrsError::Configuration(_) | CqrsError::Serialization(_) => None,
        }
    }
}

impl From<serde_json::Error> for CqrsError {
    fn from(err: serde_json::Error) -> Self {
        CqrsError::Serialization(err.to_string())
    }
}
