// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stored event envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Event;

/// An event as recorded in an event log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEvent<E> {
    /// Position in the log, starting at 1
    pub sequence: u64,

    /// Unique event ID copied from the event
    pub event_id: Uuid,

    /// Event type name (for deserialization)
    pub event_type: String,

    /// Event schema version
    pub version: u32,

    /// When the event occurred
    pub timestamp: DateTime<Utc>,

    /// When the log recorded it
    pub recorded_at: DateTime<Utc>,

    /// The actual domain event data
    pub data: E,
}

impl<E: Event> StoredEvent<E> {
    /// Wrap `event` at the given log position
    pub fn new(sequence: u64, event: E) -> Self {
        Self {
            sequence,
            event_id: event.event_id(),
            event_type: event.event_name().to_string(),
            version: event.version(),
            timestamp: event.timestamp(),
            recorded_at: Utc::now(),
            data: event,
        }
    }
}

impl<E> StoredEvent<E> {
    /// Consume the envelope, returning the domain event
    pub fn into_data(self) -> E {
        self.data
    }
}
