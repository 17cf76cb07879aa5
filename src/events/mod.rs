// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain Events
//!
//! Events are immutable facts produced by command handlers. They are the
//! only input a projector uses to derive new state, and the only thing an
//! event store records.
//!
//! # Event Principles
//!
//! 1. **Events are immutable**: handed around by shared reference once created
//! 2. **Events are past tense**: `ItemAddedToCart`, not `AddItemToCart`
//! 3. **Events are versioned**: `version()` identifies the payload shape
//! 4. **Events are timestamped**: `timestamp()` records when the fact occurred
//!
//! # Event Flow
//!
//! ```text
//! Command → CommandHandler → Event → Projector → State
//!                              ↓
//!                          EventStore
//! ```
//!
//! # Example
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use cim_cqrs::Event;
//! use uuid::Uuid;
//!
//! #[derive(Debug, Clone)]
//! struct CounterIncremented {
//!     event_id: Uuid,
//!     timestamp: DateTime<Utc>,
//! }
//!
//! impl Event for CounterIncremented {
//!     fn event_name(&self) -> &str {
//!         "CounterIncremented"
//!     }
//!
//!     fn version(&self) -> u32 {
//!         1
//!     }
//!
//!     fn timestamp(&self) -> DateTime<Utc> {
//!         self.timestamp
//!     }
//!
//!     fn event_id(&self) -> Uuid {
//!         self.event_id
//!     }
//! }
//! ```

pub mod stored;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub use stored::StoredEvent;

/// An immutable fact produced by a command
pub trait Event: Send + Sync {
    /// Name of the event kind, e.g. `"ItemAddedToCart"`
    fn event_name(&self) -> &str;

    /// Payload shape version, bumped whenever the event schema changes
    fn version(&self) -> u32;

    /// When the fact occurred
    fn timestamp(&self) -> DateTime<Utc>;

    /// Unique identifier of this event instance
    fn event_id(&self) -> Uuid;
}
