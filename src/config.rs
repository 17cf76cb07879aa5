// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{CqrsError, CqrsResult};

/// Environment variable holding the service name
pub const ENV_SERVICE_NAME: &str = "CQRS_SERVICE_NAME";

/// Environment variable toggling per-aggregate serialization
pub const ENV_SERIALIZE_AGGREGATES: &str = "CQRS_SERIALIZE_AGGREGATES";

/// Environment variable holding the step timeout in milliseconds
pub const ENV_STEP_TIMEOUT_MS: &str = "CQRS_STEP_TIMEOUT_MS";

/// Configuration for an [`EventBasedService`](crate::service::EventBasedService)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Name used in log spans
    pub name: String,

    /// Serialize load/project/persist/publish for calls on the same aggregate
    pub serialize_aggregates: bool,

    /// Upper bound for each collaborator call
    pub step_timeout: Option<Duration>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "event-based-service".to_string(),
            serialize_aggregates: true,
            step_timeout: None,
        }
    }
}

impl ServiceConfig {
    /// Create a configuration with the given service name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Enable or disable per-aggregate serialization
    pub fn with_serialize_aggregates(mut self, serialize: bool) -> Self {
        self.serialize_aggregates = serialize;
        self
    }

    /// Bound every collaborator call by `timeout`
    pub fn with_step_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> CqrsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> CqrsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(ENV_SERVICE_NAME) {
            if name.trim().is_empty() {
                return Err(CqrsError::Configuration(format!(
                    "{ENV_SERVICE_NAME} must not be empty"
                )));
            }
            config.name = name;
        }

        if let Some(raw) = lookup(ENV_SERIALIZE_AGGREGATES) {
            config.serialize_aggregates = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(CqrsError::Configuration(format!(
                        "{ENV_SERIALIZE_AGGREGATES} has invalid value {other:?}"
                    )))
                }
            };
        }

        if let Some(raw) = lookup(ENV_STEP_TIMEOUT_MS) {
            let millis: u64 = raw.trim().parse().map_err(|_| {
                CqrsError::Configuration(format!(
                    "{ENV_STEP_TIMEOUT_MS} must be a number of milliseconds, got {raw:?}"
                ))
            })?;
            config.step_timeout = (millis > 0).then(|| Duration::from_millis(millis));
        }

        Ok(config)
    }
}
