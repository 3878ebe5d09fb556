//! Client configuration.
//!
//! Provides the configuration structure for the catalog client: service
//! endpoint, request timeout, and user agent. Constructed once and treated
//! as immutable for the life of a cache instance.

use crate::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, OCAT_URL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the OCAT client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the OCAT details service
    pub ocat_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with catalog requests
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ocat_url: OCAT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create configuration with a custom OCAT endpoint
    ///
    /// Useful for pointing the client at a mirror or a local capture of
    /// the service.
    pub fn with_ocat_url(mut self, url: impl Into<String>) -> Self {
        self.ocat_url = url.into();
        self
    }

    /// Create configuration with a custom request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Create configuration with a custom user agent
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
