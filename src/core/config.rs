//! Client configuration.

use crate::core::domain::error::ValidationError;
use governor::Quota;
use std::num::NonZeroU32;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("vtapi/", env!("CARGO_PKG_VERSION"));

/// Settings for the HTTP layer of a [`VtClient`](crate::VtClient).
///
/// The defaults match a plain browser-style client: certificates are
/// verified, requests have no timeout and are never throttled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Accept self-signed or otherwise invalid TLS certificates.
    pub accept_invalid_certs: bool,
    /// Overall timeout per request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Client-side request throttling. `None` disables it.
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            accept_invalid_certs: false,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            rate_limit: None,
        }
    }
}

impl ClientConfig {
    /// Checks the configuration before a client is built from it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ValidationError::Field {
                field: "timeout".to_string(),
                message: "Timeout must be greater than zero".to_string(),
            });
        }
        if self.user_agent.trim().is_empty() {
            return Err(ValidationError::Field {
                field: "user_agent".to_string(),
                message: "User agent cannot be empty".to_string(),
            });
        }
        if let Some(rate_limit) = &self.rate_limit {
            rate_limit.quota()?;
        }
        Ok(())
    }
}

/// Token-bucket throttling applied before each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Sustained number of requests allowed per second.
    pub requests_per_second: u32,
    /// Number of requests that may be sent at once before throttling starts.
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub(crate) fn quota(&self) -> Result<Quota, ValidationError> {
        let per_second =
            NonZeroU32::new(self.requests_per_second).ok_or_else(|| ValidationError::Field {
                field: "requests_per_second".to_string(),
                message: "Rate limit must allow at least one request per second".to_string(),
            })?;
        let burst = NonZeroU32::new(self.burst_size).ok_or_else(|| ValidationError::Field {
            field: "burst_size".to_string(),
            message: "Burst size must be at least one".to_string(),
        })?;
        Ok(Quota::per_second(per_second).allow_burst(burst))
    }
}
