//! PostgreSQL store settings.
//!
//! The section is optional. Without it the service keeps conversations in
//! process memory.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Hard ceiling on `max_connections`.
const POOL_CEILING: u32 = 100;

/// Connection settings for the conversation store.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL
    pub url: String,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection before the store reports
    /// itself unavailable
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// Run `CREATE TABLE IF NOT EXISTS` for the conversation tables at startup
    #[serde(default)]
    pub ensure_schema: bool,
}

impl DatabaseConfig {
    /// Config for `url` with default pool settings.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            ensure_schema: false,
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let scheme = match self.url.split_once("://") {
            Some((scheme, _)) => scheme,
            None if self.url.trim().is_empty() => {
                return Err(ValidationError::MissingRequired("DATABASE_URL"))
            }
            None => return Err(ValidationError::InvalidDatabaseUrl),
        };
        if !matches!(scheme, "postgres" | "postgresql") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }

        if self.max_connections > POOL_CEILING {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        if self.min_connections > self.max_connections {
            return Err(ValidationError::InvalidPoolSize);
        }
        Ok(())
    }
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout_secs() -> u64 {
    5
}
