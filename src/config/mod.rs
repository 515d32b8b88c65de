//! Application configuration module
//!
//! Configuration is read from environment variables (and a `.env` file in
//! development) with the `CONVERSATION_API` prefix; nested values use `__`
//! as the separator.
//!
//! # Example
//!
//! ```no_run
//! use conversation_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod connected_accounts;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use connected_accounts::ConnectedAccountsConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Bearer token verification
    pub auth: AuthConfig,

    /// Account-linking provider
    pub connected_accounts: ConnectedAccountsConfig,

    /// PostgreSQL conversation store; in-memory when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `CONVERSATION_API__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONVERSATION_API__CONNECTED_ACCOUNTS__CALLBACK_URL=...` -> `connected_accounts.callback_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONVERSATION_API")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate()?;
        self.connected_accounts.validate(&self.server.environment)?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CONVERSATION_API__AUTH__JWT_SECRET",
        "CONVERSATION_API__AUTH__ISSUER",
        "CONVERSATION_API__CONNECTED_ACCOUNTS__API_KEY",
        "CONVERSATION_API__CONNECTED_ACCOUNTS__CALLBACK_URL",
        "CONVERSATION_API__DATABASE__URL",
        "CONVERSATION_API__SERVER__PORT",
        "CONVERSATION_API__SERVER__ENVIRONMENT",
    ];

    fn set_minimal_env() {
        env::set_var("CONVERSATION_API__AUTH__JWT_SECRET", "test-secret");
        env::set_var("CONVERSATION_API__CONNECTED_ACCOUNTS__API_KEY", "ak_test");
        env::set_var(
            "CONVERSATION_API__CONNECTED_ACCOUNTS__CALLBACK_URL",
            "https://app.example.com/integrations/callback",
        );
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(extra: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        set_minimal_env();
        for (key, value) in extra {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config = load_with(&[]).unwrap();

        assert_eq!(config.auth.jwt_secret.expose_secret(), "test-secret");
        assert_eq!(
            config.connected_accounts.callback_url,
            "https://app.example.com/integrations/callback"
        );
        assert!(config.database.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn test_custom_port_and_issuer() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config = load_with(&[
            ("CONVERSATION_API__SERVER__PORT", "3000"),
            ("CONVERSATION_API__AUTH__ISSUER", "https://auth.example.com"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.auth.issuer.as_deref(), Some("https://auth.example.com"));
    }

    #[test]
    fn test_database_section_is_optional() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config = load_with(&[(
            "CONVERSATION_API__DATABASE__URL",
            "postgresql://test@localhost/test",
        )])
        .unwrap();

        let database = config.database.as_ref().unwrap();
        assert_eq!(database.url, "postgresql://test@localhost/test");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_callback_url_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("CONVERSATION_API__AUTH__JWT_SECRET", "test-secret");
        env::set_var("CONVERSATION_API__CONNECTED_ACCOUNTS__API_KEY", "ak_test");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_production_rejects_http_callback() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let config = load_with(&[
            ("CONVERSATION_API__SERVER__ENVIRONMENT", "production"),
            (
                "CONVERSATION_API__CONNECTED_ACCOUNTS__CALLBACK_URL",
                "http://app.example.com/callback",
            ),
        ])
        .unwrap();

        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::MustBeHttps("CONNECTED_ACCOUNTS__CALLBACK_URL"))
        );
    }
}
