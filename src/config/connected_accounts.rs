//! Connected-accounts provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::connected_accounts::DEFAULT_API_BASE_URL;

/// Settings for the third-party account-linking provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectedAccountsConfig {
    /// Provider API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Provider API key, sent as `x-api-key`
    pub api_key: SecretString,

    /// Where the provider sends users after they authorize a link
    pub callback_url: String,
}

impl ConnectedAccountsConfig {
    /// Validate provider configuration
    ///
    /// In production the callback URL must use HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired(
                "CONNECTED_ACCOUNTS__API_KEY",
            ));
        }
        if self.callback_url.is_empty() {
            return Err(ValidationError::MissingRequired(
                "CONNECTED_ACCOUNTS__CALLBACK_URL",
            ));
        }
        if !is_http_url(&self.api_base_url) {
            return Err(ValidationError::InvalidUrl("CONNECTED_ACCOUNTS__API_BASE_URL"));
        }
        if !is_http_url(&self.callback_url) {
            return Err(ValidationError::InvalidUrl("CONNECTED_ACCOUNTS__CALLBACK_URL"));
        }
        if *environment == Environment::Production && !self.callback_url.starts_with("https://") {
            return Err(ValidationError::MustBeHttps("CONNECTED_ACCOUNTS__CALLBACK_URL"));
        }
        Ok(())
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
