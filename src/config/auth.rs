//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Bearer token verification settings (HS256 JWT).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret used to verify token signatures
    pub jwt_secret: SecretString,

    /// Expected `iss` claim, checked when set
    #[serde(default)]
    pub issuer: Option<String>,

    /// Expected `aud` claim, checked when set
    #[serde(default)]
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: SecretString::new(secret.to_string()),
            issuer: None,
            audience: None,
        }
    }

    #[test]
    fn test_validation_missing_secret() {
        assert_eq!(
            config("").validate(),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config("super-secret").validate().is_ok());
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", config("super-secret"));
        assert!(!rendered.contains("super-secret"));
    }
}
