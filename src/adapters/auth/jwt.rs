//! Shared-secret JWT adapter for session validation.
//!
//! Verifies HS256-signed access tokens issued by the auth service that fronts
//! this API:
//!
//! 1. Signature checked against the shared secret
//! 2. Expiry always enforced; issuer and audience when configured
//! 3. `sub` mapped to the domain `AuthenticatedUser`
//!
//! # Example
//!
//! ```ignore
//! use conversation_api::adapters::auth::{JwtConfig, JwtSessionValidator};
//!
//! let validator = JwtSessionValidator::new(JwtConfig::new("secret").with_issuer("https://auth.example.com"));
//! let user = validator.validate("eyJ...").await?;
//! ```

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the JWT adapter.
#[derive(Clone)]
pub struct JwtConfig {
    secret: SecretString,

    /// Expected `iss` claim, if any.
    pub issuer: Option<String>,

    /// Expected `aud` claim, if any.
    pub audience: Option<String>,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            issuer: None,
            audience: None,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }
}

/// Claims this service reads from an access token.
#[derive(Debug, Deserialize)]
struct AccessClaims {
    sub: String,

    #[serde(default)]
    email: Option<String>,

    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    preferred_username: Option<String>,
}

/// HS256 JWT implementation of `SessionValidator`.
pub struct JwtSessionValidator {
    config: JwtConfig,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            config,
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    tracing::warn!("Token rejected: {}", e);
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            })?
            .claims;

        let user_id = UserId::new(claims.sub).map_err(|_| {
            tracing::warn!("Token has empty subject");
            AuthError::InvalidToken
        })?;

        let mut user = AuthenticatedUser::new(user_id);
        if let Some(email) = claims.email {
            user = user.with_email(email);
        }
        if let Some(name) = claims.name.or(claims.preferred_username) {
            user = user.with_display_name(name);
        }
        Ok(user)
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}
