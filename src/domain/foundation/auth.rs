//! Authentication types for the domain layer.
//!
//! These types represent an authenticated caller extracted from a bearer
//! token. They have **no external dependencies** - any token verifier can
//! populate them via the `SessionValidator` port.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token validation:
//! let user = AuthenticatedUser::new(UserId::new("user-123")?);
//!
//! // Inject into request extensions for handlers to use
//! request.extensions_mut().insert(user);
//! ```

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated token.
///
/// Only `id` drives data access; the remaining claims are informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// Email address, when the token carries one.
    pub email: Option<String>,

    /// Display name if available (may come from `name` or `preferred_username` claim).
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    /// Creates an authenticated user carrying only an id.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            email: None,
            display_name: None,
        }
    }

    /// Attaches an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attaches a display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for logging).
    #[error("Token expired")]
    TokenExpired,

    /// The token verifier could not be reached or is misconfigured.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// True when the error means "no authenticated user" rather than a
    /// failure of the verifier itself.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}
