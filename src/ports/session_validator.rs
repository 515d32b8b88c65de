//! Session validation port for bearer token verification.
//!
//! This port defines the contract for validating access tokens and extracting
//! user identity. It is provider-agnostic - the shipped implementations are a
//! shared-secret JWT verifier and a mock for tests.
//!
//! # Example Implementation
//!
//! ```ignore
//! pub struct JwtSessionValidator { ... }
//!
//! #[async_trait]
//! impl SessionValidator for JwtSessionValidator {
//!     async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
//!         // 1. Verify signature and expiry
//!         // 2. Map `sub` to AuthenticatedUser
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{AuthenticatedUser, AuthError};

/// Validates access tokens and extracts user identity.
///
/// HTTP middleware uses this to validate Bearer tokens and extract the
/// authenticated user.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` when the verifier itself fails
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate an access token and return the authenticated user.
    ///
    /// # Arguments
    ///
    /// * `token` - The raw token (without "Bearer " prefix)
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
