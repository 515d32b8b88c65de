//! Mock session validator for tests and local development.
//!
//! # Example
//!
//! ```ignore
//! use conversation_api::adapters::auth::MockSessionValidator;
//!
//! // Create a validator that accepts specific tokens
//! let validator = MockSessionValidator::new().with_test_user("valid-token", "user-123");
//!
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthenticatedUser, AuthError, UserId};
use crate::ports::SessionValidator;

/// Mock session validator.
///
/// Stores a map of tokens to users. Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.add_token(token, user);
        self
    }

    /// Adds a valid token for a bare user with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `user_id` is empty.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = UserId::new(user_id).expect("test user id must not be empty");
        self.with_user(token, AuthenticatedUser::new(user_id))
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap_or_else(|e| e.into_inner()) = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Registers a new valid token at runtime.
    pub fn add_token(&self, token: impl Into<String>, user: AuthenticatedUser) {
        self.tokens
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(token.into(), user);
    }

    /// Removes a token, making it invalid.
    pub fn remove_token(&self, token: &str) {
        self.tokens
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(token);
    }

    /// Returns the number of registered valid tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("user-123").unwrap()).with_email("test@example.com")
    }

    #[tokio::test]
    async fn returns_user_for_registered_token() {
        let validator = MockSessionValidator::new().with_user("valid-token", test_user());

        let user = validator.validate("valid-token").await.unwrap();

        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.email.as_deref(), Some("test@example.com"));
    }

    #[tokio::test]
    async fn returns_invalid_token_for_unknown() {
        let validator = MockSessionValidator::new();

        let result = validator.validate("unknown-token").await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn with_test_user_creates_bare_user() {
        let validator = MockSessionValidator::new().with_test_user("my-token", "user-456");

        let user = validator.validate("my-token").await.unwrap();

        assert_eq!(user.id.as_str(), "user-456");
        assert!(user.email.is_none());
    }

    #[tokio::test]
    async fn with_error_forces_error() {
        let validator = MockSessionValidator::new()
            .with_user("valid-token", test_user())
            .with_error(AuthError::service_unavailable("Test error"));

        let result = validator.validate("valid-token").await;

        assert!(matches!(result, Err(AuthError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn clear_error_restores_normal_operation() {
        let validator = MockSessionValidator::new()
            .with_user("valid-token", test_user())
            .with_error(AuthError::TokenExpired);

        assert!(validator.validate("valid-token").await.is_err());

        validator.clear_error();

        assert!(validator.validate("valid-token").await.is_ok());
    }

    #[tokio::test]
    async fn tokens_can_be_added_and_removed_at_runtime() {
        let validator = MockSessionValidator::new();
        assert!(validator.validate("token").await.is_err());

        validator.add_token("token", test_user());
        assert!(validator.validate("token").await.is_ok());

        validator.remove_token("token");
        assert!(validator.validate("token").await.is_err());
    }

    #[test]
    fn token_count_tracks_tokens() {
        let validator = MockSessionValidator::new()
            .with_test_user("t1", "u1")
            .with_test_user("t2", "u2");

        assert_eq!(validator.token_count(), 2);
    }
}
