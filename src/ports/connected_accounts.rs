//! Connected-accounts port.
//!
//! Asks a third-party account-linking provider for a connection request: a
//! pending connection plus the URL the user must visit to authorize it.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::connected_account::{ConnectionRequest, LinkOptions};
use crate::domain::foundation::{AuthConfigId, UserId};

/// Errors reported by the connected-accounts provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectedAccountsError {
    /// The provider could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("Provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// The provider answered 2xx but the body was unusable.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl ConnectedAccountsError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }
}

/// Creates account-link requests with the connected-accounts provider.
#[async_trait]
pub trait ConnectedAccounts: Send + Sync {
    /// Start linking `auth_config_id` for `user_id`.
    ///
    /// The returned request is passed to the caller unchanged.
    async fn create_connection_link(
        &self,
        user_id: &UserId,
        auth_config_id: &AuthConfigId,
        options: LinkOptions,
    ) -> Result<ConnectionRequest, ConnectedAccountsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_display_includes_status() {
        let err = ConnectedAccountsError::provider(422, "unknown auth config");
        assert_eq!(err.to_string(), "Provider returned 422: unknown auth config");
    }

    #[test]
    fn connected_accounts_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ConnectedAccounts>();
    }
}
