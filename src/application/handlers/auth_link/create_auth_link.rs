//! CreateAuthLinkHandler - Command handler for starting an account link.
//!
//! Both identifiers are required and non-empty; the provider is not called
//! until they are.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::connected_account::{ConnectionRequest, LinkOptions};
use crate::domain::foundation::{AuthConfigId, UserId};
use crate::ports::{ConnectedAccounts, ConnectedAccountsError};

/// Command to create an auth link. Fields arrive as optional raw input.
#[derive(Debug, Clone, Default)]
pub struct CreateAuthLinkCommand {
    pub user_id: Option<String>,
    pub auth_config_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthLinkError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Provider(#[from] ConnectedAccountsError),
}

/// Handler for creating auth links.
pub struct CreateAuthLinkHandler {
    connected_accounts: Arc<dyn ConnectedAccounts>,
    callback_url: String,
}

impl CreateAuthLinkHandler {
    pub fn new(connected_accounts: Arc<dyn ConnectedAccounts>, callback_url: impl Into<String>) -> Self {
        Self {
            connected_accounts,
            callback_url: callback_url.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateAuthLinkCommand,
    ) -> Result<ConnectionRequest, AuthLinkError> {
        let user_id = cmd
            .user_id
            .and_then(|id| UserId::new(id).ok())
            .ok_or(AuthLinkError::MissingField("userId"))?;
        let auth_config_id = cmd
            .auth_config_id
            .and_then(|id| AuthConfigId::new(id).ok())
            .ok_or(AuthLinkError::MissingField("authConfigId"))?;

        let request = self
            .connected_accounts
            .create_connection_link(
                &user_id,
                &auth_config_id,
                LinkOptions::new(self.callback_url.clone()),
            )
            .await?;

        tracing::debug!(
            user_id = %user_id,
            auth_config_id = %auth_config_id,
            connection_id = request.id().unwrap_or("-"),
            "Auth link created"
        );
        Ok(request)
    }
}
