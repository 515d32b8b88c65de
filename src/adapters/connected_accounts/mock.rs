//! Mock connected-accounts provider for tests and local development.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::connected_account::{ConnectionRequest, LinkOptions};
use crate::domain::foundation::{AuthConfigId, UserId};
use crate::ports::{ConnectedAccounts, ConnectedAccountsError};

/// One recorded `create_connection_link` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLinkCall {
    pub user_id: String,
    pub auth_config_id: String,
    pub callback_url: String,
}

/// Mock provider returning a canned connection request.
#[derive(Debug)]
pub struct MockConnectedAccounts {
    response: Mutex<ConnectionRequest>,
    force_error: Mutex<Option<ConnectedAccountsError>>,
    calls: Mutex<Vec<RecordedLinkCall>>,
}

impl Default for MockConnectedAccounts {
    fn default() -> Self {
        Self {
            response: Mutex::new(ConnectionRequest::new(json!({
                "id": "ca_mock",
                "status": "INITIATED",
                "redirectUrl": "https://connect.example.com/link/ca_mock",
            }))),
            force_error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockConnectedAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `response` from every call.
    pub fn with_response(self, response: ConnectionRequest) -> Self {
        *self.response.lock().unwrap_or_else(|e| e.into_inner()) = response;
        self
    }

    /// Fail every call with `error`.
    pub fn with_error(self, error: ConnectedAccountsError) -> Self {
        *self.force_error.lock().unwrap_or_else(|e| e.into_inner()) = Some(error);
        self
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedLinkCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl ConnectedAccounts for MockConnectedAccounts {
    async fn create_connection_link(
        &self,
        user_id: &UserId,
        auth_config_id: &AuthConfigId,
        options: LinkOptions,
    ) -> Result<ConnectionRequest, ConnectedAccountsError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedLinkCall {
                user_id: user_id.to_string(),
                auth_config_id: auth_config_id.to_string(),
                callback_url: options.callback_url,
            });

        if let Some(error) = self
            .force_error
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(error);
        }

        Ok(self
            .response
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }
}
