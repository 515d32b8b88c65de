//! Connected-accounts provider adapter over HTTP.
//!
//! Implements `ConnectedAccounts` against the provider's REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ConnectedAccountsApiConfig::new(api_key);
//! let adapter = HttpConnectedAccounts::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;

use crate::domain::connected_account::{ConnectionRequest, LinkOptions};
use crate::domain::foundation::{AuthConfigId, UserId};
use crate::ports::{ConnectedAccounts, ConnectedAccountsError};

/// Default provider endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://backend.composio.dev";

const LINK_PATH: &str = "/api/v3/connected_accounts/link";

/// Provider API configuration.
#[derive(Clone)]
pub struct ConnectedAccountsApiConfig {
    api_key: SecretString,
    api_base_url: String,
}

impl ConnectedAccountsApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (tests, self-hosted deployments).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn link_url(&self) -> String {
        format!("{}{}", self.api_base_url, LINK_PATH)
    }
}

#[derive(Debug, Serialize)]
struct LinkRequestBody<'a> {
    user_id: &'a str,
    auth_config_id: &'a str,
    callback_url: &'a str,
}

/// HTTP implementation of `ConnectedAccounts`.
pub struct HttpConnectedAccounts {
    config: ConnectedAccountsApiConfig,
    http_client: reqwest::Client,
}

impl HttpConnectedAccounts {
    pub fn new(config: ConnectedAccountsApiConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ConnectedAccounts for HttpConnectedAccounts {
    async fn create_connection_link(
        &self,
        user_id: &UserId,
        auth_config_id: &AuthConfigId,
        options: LinkOptions,
    ) -> Result<ConnectionRequest, ConnectedAccountsError> {
        let body = LinkRequestBody {
            user_id: user_id.as_str(),
            auth_config_id: auth_config_id.as_str(),
            callback_url: &options.callback_url,
        };

        let response = self
            .http_client
            .post(self.config.link_url())
            .header("x-api-key", self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ConnectedAccountsError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                auth_config_id = %auth_config_id,
                "Connected-accounts link request rejected"
            );
            return Err(ConnectedAccountsError::provider(status.as_u16(), error_text));
        }

        // Any JSON document is relayed; only an unparseable body is an error.
        let body: Value = response.json().await.map_err(|e| {
            ConnectedAccountsError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        Ok(ConnectionRequest::new(body))
    }
}

impl std::fmt::Debug for HttpConnectedAccounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpConnectedAccounts")
            .field("api_base_url", &self.config.api_base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use serde_json::json;

    /// Serves `app` on an ephemeral local port and returns its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn link_against(base_url: String) -> Result<ConnectionRequest, ConnectedAccountsError> {
        HttpConnectedAccounts::new(ConnectedAccountsApiConfig::new("key").with_base_url(base_url))
            .create_connection_link(
                &UserId::new("u1").unwrap(),
                &AuthConfigId::new("ac1").unwrap(),
                LinkOptions::new("https://app.example.com/callback"),
            )
            .await
    }

    #[test]
    fn default_base_url_builds_link_url() {
        let config = ConnectedAccountsApiConfig::new("key");
        assert_eq!(
            config.link_url(),
            "https://backend.composio.dev/api/v3/connected_accounts/link"
        );
    }

    #[test]
    fn custom_base_url_drops_trailing_slash() {
        let config = ConnectedAccountsApiConfig::new("key").with_base_url("http://localhost:9000/");
        assert_eq!(
            config.link_url(),
            "http://localhost:9000/api/v3/connected_accounts/link"
        );
    }

    #[test]
    fn request_body_uses_snake_case_fields() {
        let body = LinkRequestBody {
            user_id: "u1",
            auth_config_id: "ac1",
            callback_url: "https://app.example.com/callback",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["user_id"], "u1");
        assert_eq!(json["auth_config_id"], "ac1");
        assert_eq!(json["callback_url"], "https://app.example.com/callback");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let adapter = HttpConnectedAccounts::new(ConnectedAccountsApiConfig::new("ak_live_secret"));
        assert!(!format!("{:?}", adapter).contains("ak_live_secret"));
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_network_error() {
        // Port 9 (discard) on localhost is not listening in test environments.
        let adapter = HttpConnectedAccounts::new(
            ConnectedAccountsApiConfig::new("key").with_base_url("http://127.0.0.1:9"),
        );

        let result = adapter
            .create_connection_link(
                &UserId::new("u1").unwrap(),
                &AuthConfigId::new("ac1").unwrap(),
                LinkOptions::new("https://app.example.com/callback"),
            )
            .await;

        assert!(matches!(result, Err(ConnectedAccountsError::Network(_))));
    }

    #[tokio::test]
    async fn object_body_is_relayed_with_api_key_sent() {
        let app = Router::new().route(
            LINK_PATH,
            post(|headers: axum::http::HeaderMap, axum::Json(body): axum::Json<Value>| async move {
                axum::Json(json!({
                    "redirectUrl": "https://provider/authorize",
                    "apiKey": headers.get("x-api-key").and_then(|v| v.to_str().ok()),
                    "echo": body,
                }))
            }),
        );

        let request = link_against(serve(app).await).await.unwrap();

        let value = request.as_value();
        assert_eq!(value["redirectUrl"], "https://provider/authorize");
        assert_eq!(value["apiKey"], "key");
        assert_eq!(value["echo"]["auth_config_id"], "ac1");
    }

    #[tokio::test]
    async fn non_object_json_is_relayed_verbatim() {
        for payload in [json!(["a", "b"]), json!("pending"), json!(null)] {
            let body = payload.clone();
            let app = Router::new().route(
                LINK_PATH,
                post(move || {
                    let body = body.clone();
                    async move { axum::Json(body) }
                }),
            );

            let request = link_against(serve(app).await).await.unwrap();

            assert_eq!(request.as_value(), &payload);
        }
    }

    #[tokio::test]
    async fn unparseable_success_body_is_invalid_response() {
        let app = Router::new().route(LINK_PATH, post(|| async { "not json" }));

        let result = link_against(serve(app).await).await;

        assert!(matches!(result, Err(ConnectedAccountsError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn rejected_request_carries_status() {
        let app = Router::new().route(
            LINK_PATH,
            post(|| async { (StatusCode::UNPROCESSABLE_ENTITY, "unknown auth config") }),
        );

        let result = link_against(serve(app).await).await;

        assert!(matches!(result, Err(ConnectedAccountsError::Provider { status: 422, .. })));
    }
}
