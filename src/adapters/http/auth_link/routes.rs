//! HTTP routes for auth link endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_auth_link, AuthLinkHandlers};

/// Creates the auth link router. These routes take no bearer token.
pub fn auth_link_routes(handlers: AuthLinkHandlers) -> Router {
    Router::new()
        .route("/", post(create_auth_link))
        .with_state(handlers)
}
