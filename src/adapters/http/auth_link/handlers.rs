//! HTTP handlers for auth link endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::auth_link::{
    AuthLinkError, CreateAuthLinkCommand, CreateAuthLinkHandler,
};

use super::dto::CreateAuthLinkRequest;

const MISSING_FIELDS: &str = "userId and authConfigId are required";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthLinkHandlers {
    create_handler: Arc<CreateAuthLinkHandler>,
}

impl AuthLinkHandlers {
    pub fn new(create_handler: Arc<CreateAuthLinkHandler>) -> Self {
        Self { create_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/authLinks - Start a connected-account link
pub async fn create_auth_link(
    State(handlers): State<AuthLinkHandlers>,
    body: Result<Json<CreateAuthLinkRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected auth link body");
            return ApiError::validation(MISSING_FIELDS).into_response();
        }
    };

    let cmd = CreateAuthLinkCommand {
        user_id: req.user_id,
        auth_config_id: req.auth_config_id,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(request) => Json(request).into_response(),
        Err(AuthLinkError::MissingField(field)) => {
            tracing::debug!(field, "Auth link request missing field");
            ApiError::validation(MISSING_FIELDS).into_response()
        }
        Err(AuthLinkError::Provider(e)) => {
            tracing::error!(error = %e, "Failed to create auth link");
            ApiError::Internal("Failed to create auth link").into_response()
        }
    }
}
