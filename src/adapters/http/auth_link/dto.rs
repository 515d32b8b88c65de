//! HTTP DTOs for auth link endpoints.
//!
//! The success body is the provider's connection request, passed through
//! unchanged, so only the request shape lives here.

use serde::Deserialize;

/// Request to start linking a third-party account.
///
/// Both fields are optional at the wire level; absence is reported as a
/// 400 by the handler rather than as a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthLinkRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub auth_config_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_fields() {
        let req: CreateAuthLinkRequest =
            serde_json::from_str(r#"{"userId":"u1","authConfigId":"ac1"}"#).unwrap();

        assert_eq!(req.user_id.as_deref(), Some("u1"));
        assert_eq!(req.auth_config_id.as_deref(), Some("ac1"));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let req: CreateAuthLinkRequest = serde_json::from_str("{}").unwrap();

        assert!(req.user_id.is_none());
        assert!(req.auth_config_id.is_none());
    }
}
