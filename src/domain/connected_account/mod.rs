//! Connected-account linking types.
//!
//! A connection request is produced by the external connected-accounts
//! provider and handed back to the caller untouched. Only the fields this
//! service inspects for logging get accessors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options sent with a link request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkOptions {
    /// Where the provider redirects the user after authorization.
    pub callback_url: String,
}

impl LinkOptions {
    pub fn new(callback_url: impl Into<String>) -> Self {
        Self {
            callback_url: callback_url.into(),
        }
    }
}

/// Provider response to a link request, relayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionRequest(Value);

impl ConnectionRequest {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// Provider-assigned id of the pending connection, if present.
    pub fn id(&self) -> Option<&str> {
        self.field("id")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}
