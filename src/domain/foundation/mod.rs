//! Foundation module - Shared domain primitives.
//!
//! Identifiers, the authenticated caller, and validation errors.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::ValidationError;
pub use ids::{AuthConfigId, ConversationId, UserId};
