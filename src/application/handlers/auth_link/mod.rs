//! Auth link command handlers.

mod create_auth_link;

pub use create_auth_link::{AuthLinkError, CreateAuthLinkCommand, CreateAuthLinkHandler};
