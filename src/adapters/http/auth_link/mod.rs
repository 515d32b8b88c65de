//! HTTP adapter for auth link endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::CreateAuthLinkRequest;
pub use handlers::AuthLinkHandlers;
pub use routes::auth_link_routes;
