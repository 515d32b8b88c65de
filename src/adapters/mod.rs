//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `auth` - Bearer token verification (JWT, mock)
//! - `connected_accounts` - Account-linking provider client (HTTP, mock)
//! - `postgres` - PostgreSQL conversation store
//! - `storage` - In-memory conversation store
//! - `http` - axum REST surface

pub mod auth;
pub mod connected_accounts;
pub mod http;
pub mod postgres;
pub mod storage;

pub use auth::{JwtConfig, JwtSessionValidator, MockSessionValidator};
pub use connected_accounts::{ConnectedAccountsApiConfig, HttpConnectedAccounts, MockConnectedAccounts};
pub use postgres::PostgresConversationStore;
pub use storage::InMemoryConversationStore;
