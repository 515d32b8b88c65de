//! Connected-accounts adapters.
//!
//! - `http_client` - REST client for the hosted provider
//! - `mock` - Canned responses with call recording

mod http_client;
mod mock;

pub use http_client::{ConnectedAccountsApiConfig, HttpConnectedAccounts, DEFAULT_API_BASE_URL};
pub use mock::{MockConnectedAccounts, RecordedLinkCall};
