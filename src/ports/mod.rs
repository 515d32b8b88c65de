//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `SessionValidator` - bearer token verification
//! - `ConversationStore` - conversation and message persistence
//! - `ConnectedAccounts` - third-party account link creation

mod connected_accounts;
mod conversation_store;
mod session_validator;

pub use connected_accounts::{ConnectedAccounts, ConnectedAccountsError};
pub use conversation_store::{ConversationStore, StoreError};
pub use session_validator::SessionValidator;
