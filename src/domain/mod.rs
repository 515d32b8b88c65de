//! Domain layer containing the value types exchanged with collaborators.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, authenticated user, errors)
//! - `conversation` - Conversation and message records
//! - `connected_account` - Link options and connection requests

pub mod connected_account;
pub mod conversation;
pub mod foundation;
