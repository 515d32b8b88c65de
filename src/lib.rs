//! Conversation API - HTTP backend for a conversational assistant.
//!
//! Serves authenticated access to stored conversations and their messages,
//! and starts third-party account links through a connected-accounts
//! provider. Collaborators sit behind ports so the store, token verifier and
//! provider can be swapped for in-memory doubles.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
