//! Relay Backend
//!
//! HTTP client for the relay backend that owns `/users` and `/oauth`.
//! The host forwards the dashboard's calls through it unchanged, so
//! session cookies and login redirects keep working on one origin.

mod client;

pub use client::{is_hop_by_hop, RelayClient, RelayClientConfig, RelayError, RelayResponse};
