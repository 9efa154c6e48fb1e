//! Remote Memory API Client
//!
//! This module wraps the hosted memory/session/message REST API behind a
//! typed interface. The rest of the application depends on the [`MemoryApi`]
//! trait so tests can substitute fakes for the network client.
//!
//! # Architecture
//!
//! - [`MemoryApi`] - The trait every backend implements
//! - [`SessionLookup`] - Explicit found/not-found outcome for session lookup
//! - [`HttpMemoryApi`] - The reqwest-backed production implementation
//!
//! Every call carries a static `X-API-Key` credential injected at
//! construction time; nothing is read from the environment after startup.

/// Reqwest-backed client for the hosted memory API.
pub mod client;
/// The `MemoryApi` trait and session lookup outcome.
pub mod traits;

pub use client::HttpMemoryApi;
pub use traits::{MemoryApi, SessionLookup};
