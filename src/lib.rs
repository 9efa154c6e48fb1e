//! # Mnema - Memory-Augmented Chat Gateway
//!
//! A small HTTP gateway that lets a calling application conduct
//! memory-augmented chat conversations against a hosted memory/session/message
//! API and an LLM chat-completion service.
//!
//! ## Overview
//!
//! Mnema can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `mnema-server` binary
//! 2. **As a library** - Drive the orchestrator from your own Rust project
//!
//! The heart of the crate is the conversation orchestrator: it resolves or
//! creates a session, persists the incoming user turn, retrieves memory
//! context, reconstructs the ordered chat history, assembles the completion
//! prompt, and persists the assistant's reply. Everything else is request
//! validation and typed pass-through to the remote API.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use mnema::{HttpMemoryApi, OpenAiClient, Orchestrator};
//! use mnema::types::ChatRequest;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let memory = Arc::new(HttpMemoryApi::new("https://memory.example.com", "key")?);
//!     let completion = Arc::new(OpenAiClient::new(
//!         "sk-...".to_string(),
//!         "https://api.openai.com/v1".to_string(),
//!         "gpt-4o".to_string(),
//!     ));
//!
//!     let orchestrator = Orchestrator::new(memory, completion);
//!     let outcome = orchestrator
//!         .run_turn(ChatRequest {
//!             content: "What did I say about trains?".to_string(),
//!             memory_id: "mem-1".to_string(),
//!             customer_user_id: "user-1".to_string(),
//!             session_id: None,
//!             metadata: None,
//!             assisted: true,
//!         })
//!         .await?;
//!     println!("{}", outcome.response);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`conversation`] - The turn orchestrator (the core of the crate)
//! - [`llm`] - Completion client trait and OpenAI implementation
//! - [`remote`] - Typed client for the hosted memory API
//! - [`types`] - Common types and error handling
//! - [`utils`] - Environment configuration
//!
//! ## Error Model
//!
//! One [`AppError`] taxonomy covers the whole crate: invalid input (400),
//! remote memory API failures (502), completion failures (500), and a
//! generic internal bucket. A failed turn performs no rollback; an orphaned
//! user message without an assistant reply is an accepted limitation.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// CLI argument parsing for the server binary.
pub mod cli;
/// Conversation turn orchestration.
pub mod conversation;
/// Completion client abstractions.
pub mod llm;
/// Typed client for the hosted memory API.
pub mod remote;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use conversation::Orchestrator;
pub use llm::{CompletionClient, OpenAiClient};
pub use remote::{HttpMemoryApi, MemoryApi, SessionLookup};
pub use types::{AppError, Result};
pub use utils::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Environment-sourced configuration
    pub config: Arc<Config>,
    /// Typed client for the hosted memory API
    pub memory_api: Arc<dyn MemoryApi>,
    /// Chat-completion client
    pub completion: Arc<dyn CompletionClient>,
}
