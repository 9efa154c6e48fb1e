//! Completion Client Abstractions
//!
//! This module wraps the chat-completion call behind the [`CompletionClient`]
//! trait: an ordered message list goes in, one assistant message comes out.
//! No retry policy lives at this layer; a failed call surfaces as a
//! completion error and the caller decides what to do with it.

/// Core completion trait.
pub mod client;
/// OpenAI chat-completion implementation.
pub mod openai;

pub use client::CompletionClient;
pub use openai::OpenAiClient;
