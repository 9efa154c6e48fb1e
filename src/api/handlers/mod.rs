//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Conversation turn handler.
pub mod chat;
/// Health check handler.
pub mod health;
/// Single-shot memory query handler.
pub mod memory;
/// Message listing handler.
pub mod messages;
/// End-user registration handler.
pub mod users;
