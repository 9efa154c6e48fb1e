//! HTTP API Handlers and Routes
//!
//! This module provides the REST layer for the gateway, built on the Axum web
//! framework. Each handler is a thin transport adapter: it validates the
//! request shape, calls into the orchestrator or the typed remote client, and
//! maps the outcome back to JSON.
//!
//! # API Endpoints
//!
//! ## Chat (`/api/chat`)
//! - `POST /api/chat` - Run one memory-augmented conversation turn
//!
//! ## Users (`/api/users`)
//! - `POST /api/users` - Register an end user with the remote service
//!
//! ## Messages (`/api/messages`)
//! - `GET /api/messages` - List stored messages with pagination
//!
//! ## Memory (`/api/memory`)
//! - `POST /api/memory/query` - Single-shot memory retrieval
//!
//! ## Health (`/api/health`)
//! - `GET /api/health` - Liveness probe
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use utoipa::OpenApi;

/// OpenAPI document covering every exposed endpoint.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::chat::chat,
        handlers::users::create_user,
        handlers::messages::list_messages,
        handlers::memory::query_memory,
        handlers::health::health,
    ),
    components(schemas(
        crate::types::ChatRequest,
        crate::types::ChatResponse,
        crate::types::CreateUserRequest,
        crate::types::User,
        crate::types::Message,
        crate::types::Role,
        crate::types::MessageListResponse,
        crate::types::Pagination,
        crate::types::MemoryQueryRequest,
        crate::types::MemoryQueryResponse,
        crate::types::MemoryFact,
    )),
    tags(
        (name = "chat", description = "Memory-augmented conversation turns"),
        (name = "users", description = "End-user registration"),
        (name = "messages", description = "Stored message listing"),
        (name = "memory", description = "Direct memory retrieval"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
