//! Remote memory API abstraction
//!
//! The gateway never talks to the memory service directly from its handlers
//! or the orchestrator; everything goes through this trait so that tests can
//! inject recording fakes and failure modes.

use crate::types::{
    CreateUserRequest, MemoryRetrieval, Message, MessagePage, MessageQuery, Result, Role, Session,
    User,
};
use async_trait::async_trait;

/// Outcome of a session lookup.
///
/// Lookup failures of any kind (missing row, non-success status, transport
/// error) resolve to `NotFound` so the caller can fall back to creating a
/// fresh session. The two states are explicit rather than an `Option` so a
/// stricter absent-versus-unreachable distinction can be introduced later
/// without touching every call site.
#[derive(Debug, Clone)]
pub enum SessionLookup {
    /// The session exists and was decoded successfully.
    Found(Session),
    /// No usable session; the caller should create one.
    NotFound,
}

impl SessionLookup {
    /// Returns the session when found.
    pub fn into_session(self) -> Option<Session> {
        match self {
            SessionLookup::Found(session) => Some(session),
            SessionLookup::NotFound => None,
        }
    }
}

/// Typed surface of the hosted memory/session/message API.
#[async_trait]
pub trait MemoryApi: Send + Sync {
    /// Look up a session by id. Never fails; see [`SessionLookup`].
    async fn get_session(&self, session_id: &str) -> SessionLookup;

    /// Create a session for an end user, optionally attaching metadata records.
    async fn create_session(
        &self,
        customer_user_id: &str,
        metadata: Option<&[serde_json::Value]>,
    ) -> Result<Session>;

    /// Persist one conversation turn under a session.
    async fn create_message(
        &self,
        session_id: &str,
        content: &str,
        role: Role,
        customer_user_id: Option<&str>,
    ) -> Result<Message>;

    /// Run a retrieval query against a memory collection. When `memory_id` is
    /// absent the credential's default memory applies. Read-only.
    async fn retrieve_memory(
        &self,
        memory_id: Option<&str>,
        query: &str,
        assisted: bool,
    ) -> Result<MemoryRetrieval>;

    /// List messages matching `query`, sorted by ascending update timestamp.
    ///
    /// Implementations must apply the sort themselves regardless of the order
    /// the remote service returns; conversation ordering feeds directly into
    /// prompt construction.
    async fn list_messages(&self, query: &MessageQuery) -> Result<MessagePage>;

    /// Register a new end user with the remote service.
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User>;
}
