use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Default page size for message listing, matching the remote API default.
pub const DEFAULT_MESSAGE_LIMIT: u32 = 20;

// ============= API Request/Response Types =============

/// Body of `POST /api/chat` - one conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The user's message for this turn
    pub content: String,
    /// Memory collection to retrieve context from
    #[serde(rename = "memoryID")]
    pub memory_id: String,
    /// End-user on whose behalf the turn runs
    #[serde(rename = "customerUserID")]
    pub customer_user_id: String,
    /// Existing session to continue; a new one is created when absent or unknown
    #[serde(rename = "sessionID", default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Opaque records attached to a newly created session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<serde_json::Value>>,
    /// Whether the memory service should apply its own retrieval augmentation
    #[serde(default = "default_assisted")]
    pub assisted: bool,
}

fn default_assisted() -> bool {
    true
}

/// Successful result of a conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// The assistant's reply text
    pub response: String,
    /// Session the turn was recorded under
    #[serde(rename = "sessionID")]
    pub session_id: String,
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    /// Caller-assigned id; the remote service generates one when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Response of `GET /api/messages`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageListResponse {
    /// Messages in ascending update-time order
    pub messages: Vec<Message>,
    /// Cursor and count metadata for fetching further pages
    pub pagination: Pagination,
}

/// Pagination metadata echoed back from the remote listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_token: Option<String>,
    pub total_count: i64,
}

/// Body of `POST /api/memory/query` - a single-shot memory lookup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemoryQueryRequest {
    /// Free-text question to run against the memory service
    pub query: String,
    /// Memory collection to query; the credential's default applies when absent
    #[serde(rename = "memoryID", default, skip_serializing_if = "Option::is_none")]
    pub memory_id: Option<String>,
}

/// Response of `POST /api/memory/query`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemoryQueryResponse {
    pub success: bool,
    pub message: String,
    /// The memory payload, empty when the service returned none
    pub answer: String,
    pub facts: Vec<MemoryFact>,
}

// ============= Remote API Types =============

/// A conversation session owned by the remote memory service.
///
/// The gateway only reads sessions and references them by id; it never
/// mutates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    #[serde(rename = "organisationID")]
    pub organisation_id: String,
    #[serde(rename = "customerUserID")]
    pub customer_user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<serde_json::Value>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

/// One persisted conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(rename = "sessionID")]
    pub session_id: String,
    #[serde(
        rename = "customerUserID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub customer_user_id: Option<String>,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author of a message. The remote API accepts exactly these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    /// The wire representation of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            "system" => Ok(Role::System),
            other => Err(AppError::InvalidInput(format!(
                "Invalid role '{}'. Must be one of: user, assistant, system",
                other
            ))),
        }
    }
}

/// An end user registered with the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of a memory retrieval. Ephemeral - produced fresh per request and
/// never persisted by the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryRetrieval {
    /// Free-text context assembled by the memory service
    #[serde(default)]
    pub payload: Option<String>,
    /// Individual facts with service-defined relevance scores
    #[serde(default)]
    pub facts: Vec<MemoryFact>,
}

/// A single retrieved fact. The relevance ordering is defined by the remote
/// service and not interpreted locally.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemoryFact {
    pub text: String,
    pub relevance: f64,
}

/// One page of messages as returned by the remote listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePage {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_token: Option<String>,
}

/// Parameters for a message listing call.
#[derive(Debug, Clone)]
pub struct MessageQuery {
    pub session_id: Option<String>,
    pub customer_user_id: Option<String>,
    pub role: Option<Role>,
    pub limit: u32,
    pub next_token: Option<String>,
    pub previous_token: Option<String>,
}

impl Default for MessageQuery {
    fn default() -> Self {
        Self {
            session_id: None,
            customer_user_id: None,
            role: None,
            limit: DEFAULT_MESSAGE_LIMIT,
            next_token: None,
            previous_token: None,
        }
    }
}

impl MessageQuery {
    /// Query for all messages of one session, first page, default limit.
    pub fn for_session(session_id: &str) -> Self {
        Self {
            session_id: Some(session_id.to_string()),
            ..Self::default()
        }
    }
}

// ============= Prompt Types =============

/// One element of the completion prompt: a role plus its text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    /// A system-role message, used for the memory payload.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

impl From<&Message> for PromptMessage {
    fn from(msg: &Message) -> Self {
        Self {
            role: msg.role,
            content: msg.content.clone(),
        }
    }
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Memory API error: {0}")]
    RemoteApi(String),

    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::RemoteApi(msg) => (axum::http::StatusCode::BAD_GATEWAY, msg),
            AppError::Completion(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
