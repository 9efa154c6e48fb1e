//! Reqwest-backed implementation of [`MemoryApi`].
//!
//! Wire details live here and nowhere else: the `{status, data}` response
//! envelope, the camelCase field spellings, and the `X-API-Key` credential
//! header. The memory retrieval endpoint is the one exception to the
//! envelope - it returns its body directly.

use crate::remote::traits::{MemoryApi, SessionLookup};
use crate::types::{
    AppError, CreateUserRequest, MemoryRetrieval, Message, MessagePage, MessageQuery, Result,
    Role, Session, User,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Header carrying the static API credential on every request.
const API_KEY_HEADER: &str = "X-API-Key";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Production client for the hosted memory API.
pub struct HttpMemoryApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Standard `{status, data}` wrapper around remote responses.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[allow(dead_code)]
    status: Option<String>,
    data: T,
}

/// Error body shapes the remote service is known to produce.
#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    message: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateSessionBody<'a> {
    #[serde(rename = "customerUserID")]
    customer_user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a [serde_json::Value]>,
}

#[derive(Debug, Serialize)]
struct CreateMessageBody<'a> {
    #[serde(rename = "sessionID")]
    session_id: &'a str,
    role: Role,
    content: &'a str,
    #[serde(rename = "customerUserID", skip_serializing_if = "Option::is_none")]
    customer_user_id: Option<&'a str>,
}

impl HttpMemoryApi {
    /// Create a client against `base_url`, attaching `api_key` to every call.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ensure a 2xx status, mapping remote error bodies onto [`AppError::RemoteApi`].
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<RemoteErrorBody>(&body)
            .ok()
            .and_then(|e| e.message.or(e.error));

        Err(AppError::RemoteApi(match detail {
            Some(msg) => format!("{}: {}", status, msg),
            None => format!("request failed with status {}", status),
        }))
    }

    /// Unwrap the `{status, data}` envelope from a checked response.
    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| AppError::RemoteApi(format!("malformed response: {}", e)))?;
        Ok(envelope.data)
    }

    fn send_error(e: reqwest::Error) -> AppError {
        AppError::RemoteApi(format!("request failed: {}", e))
    }
}

#[async_trait]
impl MemoryApi for HttpMemoryApi {
    async fn get_session(&self, session_id: &str) -> SessionLookup {
        let request = self
            .client
            .get(self.url(&format!("/sessions/get/{}", session_id)))
            .header(API_KEY_HEADER, &self.api_key);

        let result: Result<Session> = match request.send().await {
            Ok(response) => Self::decode(response).await,
            Err(e) => Err(Self::send_error(e)),
        };

        match result {
            Ok(session) => SessionLookup::Found(session),
            Err(e) => {
                // Treated as absence so the caller can fall back to creation.
                debug!(session_id, error = %e, "session lookup failed");
                SessionLookup::NotFound
            }
        }
    }

    async fn create_session(
        &self,
        customer_user_id: &str,
        metadata: Option<&[serde_json::Value]>,
    ) -> Result<Session> {
        let response = self
            .client
            .post(self.url("/sessions/create"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&CreateSessionBody {
                customer_user_id,
                metadata,
            })
            .send()
            .await
            .map_err(Self::send_error)?;

        Self::decode(response).await
    }

    async fn create_message(
        &self,
        session_id: &str,
        content: &str,
        role: Role,
        customer_user_id: Option<&str>,
    ) -> Result<Message> {
        let response = self
            .client
            .post(self.url("/messages/create"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&CreateMessageBody {
                session_id,
                role,
                content,
                customer_user_id,
            })
            .send()
            .await
            .map_err(Self::send_error)?;

        Self::decode(response).await
    }

    async fn retrieve_memory(
        &self,
        memory_id: Option<&str>,
        query: &str,
        assisted: bool,
    ) -> Result<MemoryRetrieval> {
        let mut params: Vec<(&str, String)> = vec![
            ("query", query.to_string()),
            ("assisted", assisted.to_string()),
            ("facts", "true".to_string()),
        ];
        if let Some(memory_id) = memory_id {
            params.push(("memoryID", memory_id.to_string()));
        }

        let response = self
            .client
            .get(self.url("/memory/"))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(Self::send_error)?;

        // No envelope on this endpoint.
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| AppError::RemoteApi(format!("malformed response: {}", e)))
    }

    async fn list_messages(&self, query: &MessageQuery) -> Result<MessagePage> {
        let mut params: Vec<(&str, String)> = vec![("limit", query.limit.to_string())];
        if let Some(session_id) = &query.session_id {
            params.push(("sessionID", session_id.clone()));
        }
        if let Some(customer_user_id) = &query.customer_user_id {
            params.push(("customerUserID", customer_user_id.clone()));
        }
        if let Some(role) = query.role {
            params.push(("role", role.to_string()));
        }
        if let Some(next_token) = &query.next_token {
            params.push(("nextToken", next_token.clone()));
        }
        if let Some(previous_token) = &query.previous_token {
            params.push(("previousToken", previous_token.clone()));
        }

        let response = self
            .client
            .get(self.url("/messages/list"))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(Self::send_error)?;

        let mut page: MessagePage = Self::decode(response).await?;
        // Conversation order is reconstructed locally; the remote ordering is
        // not trusted.
        page.messages.sort_by_key(|m| m.updated_at);
        Ok(page)
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        let response = self
            .client
            .post(self.url("/users/create"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(Self::send_error)?;

        Self::decode(response).await
    }
}
