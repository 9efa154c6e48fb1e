//! One conversation turn, end to end.
//!
//! The turn runs as a fixed sequence: resolve the session, persist the user
//! message, retrieve memory context, reconstruct the ordered history, assemble
//! the completion prompt, generate the reply, persist it, and return it with
//! the session id. Any failure aborts the remaining steps and surfaces as a
//! single error; nothing already persisted is rolled back, so a failed turn
//! can leave a user message with no matching assistant reply. That orphan is
//! an accepted limitation, observable by listing the session's messages.

use crate::llm::CompletionClient;
use crate::remote::{MemoryApi, SessionLookup};
use crate::types::{
    AppError, ChatRequest, ChatResponse, MemoryRetrieval, Message, MessageQuery, PromptMessage,
    Result, Role, Session,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Executes conversation turns against the two remote collaborators.
///
/// Stateless between invocations; all conversation state lives behind the
/// remote API. Cloning is cheap, so handlers construct one per request.
#[derive(Clone)]
pub struct Orchestrator {
    memory: Arc<dyn MemoryApi>,
    completion: Arc<dyn CompletionClient>,
}

impl Orchestrator {
    pub fn new(memory: Arc<dyn MemoryApi>, completion: Arc<dyn CompletionClient>) -> Self {
        Self { memory, completion }
    }

    /// Run one turn: validate, resolve the session, persist both turns, and
    /// return the assistant's reply together with the session id.
    pub async fn run_turn(&self, request: ChatRequest) -> Result<ChatResponse> {
        validate(&request)?;

        let session = self.resolve_session(&request).await?;

        self.memory
            .create_message(
                &session.id,
                &request.content,
                Role::User,
                Some(&request.customer_user_id),
            )
            .await?;

        let retrieval = self
            .memory
            .retrieve_memory(Some(&request.memory_id), &request.content, request.assisted)
            .await?;

        let history = self
            .memory
            .list_messages(&MessageQuery::for_session(&session.id))
            .await?;

        let prompt = build_prompt(&retrieval, &history.messages);
        let reply = self.completion.complete(&prompt).await?;

        self.memory
            .create_message(
                &session.id,
                &reply,
                Role::Assistant,
                Some(&request.customer_user_id),
            )
            .await?;

        info!(
            session_id = %session.id,
            history_len = history.messages.len(),
            "conversation turn completed"
        );

        Ok(ChatResponse {
            response: reply,
            session_id: session.id,
        })
    }

    /// Use the supplied session when it resolves; otherwise create a fresh one
    /// for the end user. This is the only fallback in the whole turn.
    async fn resolve_session(&self, request: &ChatRequest) -> Result<Session> {
        if let Some(session_id) = &request.session_id {
            if let SessionLookup::Found(session) = self.memory.get_session(session_id).await {
                return Ok(session);
            }
            debug!(%session_id, "session not resolvable, creating a new one");
        }

        self.memory
            .create_session(&request.customer_user_id, request.metadata.as_deref())
            .await
    }
}

/// Reject a turn before any remote call when a required field is empty.
fn validate(request: &ChatRequest) -> Result<()> {
    if request.content.is_empty()
        || request.memory_id.is_empty()
        || request.customer_user_id.is_empty()
    {
        return Err(AppError::InvalidInput(
            "Missing required parameters: content, memoryID, or customerUserID".to_string(),
        ));
    }
    Ok(())
}

/// Prepend the memory payload as a system message to the ordered history.
fn build_prompt(retrieval: &MemoryRetrieval, history: &[Message]) -> Vec<PromptMessage> {
    let mut prompt = Vec::with_capacity(history.len() + 1);
    prompt.push(PromptMessage::system(
        retrieval.payload.clone().unwrap_or_default(),
    ));
    prompt.extend(history.iter().map(PromptMessage::from));
    prompt
}
