//! Shared fakes for integration tests: a recording memory API and a
//! scripted completion client, plus AppState wiring for handler tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use mnema::llm::CompletionClient;
use mnema::remote::{MemoryApi, SessionLookup};
use mnema::types::{
    AppError, CreateUserRequest, MemoryFact, MemoryRetrieval, Message, MessagePage, MessageQuery,
    PromptMessage, Result, Role, Session, User,
};
use mnema::utils::config::{Config, LlmConfig, MemoryApiConfig, ServerConfig};
use mnema::AppState;
use std::sync::{Arc, Mutex};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
}

fn session(id: &str, customer_user_id: &str) -> Session {
    Session {
        id: id.to_string(),
        organisation_id: "org-1".to_string(),
        customer_user_id: customer_user_id.to_string(),
        metadata: None,
        created_at: base_time(),
        updated_at: base_time(),
        deleted_at: None,
        ended_at: None,
    }
}

/// In-memory stand-in for the remote memory API that records every call.
pub struct FakeMemoryApi {
    sessions: Mutex<Vec<Session>>,
    /// Messages persisted through `create_message`, in insertion order.
    pub messages: Mutex<Vec<Message>>,
    payload: Option<String>,
    facts: Vec<MemoryFact>,
    fail_retrieval: bool,
    fail_create_session: bool,
    /// Names of the operations invoked, in order.
    pub calls: Mutex<Vec<String>>,
    /// Every `MessageQuery` passed to `list_messages`.
    pub list_queries: Mutex<Vec<MessageQuery>>,
    counter: Mutex<i64>,
}

impl FakeMemoryApi {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
            messages: Mutex::new(Vec::new()),
            payload: Some("memory context".to_string()),
            facts: Vec::new(),
            fail_retrieval: false,
            fail_create_session: false,
            calls: Mutex::new(Vec::new()),
            list_queries: Mutex::new(Vec::new()),
            counter: Mutex::new(0),
        }
    }

    /// Register a session that `get_session` will resolve.
    pub fn with_session(self, id: &str, customer_user_id: &str) -> Self {
        self.sessions
            .lock()
            .unwrap()
            .push(session(id, customer_user_id));
        self
    }

    pub fn with_payload(mut self, payload: Option<&str>) -> Self {
        self.payload = payload.map(str::to_string);
        self
    }

    pub fn with_facts(mut self, facts: Vec<MemoryFact>) -> Self {
        self.facts = facts;
        self
    }

    pub fn failing_retrieval(mut self) -> Self {
        self.fail_retrieval = true;
        self
    }

    pub fn failing_session_creation(mut self) -> Self {
        self.fail_create_session = true;
        self
    }

    pub fn recorded_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn next_tick(&self) -> DateTime<Utc> {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        base_time() + Duration::seconds(*counter)
    }
}

#[async_trait]
impl MemoryApi for FakeMemoryApi {
    async fn get_session(&self, session_id: &str) -> SessionLookup {
        self.record("get_session");
        self.sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
            .map(SessionLookup::Found)
            .unwrap_or(SessionLookup::NotFound)
    }

    async fn create_session(
        &self,
        customer_user_id: &str,
        metadata: Option<&[serde_json::Value]>,
    ) -> Result<Session> {
        self.record("create_session");
        if self.fail_create_session {
            return Err(AppError::RemoteApi("session service unavailable".to_string()));
        }
        let mut created = session("sess-new", customer_user_id);
        created.metadata = metadata.map(|m| m.to_vec());
        self.sessions.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn create_message(
        &self,
        session_id: &str,
        content: &str,
        role: Role,
        customer_user_id: Option<&str>,
    ) -> Result<Message> {
        self.record(format!("create_message:{role}"));
        let at = self.next_tick();
        let mut messages = self.messages.lock().unwrap();
        let message = Message {
            id: format!("msg-{}", messages.len() + 1),
            session_id: session_id.to_string(),
            customer_user_id: customer_user_id.map(str::to_string),
            role,
            content: content.to_string(),
            created_at: at,
            updated_at: at,
        };
        messages.push(message.clone());
        Ok(message)
    }

    async fn retrieve_memory(
        &self,
        _memory_id: Option<&str>,
        _query: &str,
        _assisted: bool,
    ) -> Result<MemoryRetrieval> {
        self.record("retrieve_memory");
        if self.fail_retrieval {
            return Err(AppError::RemoteApi("memory service unavailable".to_string()));
        }
        Ok(MemoryRetrieval {
            payload: self.payload.clone(),
            facts: self.facts.clone(),
        })
    }

    async fn list_messages(&self, query: &MessageQuery) -> Result<MessagePage> {
        self.record("list_messages");
        self.list_queries.lock().unwrap().push(query.clone());
        let messages = self.messages.lock().unwrap().clone();
        Ok(MessagePage {
            total_count: messages.len() as i64,
            messages,
            next_token: None,
            previous_token: None,
        })
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        self.record("create_user");
        Ok(User {
            id: request.id.clone().unwrap_or_else(|| "user-1".to_string()),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            created_at: base_time(),
            updated_at: base_time(),
        })
    }
}

/// Completion client returning a scripted reply and recording every prompt.
pub struct FakeCompletionClient {
    reply: String,
    fail: bool,
    /// Every prompt passed to `complete`, in order.
    pub prompts: Mutex<Vec<Vec<PromptMessage>>>,
}

impl FakeCompletionClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_prompts(&self) -> Vec<Vec<PromptMessage>> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for FakeCompletionClient {
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String> {
        if self.fail {
            return Err(AppError::Completion("mock completion failure".to_string()));
        }
        self.prompts.lock().unwrap().push(messages.to_vec());
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

/// Config with placeholder values for handler tests; no network is touched.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        memory_api: MemoryApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: "test-key".to_string(),
        },
        llm: LlmConfig {
            openai_api_key: "test-key".to_string(),
            openai_api_base: "http://127.0.0.1:1".to_string(),
            model: "fake-model".to_string(),
        },
    }
}

pub fn test_state(
    memory: Arc<FakeMemoryApi>,
    completion: Arc<FakeCompletionClient>,
) -> AppState {
    AppState {
        config: Arc::new(test_config()),
        memory_api: memory,
        completion,
    }
}
