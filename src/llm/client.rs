use crate::types::{PromptMessage, Result};
use async_trait::async_trait;

/// Chat-completion client trait.
///
/// Implementations take the assembled prompt (system context plus ordered
/// history) and return the assistant's reply text. Transport and quota
/// failures map to [`AppError::Completion`](crate::types::AppError); the
/// input must contain at least one message.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate one assistant reply from an ordered message list.
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}
