pub mod claude;

pub use claude::ClaudeClient;

use async_trait::async_trait;

use crate::error::CompletionError;
use crate::state::ChatMessage;

/// One outbound exchange: the full conversation so far plus the fixed
/// generation parameters.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub system: String,
    pub model: String,
    pub max_tokens: u32,
}

/// The completion service as the controller sees it: one request, one
/// reply or one failure signal. Implemented by `ClaudeClient` in production
/// and by scripted mocks in tests.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, token: &str, request: ChatRequest)
        -> Result<String, CompletionError>;
}
