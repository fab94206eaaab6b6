use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ai::{ChatRequest, CompletionService};
use crate::error::CompletionError;
use crate::state::{ChatMessage, ChatRole};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

// The reference client had no timeout, so a hung call blocked the session
// forever. A generous bound keeps long completions working while still
// letting the user retry eventually.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
struct ClaudeMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<ClaudeMessage>,
}

#[derive(Deserialize)]
struct ClaudeContent {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    #[serde(default)]
    content: Vec<ClaudeContent>,
}

/// Pull the first usable text segment out of a response. `None` means the
/// payload parsed but had nothing to show, which callers must treat as a
/// malformed response rather than an empty reply.
fn first_text(response: &ClaudeResponse) -> Option<String> {
    response
        .content
        .first()
        .map(|c| c.text.clone())
        .filter(|text| !text.trim().is_empty())
}

fn wire_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Assistant => "assistant",
    }
}

/// HTTP client for the Anthropic messages API. Holds no credential; the
/// token is passed per call by the controller's gate.
#[derive(Clone)]
pub struct ClaudeClient {
    client: Client,
}

impl ClaudeClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

impl Default for ClaudeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for ClaudeClient {
    async fn complete(
        &self,
        token: &str,
        request: ChatRequest,
    ) -> Result<String, CompletionError> {
        let body = ClaudeRequest {
            model: request.model,
            max_tokens: request.max_tokens,
            system: request.system,
            messages: request
                .messages
                .iter()
                .map(|m: &ChatMessage| ClaudeMessage {
                    role: wire_role(m.role).to_string(),
                    content: m.content.clone(),
                })
                .collect(),
        };

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", token)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status.as_u16()));
        }

        let claude_response: ClaudeResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        first_text(&claude_response).ok_or(CompletionError::EmptyResponse)
    }
}
