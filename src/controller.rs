//! The conversation controller: one request/response cycle per user turn.
//!
//! Owns the message log and the credential gate. The presentation layer
//! drives it through `submit_token` / `submit_turn` / `reset` and reads the
//! exposed state; it never mutates anything directly.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::ai::{ChatRequest, CompletionService};
use crate::config::GenerationConfig;
use crate::credential::{Credential, ValidationError};
use crate::error::ErrorCategory;
use crate::state::{ChatMessage, ConversationState};

pub struct ChatController {
    service: Arc<dyn CompletionService>,
    config: GenerationConfig,
    credential: Credential,
    state: ConversationState,
}

impl ChatController {
    pub fn new(service: Arc<dyn CompletionService>, config: GenerationConfig) -> Self {
        Self {
            service,
            config,
            credential: Credential::new(),
            state: ConversationState::new(),
        }
    }

    /// Run the credential gate. A accepted token also clears any stale
    /// error from a previous session phase.
    pub fn submit_token(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.credential.submit(raw)?;
        self.state.last_error = None;
        Ok(())
    }

    /// Full session reset: gate closed, token dropped, conversation
    /// discarded. Changing the key always starts a fresh conversation.
    pub fn reset(&mut self) {
        self.credential.reset();
        self.state = ConversationState::new();
    }

    /// Submit one user turn and wait for the reply.
    ///
    /// Silently ignores blank input, a turn submitted while one is already
    /// in flight, and calls made before the gate has validated a token.
    /// These are intentional no-ops, not errors.
    pub async fn submit_turn(&mut self, user_text: &str) {
        let user_text = user_text.trim();
        if user_text.is_empty() || self.state.pending || !self.credential.validated() {
            return;
        }

        self.state.last_error = None;
        self.state.messages.push(ChatMessage::user(user_text));
        self.state.pending = true;

        let request = ChatRequest {
            messages: self.state.messages.clone(),
            system: self.config.system_prompt.clone(),
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
        };

        debug!(model = %request.model, turns = request.messages.len(), "submitting turn");
        let result = self.service.complete(self.credential.token(), request).await;

        match result {
            Ok(reply) => {
                self.state.messages.push(ChatMessage::assistant(reply));
            }
            Err(err) => {
                let category = ErrorCategory::classify(&err);
                warn!(%err, ?category, "turn failed");
                // The failure is shown in-line as the assistant's reply so it
                // stays visible in the conversation, and becomes part of the
                // context sent on the next turn.
                self.state
                    .messages
                    .push(ChatMessage::assistant(category.user_message()));
                self.state.last_error = Some(category);
                if category == ErrorCategory::Authentication {
                    self.credential.invalidate();
                }
            }
        }

        self.state.pending = false;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.state.messages
    }

    pub fn pending(&self) -> bool {
        self.state.pending
    }

    pub fn last_error(&self) -> Option<ErrorCategory> {
        self.state.last_error
    }

    pub fn credential_validated(&self) -> bool {
        self.credential.validated()
    }
}
