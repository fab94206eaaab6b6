//! UI-agnostic conversation state types
//!
//! This module contains the data the presentation layer reads but never
//! mutates directly; all writes go through the controller.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCategory;

/// A chat message in the AI conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// The role of a chat message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// The full conversation: the ordered message log plus the in-flight flag
/// and the most recent classified failure.
///
/// Messages are append-only; `last_error` covers only the latest turn and is
/// cleared when a new turn starts.
#[derive(Debug, Default)]
pub struct ConversationState {
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    pub last_error: Option<ErrorCategory>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }
}
