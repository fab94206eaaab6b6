pub mod ai;
pub mod config;
pub mod controller;
pub mod credential;
pub mod error;
pub mod state;

// Re-export main types for convenience
pub use ai::{ChatRequest, ClaudeClient, CompletionService};
pub use config::GenerationConfig;
pub use controller::ChatController;
pub use credential::{Credential, ValidationError};
pub use error::{CompletionError, ErrorCategory};
pub use state::{ChatMessage, ChatRole, ConversationState};
