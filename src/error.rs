//! Failure signals from the completion service and their user-facing
//! classification.

use thiserror::Error;

/// What actually went wrong with a completion call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// The service answered with a non-success HTTP status.
    #[error("completion service returned status {0}")]
    Status(u16),
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(String),
    /// The response parsed but carried no usable text segment.
    #[error("response contained no text content")]
    EmptyResponse,
}

/// User-facing category for a failed turn. First matching row wins;
/// anything unrecognized is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimited,
    ServiceError,
    Connectivity,
    MalformedResponse,
    Unknown,
}

impl ErrorCategory {
    /// Classify a completion failure. Pure: no I/O, total over all inputs.
    pub fn classify(err: &CompletionError) -> Self {
        match err {
            CompletionError::Status(401) => ErrorCategory::Authentication,
            CompletionError::Status(429) => ErrorCategory::RateLimited,
            CompletionError::Status(code) if (500..600).contains(code) => {
                ErrorCategory::ServiceError
            }
            CompletionError::Status(_) => ErrorCategory::Unknown,
            CompletionError::Transport(_) => ErrorCategory::Connectivity,
            CompletionError::EmptyResponse => ErrorCategory::MalformedResponse,
        }
    }

    /// The text shown in the chat log in place of the assistant's reply.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorCategory::Authentication => {
                "Your API key was rejected. Please re-enter your credentials."
            }
            ErrorCategory::RateLimited => {
                "Rate limit exceeded. Please wait a moment and try again."
            }
            ErrorCategory::ServiceError => {
                "The AI service reported an error. Please try again later."
            }
            ErrorCategory::Connectivity => {
                "Unable to reach the AI service. Check your network connection and API key."
            }
            ErrorCategory::MalformedResponse | ErrorCategory::Unknown => {
                "Something unexpected went wrong. Please try again."
            }
        }
    }
}
