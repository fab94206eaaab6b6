//! Credential gate for the completion service.
//!
//! Holds the opaque API token for the lifetime of the session and decides
//! whether the conversation may proceed. The check here is syntactic only;
//! the remote service is the final authority (a 401 later invalidates the
//! gate again).

use thiserror::Error;
use tracing::debug;

/// Expected prefix for Anthropic-style API keys.
const TOKEN_PREFIX: &str = "sk-";

/// Errors from the local token pre-check. No network call is involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("API key is empty")]
    Empty,
    #[error("API key must start with \"sk-\"")]
    BadPrefix,
}

/// An opaque bearer token plus whether it has passed the surface check.
///
/// The raw token never leaves this struct except to authorize an outbound
/// call, and it is never written to disk.
#[derive(Debug, Default)]
pub struct Credential {
    token: String,
    validated: bool,
}

impl Credential {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a raw token from the user. On success the token is stored and
    /// the gate opens; on failure the gate stays closed and the previous
    /// token (if any) is untouched.
    pub fn submit(&mut self, raw: &str) -> Result<(), ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if !trimmed.starts_with(TOKEN_PREFIX) {
            return Err(ValidationError::BadPrefix);
        }
        self.token = trimmed.to_string();
        self.validated = true;
        debug!("credential accepted");
        Ok(())
    }

    /// Drop the stored token and close the gate. Used when the user asks to
    /// change the credential.
    pub fn reset(&mut self) {
        self.token.clear();
        self.validated = false;
    }

    /// Close the gate but keep the token in memory, so the user is sent back
    /// to credential entry. Used when the remote service rejects the token.
    pub fn invalidate(&mut self) {
        self.validated = false;
    }

    pub fn validated(&self) -> bool {
        self.validated
    }

    /// The stored token, for authorizing an outbound call.
    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefixed_token() {
        let mut cred = Credential::new();
        assert!(cred.submit("sk-abc123").is_ok());
        assert!(cred.validated());
        assert_eq!(cred.token(), "sk-abc123");
    }

    #[test]
    fn trims_before_checking() {
        let mut cred = Credential::new();
        assert!(cred.submit("  sk-abc123\n").is_ok());
        assert_eq!(cred.token(), "sk-abc123");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        let mut cred = Credential::new();
        assert_eq!(cred.submit(""), Err(ValidationError::Empty));
        assert_eq!(cred.submit("   "), Err(ValidationError::Empty));
        assert!(!cred.validated());
    }

    #[test]
    fn rejects_wrong_prefix() {
        let mut cred = Credential::new();
        assert_eq!(cred.submit("invalid-format"), Err(ValidationError::BadPrefix));
        assert!(!cred.validated());
    }

    #[test]
    fn reset_clears_token_and_flag() {
        let mut cred = Credential::new();
        cred.submit("sk-abc123").unwrap();
        cred.reset();
        assert!(!cred.validated());
        assert_eq!(cred.token(), "");
    }

    #[test]
    fn invalidate_keeps_token() {
        let mut cred = Credential::new();
        cred.submit("sk-abc123").unwrap();
        cred.invalidate();
        assert!(!cred.validated());
        assert_eq!(cred.token(), "sk-abc123");
    }
}
