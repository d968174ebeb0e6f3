//! LLM Gateway port
//!
//! Defines the interface for communicating with the chat-completion service.

use async_trait::async_trait;
use docqa_domain::{ApiKey, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Settings for one completion session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub model: Model,
    pub system_prompt: String,
    pub max_tokens: u32,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the completion
/// service. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a session bound to `credential`.
    ///
    /// The session owns the key and is dropped after its single exchange,
    /// so the key never outlives the outbound call.
    async fn create_session(
        &self,
        config: &SessionConfig,
        credential: ApiKey,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send the user message (after the system prompt) and return the reply text
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}
