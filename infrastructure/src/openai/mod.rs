//! OpenAI-compatible completion service adapter
//!
//! Implements the [`LlmGateway`](docqa_application::LlmGateway) port over
//! `POST {base_url}/v1/chat/completions`. Status 401/403 become
//! `GatewayError::Unauthorized`, 429 becomes `GatewayError::RateLimited`,
//! and every message is scrubbed of the API key before it leaves the session.

mod gateway;
mod session;
mod types;

pub use gateway::{OPENAI_API_URL, OpenAiLlmGateway};
pub use session::OpenAiSession;
