//! OpenAI-compatible LLM gateway

use super::session::OpenAiSession;
use async_trait::async_trait;
use docqa_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession, SessionConfig};
use docqa_domain::ApiKey;
use tracing::info;

/// Default API root; `/v1/chat/completions` is appended.
pub const OPENAI_API_URL: &str = "https://api.openai.com";

/// Gateway to any service speaking the OpenAI chat-completions protocol.
///
/// Holds no credential of its own: each session receives the key for its
/// single request and drops it afterwards.
#[derive(Debug, Clone)]
pub struct OpenAiLlmGateway {
    http: reqwest::Client,
    base_url: String,
}

impl Default for OpenAiLlmGateway {
    fn default() -> Self {
        Self::new(OPENAI_API_URL)
    }
}

impl OpenAiLlmGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Completion endpoint: {}/v1/chat/completions", base_url);
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmGateway for OpenAiLlmGateway {
    async fn create_session(
        &self,
        config: &SessionConfig,
        credential: ApiKey,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenAiSession::new(
            self.http.clone(),
            self.endpoint(),
            config.clone(),
            credential,
        )))
    }
}
