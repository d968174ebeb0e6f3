//! Chat-completion session: one authenticated request per question

use super::types::{ChatMessage, ChatRequest, ChatResponse, ErrorEnvelope};
use crate::web::error_chain;
use async_trait::async_trait;
use docqa_application::ports::llm_gateway::{GatewayError, LlmSession, SessionConfig};
use docqa_domain::util::truncate_chars;
use docqa_domain::{ApiKey, Model};
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;

/// Characters of an unparsable error body kept in the message
const MAX_ERROR_BODY: usize = 300;

pub struct OpenAiSession {
    http: reqwest::Client,
    endpoint: String,
    config: SessionConfig,
    credential: ApiKey,
}

impl OpenAiSession {
    pub(crate) fn new(
        http: reqwest::Client,
        endpoint: String,
        config: SessionConfig,
        credential: ApiKey,
    ) -> Self {
        Self {
            http,
            endpoint,
            config,
            credential,
        }
    }

    fn headers(&self) -> Result<HeaderMap, GatewayError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.credential.expose_secret()))
            .map_err(|_| {
                GatewayError::RequestFailed(
                    "API key contains characters that cannot be sent in an HTTP header".to_string(),
                )
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    fn status_error(&self, status: StatusCode, body: &str) -> GatewayError {
        let detail = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => envelope.error.message,
            Err(_) if body.trim().is_empty() => {
                status.canonical_reason().unwrap_or("no details").to_string()
            }
            Err(_) => truncate_chars(body.trim(), MAX_ERROR_BODY).to_string(),
        };
        let message = self
            .credential
            .redact(&format!("{} {}", status.as_u16(), detail));

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized(message),
            StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(message),
            _ => GatewayError::RequestFailed(message),
        }
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.config.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: self.config.model.as_str(),
            messages: vec![
                ChatMessage::system(&self.config.system_prompt),
                ChatMessage::user(content),
            ],
            max_tokens: self.config.max_tokens,
        };

        debug!(model = %self.config.model, "Chat completion request");

        let response = self
            .http
            .post(&self.endpoint)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(self.credential.redact(&error_chain(&e))))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(self.credential.redact(&error_chain(&e))))?;

        if !status.is_success() {
            return Err(self.status_error(status, &body));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(format!("malformed completion: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::InvalidResponse("No completion in response".to_string()))
    }
}
