//! Answer Question use case.
//!
//! Answerer: truncates the document to [`DOCUMENT_CHAR_LIMIT`] characters,
//! renders the configured [`PromptTemplate`](docqa_domain::PromptTemplate)
//! and sends a two-message exchange (system + user) to the completion
//! service. The reply is returned verbatim.
//!
//! The caller guarantees a document is present; the signature takes a
//! non-optional [`DocumentText`]. No retries.

use crate::config::AnswerConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway, SessionConfig};
use docqa_domain::{Answer, ApiKey, DOCUMENT_CHAR_LIMIT, DocumentText, QaError, Question};
use std::sync::Arc;
use tracing::{debug, info};

impl From<GatewayError> for QaError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Unauthorized(message) => QaError::Auth(message),
            other => QaError::Service(other.to_string()),
        }
    }
}

/// Input for the [`AnswerQuestionUseCase`].
pub struct AnswerQuestionInput<'a> {
    pub question: &'a Question,
    pub document: &'a DocumentText,
    /// Moved into the completion session and dropped with it.
    pub credential: ApiKey,
}

impl<'a> AnswerQuestionInput<'a> {
    pub fn new(question: &'a Question, document: &'a DocumentText, credential: ApiKey) -> Self {
        Self {
            question,
            document,
            credential,
        }
    }
}

/// Use case for answering one question about one document.
#[derive(Clone)]
pub struct AnswerQuestionUseCase {
    gateway: Arc<dyn LlmGateway>,
    config: AnswerConfig,
}

impl AnswerQuestionUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            config: AnswerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AnswerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnswerConfig {
        &self.config
    }

    /// Render the user prompt exactly as it will be sent.
    pub fn build_prompt(&self, question: &Question, document: &DocumentText) -> String {
        let excerpt = document.prompt_excerpt(DOCUMENT_CHAR_LIMIT);
        self.config.prompt.render(excerpt, question.content())
    }

    pub async fn execute(&self, input: AnswerQuestionInput<'_>) -> Result<Answer, QaError> {
        info!("Answering question with {}", self.config.model);

        let prompt = self.build_prompt(input.question, input.document);
        debug!(
            "Prompt: {} chars (document: {} chars, cap {})",
            prompt.chars().count(),
            input.document.char_count(),
            DOCUMENT_CHAR_LIMIT
        );

        let session_config = SessionConfig {
            model: self.config.model.clone(),
            system_prompt: self.config.prompt.system_prompt().to_string(),
            max_tokens: self.config.max_tokens,
        };

        let session = self
            .gateway
            .create_session(&session_config, input.credential)
            .await?;
        let text = session.send(&prompt).await?;

        info!("Answer received ({} chars)", text.chars().count());
        Ok(Answer::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::LlmSession;
    use async_trait::async_trait;
    use docqa_domain::{FALLBACK_ANSWER, Model};
    use std::sync::Mutex;

    // ==================== Mock Gateway ====================

    #[derive(Default)]
    struct Captured {
        prompts: Vec<String>,
        configs: Vec<SessionConfig>,
        keys: Vec<String>,
    }

    enum Behavior {
        Reply(&'static str),
        Echo,
        Reject,
        RateLimit,
    }

    struct MockGateway {
        behavior: Behavior,
        captured: Arc<Mutex<Captured>>,
    }

    impl MockGateway {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior,
                captured: Arc::new(Mutex::new(Captured::default())),
            }
        }
    }

    struct MockSession {
        model: Model,
        reply: Result<Option<&'static str>, GatewayError>,
        captured: Arc<Mutex<Captured>>,
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn create_session(
            &self,
            config: &SessionConfig,
            credential: ApiKey,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            {
                let mut captured = self.captured.lock().unwrap();
                captured.configs.push(config.clone());
                captured.keys.push(credential.expose_secret().to_string());
            }
            let reply = match self.behavior {
                Behavior::Reply(text) => Ok(Some(text)),
                Behavior::Echo => Ok(None),
                Behavior::Reject => Err(GatewayError::Unauthorized(
                    "Incorrect API key provided".to_string(),
                )),
                Behavior::RateLimit => Err(GatewayError::RateLimited(
                    "Rate limit reached for requests".to_string(),
                )),
            };
            Ok(Box::new(MockSession {
                model: config.model.clone(),
                reply,
                captured: self.captured.clone(),
            }))
        }
    }

    #[async_trait]
    impl LlmSession for MockSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.captured.lock().unwrap().prompts.push(content.to_string());
            match &self.reply {
                Ok(Some(text)) => Ok(text.to_string()),
                Ok(None) => Ok(content.to_string()),
                Err(GatewayError::Unauthorized(m)) => Err(GatewayError::Unauthorized(m.clone())),
                Err(GatewayError::RateLimited(m)) => Err(GatewayError::RateLimited(m.clone())),
                Err(_) => Err(GatewayError::RequestFailed("mock".to_string())),
            }
        }
    }

    fn key() -> ApiKey {
        ApiKey::try_new("sk-test-key").unwrap()
    }

    fn question(text: &str) -> Question {
        Question::try_new(text).unwrap()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_returns_reply_verbatim() {
        let gateway = Arc::new(MockGateway::new(Behavior::Reply("  Blue.\n")));
        let use_case = AnswerQuestionUseCase::new(gateway);
        let q = question("What color is the sky?");
        let doc = DocumentText::new("The sky is blue.");

        let answer = use_case
            .execute(AnswerQuestionInput::new(&q, &doc, key()))
            .await
            .unwrap();

        assert_eq!(answer.text(), "  Blue.\n");
    }

    #[tokio::test]
    async fn test_long_document_truncated_to_first_4000_chars() {
        let gateway = Arc::new(MockGateway::new(Behavior::Reply("ok")));
        let captured = gateway.captured.clone();
        let use_case = AnswerQuestionUseCase::new(gateway);

        let head = "a".repeat(DOCUMENT_CHAR_LIMIT);
        let doc = DocumentText::new(format!("{}{}", head, "TAIL".repeat(500)));
        let q = question("What is at the end?");

        use_case
            .execute(AnswerQuestionInput::new(&q, &doc, key()))
            .await
            .unwrap();

        let captured = captured.lock().unwrap();
        assert_eq!(captured.prompts.len(), 1);
        let prompt = &captured.prompts[0];
        assert!(prompt.contains(&head));
        assert!(!prompt.contains("TAIL"));
        assert!(!prompt.contains(&"a".repeat(DOCUMENT_CHAR_LIMIT + 1)));
    }

    #[tokio::test]
    async fn test_truncation_counts_characters_not_bytes() {
        let gateway = Arc::new(MockGateway::new(Behavior::Echo));
        let use_case = AnswerQuestionUseCase::new(gateway);
        let doc = DocumentText::new("é".repeat(DOCUMENT_CHAR_LIMIT + 10));
        let q = question("q?");

        let prompt = use_case.build_prompt(&q, &doc);
        assert!(prompt.contains(&"é".repeat(DOCUMENT_CHAR_LIMIT)));
        assert!(!prompt.contains(&"é".repeat(DOCUMENT_CHAR_LIMIT + 1)));
    }

    #[tokio::test]
    async fn test_prompt_instructs_fallback_sentence() {
        // Echo model returns the prompt it was given
        let gateway = Arc::new(MockGateway::new(Behavior::Echo));
        let use_case = AnswerQuestionUseCase::new(gateway);
        let q = question("Who won the 1998 World Cup?");
        let doc = DocumentText::new("This page is about baking bread.");

        let answer = use_case
            .execute(AnswerQuestionInput::new(&q, &doc, key()))
            .await
            .unwrap();

        assert!(answer.text().contains(FALLBACK_ANSWER));
        assert!(answer.text().contains("based only on the information provided"));
        assert!(answer.text().contains("Who won the 1998 World Cup?"));
    }

    #[tokio::test]
    async fn test_session_config_carries_model_system_and_token_cap() {
        let gateway = Arc::new(MockGateway::new(Behavior::Reply("ok")));
        let captured = gateway.captured.clone();
        let use_case = AnswerQuestionUseCase::new(gateway);
        let q = question("q?");
        let doc = DocumentText::new("d");

        use_case
            .execute(AnswerQuestionInput::new(&q, &doc, key()))
            .await
            .unwrap();

        let captured = captured.lock().unwrap();
        let config = &captured.configs[0];
        assert_eq!(config.model.as_str(), "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 500);
        assert!(config.system_prompt.contains("answers questions based on document content"));
        assert_eq!(captured.keys, vec!["sk-test-key".to_string()]);
    }

    #[tokio::test]
    async fn test_custom_config_is_used() {
        let gateway = Arc::new(MockGateway::new(Behavior::Reply("ok")));
        let captured = gateway.captured.clone();
        let use_case = AnswerQuestionUseCase::new(gateway).with_config(
            AnswerConfig::default()
                .with_model(Model::Gpt4oMini)
                .with_max_tokens(64),
        );
        let q = question("q?");
        let doc = DocumentText::new("d");

        use_case
            .execute(AnswerQuestionInput::new(&q, &doc, key()))
            .await
            .unwrap();

        let captured = captured.lock().unwrap();
        let config = &captured.configs[0];
        assert_eq!(config.model, Model::Gpt4oMini);
        assert_eq!(config.max_tokens, 64);
    }

    #[tokio::test]
    async fn test_rejected_key_is_auth_error() {
        let gateway = Arc::new(MockGateway::new(Behavior::Reject));
        let use_case = AnswerQuestionUseCase::new(gateway);
        let q = question("q?");
        let doc = DocumentText::new("d");

        let result = use_case
            .execute(AnswerQuestionInput::new(&q, &doc, key()))
            .await;

        match result {
            Err(QaError::Auth(message)) => {
                assert!(message.contains("Incorrect API key"));
                assert!(!message.contains("sk-test-key"));
            }
            other => panic!("Expected Auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_other_failures_are_service_errors() {
        let gateway = Arc::new(MockGateway::new(Behavior::RateLimit));
        let use_case = AnswerQuestionUseCase::new(gateway);
        let q = question("q?");
        let doc = DocumentText::new("d");

        let result = use_case
            .execute(AnswerQuestionInput::new(&q, &doc, key()))
            .await;

        match result {
            Err(QaError::Service(message)) => assert!(message.contains("Rate limit")),
            other => panic!("Expected Service error, got {:?}", other),
        }
    }
}
