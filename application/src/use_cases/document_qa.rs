//! Document QA workflow.
//!
//! Drives the fetch → ask sequence against an explicit
//! [`DocumentSession`] owned by the front end:
//!
//! - [`DocumentQaWorkflow::fetch`] commits into the session only when
//!   extraction succeeds, so a failed fetch keeps the previous document.
//! - [`DocumentQaWorkflow::ask`] fails with [`QaError::MissingDocument`]
//!   before touching the completion service when no document is loaded.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{ProgressNotifier, Stage};
use crate::use_cases::answer_question::{AnswerQuestionInput, AnswerQuestionUseCase};
use crate::use_cases::extract_document::ExtractDocumentUseCase;
use docqa_domain::{Answer, ApiKey, DocumentSession, DocumentUrl, LoadedDocument, QaError, Question};
use std::sync::Arc;
use tracing::warn;

/// Front-end entry point combining the Fetcher/Cleaner and the Answerer.
#[derive(Clone)]
pub struct DocumentQaWorkflow {
    extract: ExtractDocumentUseCase,
    answer: AnswerQuestionUseCase,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl DocumentQaWorkflow {
    pub fn new(extract: ExtractDocumentUseCase, answer: AnswerQuestionUseCase) -> Self {
        Self {
            extract,
            answer,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn answer_use_case(&self) -> &AnswerQuestionUseCase {
        &self.answer
    }

    /// Fetch `url` and store the result in `session` on success.
    pub async fn fetch<'s>(
        &self,
        session: &'s mut DocumentSession,
        url: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<&'s LoadedDocument, QaError> {
        let url = match DocumentUrl::parse(url) {
            Ok(url) => url,
            Err(e) => {
                self.log_failure("fetch_failed", serde_json::json!({ "url": url.trim() }), &e);
                return Err(e);
            }
        };

        progress.on_stage_start(Stage::Fetch, url.as_str());
        let result = self.extract.execute(url.clone()).await;
        progress.on_stage_complete(Stage::Fetch, result.is_ok());

        match result {
            Ok(document) => {
                self.conversation_logger.log(ConversationEvent::new(
                    "document_fetched",
                    serde_json::json!({
                        "url": document.url.as_str(),
                        "chars": document.text.char_count(),
                    }),
                ));
                Ok(session.commit(document))
            }
            Err(e) => {
                warn!("Fetch of {} failed; keeping previous document", url);
                self.log_failure("fetch_failed", serde_json::json!({ "url": url.as_str() }), &e);
                Err(e)
            }
        }
    }

    /// Answer `question` from the document held in `session`.
    pub async fn ask(
        &self,
        session: &DocumentSession,
        question: &Question,
        credential: ApiKey,
        progress: &dyn ProgressNotifier,
    ) -> Result<Answer, QaError> {
        let document = match session.require_text() {
            Ok(text) => text,
            Err(e) => {
                self.log_failure(
                    "answer_failed",
                    serde_json::json!({ "question": question.content() }),
                    &e,
                );
                return Err(e);
            }
        };

        let model = self.answer.config().model.clone();
        progress.on_stage_start(Stage::Answer, model.as_str());
        let result = self
            .answer
            .execute(AnswerQuestionInput::new(question, document, credential))
            .await;
        progress.on_stage_complete(Stage::Answer, result.is_ok());

        let url = session.current().map(|d| d.url.as_str().to_string());
        match &result {
            Ok(answer) => self.conversation_logger.log(ConversationEvent::new(
                "question_answered",
                serde_json::json!({
                    "model": model.to_string(),
                    "url": url,
                    "question": question.content(),
                    "answer": answer.text(),
                }),
            )),
            Err(e) => self.log_failure(
                "answer_failed",
                serde_json::json!({ "url": url, "question": question.content() }),
                e,
            ),
        }

        result
    }

    fn log_failure(&self, event_type: &'static str, mut payload: serde_json::Value, error: &QaError) {
        if let serde_json::Value::Object(map) = &mut payload {
            map.insert("kind".to_string(), error.kind().into());
            map.insert("message".to_string(), error.to_string().into());
        }
        self.conversation_logger
            .log(ConversationEvent::new(event_type, payload));
    }
}
