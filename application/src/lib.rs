//! Application layer for docqa
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AnswerConfig, DEFAULT_MAX_TOKENS};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    document_source::{DocumentSource, FetchedPage, SourceError},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, SessionConfig},
    progress::{NoProgress, ProgressNotifier, Stage},
    text_extractor::{ExtractError, TextExtractor},
};
pub use use_cases::answer_question::{AnswerQuestionInput, AnswerQuestionUseCase};
pub use use_cases::document_qa::DocumentQaWorkflow;
pub use use_cases::extract_document::ExtractDocumentUseCase;
