//! Infrastructure layer for docqa
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;
pub mod web;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileCompletionConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig,
};
pub use logging::JsonlConversationLogger;
pub use openai::{OPENAI_API_URL, OpenAiLlmGateway, OpenAiSession};
pub use web::{HtmlTextExtractor, HttpDocumentSource, html_to_text};
