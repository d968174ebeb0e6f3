//! Domain error types

use thiserror::Error;

/// Errors surfaced to the user by the document QA flow.
///
/// Every variant is recoverable: the front end renders it inline and waits
/// for the next command. Messages never contain the API key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QaError {
    #[error("Invalid URL format: expected scheme://host (e.g. https://example.com), got '{0}'")]
    InvalidUrl(String),

    #[error("Error fetching document: {0}")]
    Fetch(String),

    #[error("Error processing document: {0}")]
    Parse(String),

    #[error("Please fetch a document first.")]
    MissingDocument,

    #[error("An API key is required to answer questions.")]
    MissingCredential,

    #[error("API key rejected by the completion service: {0}")]
    Auth(String),

    #[error("Error generating answer: {0}")]
    Service(String),
}

impl QaError {
    /// Short label for the error kind, used in logs and transcripts.
    pub fn kind(&self) -> &'static str {
        match self {
            QaError::InvalidUrl(_) => "invalid_url",
            QaError::Fetch(_) => "fetch_error",
            QaError::Parse(_) => "parse_error",
            QaError::MissingDocument => "missing_document",
            QaError::MissingCredential => "missing_credential",
            QaError::Auth(_) => "auth_error",
            QaError::Service(_) => "service_error",
        }
    }
}
