//! Document source port
//!
//! Defines how the application retrieves the raw bytes behind a URL.

use async_trait::async_trait;
use docqa_domain::DocumentUrl;
use thiserror::Error;

/// Errors that can occur while retrieving a document
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to fetch URL: {0}")]
    Transport(String),

    #[error("HTTP error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Raw response for a fetched document.
#[derive(Debug, Clone, Default)]
pub struct FetchedPage {
    /// Response body as received
    pub body: Vec<u8>,
    /// Declared content type, if the server sent one
    pub content_type: Option<String>,
}

impl FetchedPage {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Retrieves documents over the network.
///
/// One call is one request: implementations do not retry or cache.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, url: &DocumentUrl) -> Result<FetchedPage, SourceError>;
}
