//! Extract Document use case.
//!
//! Fetcher/Cleaner: validates a URL, retrieves the page once through the
//! [`DocumentSource`] port, linearizes it through the [`TextExtractor`]
//! port and normalizes the result with
//! [`normalize_text`](docqa_domain::normalize_text).
//!
//! Nothing is cached. Every call re-fetches and re-parses.

use crate::ports::document_source::DocumentSource;
use crate::ports::text_extractor::TextExtractor;
use docqa_domain::{DocumentText, DocumentUrl, LoadedDocument, QaError, normalize_text};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for turning a URL into plain document text.
#[derive(Clone)]
pub struct ExtractDocumentUseCase {
    source: Arc<dyn DocumentSource>,
    extractor: Arc<dyn TextExtractor>,
}

impl ExtractDocumentUseCase {
    pub fn new(source: Arc<dyn DocumentSource>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self { source, extractor }
    }

    /// Validate `url` and extract its text.
    ///
    /// An invalid URL fails with [`QaError::InvalidUrl`] before any
    /// network activity.
    pub async fn extract_text(&self, url: &str) -> Result<DocumentText, QaError> {
        let url = DocumentUrl::parse(url)?;
        Ok(self.execute(url).await?.text)
    }

    /// Fetch and clean an already validated URL.
    pub async fn execute(&self, url: DocumentUrl) -> Result<LoadedDocument, QaError> {
        info!("Fetching document: {}", url);

        let page = self
            .source
            .fetch(&url)
            .await
            .map_err(|e| QaError::Fetch(e.to_string()))?;

        debug!(
            "Fetched {} bytes (content-type: {})",
            page.body.len(),
            page.content_type.as_deref().unwrap_or("unknown")
        );

        let raw = self
            .extractor
            .extract(&page)
            .map_err(|e| QaError::Parse(e.to_string()))?;

        let text = DocumentText::new(normalize_text(&raw));
        info!("Extracted {} characters from {}", text.char_count(), url.host());

        Ok(LoadedDocument::new(url, text))
    }
}
