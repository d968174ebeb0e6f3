//! HTTP document source: one plain GET per fetch

use async_trait::async_trait;
use docqa_application::ports::document_source::{DocumentSource, FetchedPage, SourceError};
use docqa_domain::DocumentUrl;
use std::time::Instant;
use tracing::debug;

/// Fetches documents with `reqwest` using transport defaults.
///
/// No retries, no timeout override, no extra headers.
#[derive(Debug, Clone, Default)]
pub struct HttpDocumentSource {
    client: reqwest::Client,
}

impl HttpDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch(&self, url: &DocumentUrl) -> Result<FetchedPage, SourceError> {
        let start = Instant::now();

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| SourceError::Transport(error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Body(error_chain(&e)))?;

        debug!(
            "GET {} -> {} ({} bytes in {} ms)",
            url,
            status.as_u16(),
            body.len(),
            start.elapsed().as_millis()
        );

        Ok(FetchedPage {
            body: body.to_vec(),
            content_type,
        })
    }
}

/// Render an error with its sources, e.g.
/// `error sending request: client error (Connect): tcp connect error: Connection refused`.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
