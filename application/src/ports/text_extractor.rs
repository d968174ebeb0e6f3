//! Text extractor port
//!
//! Turns a fetched page into linearized text. Whitespace normalization
//! happens afterwards in the domain layer.

use crate::ports::document_source::FetchedPage;
use thiserror::Error;

/// Errors that can occur while processing a page
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported content: {0}")]
    Unsupported(String),
}

/// Extracts visible text from a fetched page.
pub trait TextExtractor: Send + Sync {
    /// Return the visible text, one block-level element per line.
    fn extract(&self, page: &FetchedPage) -> Result<String, ExtractError>;
}
