//! Explicit session context holding the last fetched document

use crate::core::error::QaError;
use crate::document::{DocumentText, DocumentUrl};
use serde::{Deserialize, Serialize};

/// A document that was fetched and cleaned successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedDocument {
    pub url: DocumentUrl,
    pub text: DocumentText,
}

impl LoadedDocument {
    pub fn new(url: DocumentUrl, text: DocumentText) -> Self {
        Self { url, text }
    }
}

/// Per-session storage for the most recently fetched document (Entity)
///
/// Empty at session start. Only a successful fetch may replace the
/// current document, so a failed fetch never clobbers earlier work.
#[derive(Debug, Clone, Default)]
pub struct DocumentSession {
    current: Option<LoadedDocument>,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a successfully fetched document, replacing any previous one.
    pub fn commit(&mut self, document: LoadedDocument) -> &LoadedDocument {
        self.current.insert(document)
    }

    /// The last committed document, if any (including empty ones).
    pub fn current(&self) -> Option<&LoadedDocument> {
        self.current.as_ref()
    }

    /// Document text to answer from.
    ///
    /// Fails with [`QaError::MissingDocument`] when nothing was fetched
    /// or the fetched page had no text.
    pub fn require_text(&self) -> Result<&DocumentText, QaError> {
        match &self.current {
            Some(doc) if !doc.text.is_empty() => Ok(&doc.text),
            _ => Err(QaError::MissingDocument),
        }
    }

    pub fn has_document(&self) -> bool {
        self.require_text().is_ok()
    }
}
