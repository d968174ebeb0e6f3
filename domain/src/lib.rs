//! Domain layer for docqa
//!
//! This crate contains the value objects, entities and pure text handling
//! of the document QA flow. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **DocumentUrl / DocumentText**: where a document came from and the
//!   normalized plain text extracted from it
//! - **Question / Answer**: the user's query and the model's verbatim reply
//! - **ApiKey**: an opaque credential that is never displayed or logged
//! - **DocumentSession**: the explicit per-session slot holding the last
//!   successfully fetched document
//! - **PromptTemplate**: the named prompt configuration

pub mod core;
pub mod document;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use crate::core::{
    answer::Answer, credential::ApiKey, error::QaError, model::Model, question::Question,
};
pub use document::{
    DocumentText, DocumentUrl, PREVIEW_CHAR_LIMIT, PREVIEW_MARKER, normalize_text,
};
pub use prompt::{DOCUMENT_CHAR_LIMIT, FALLBACK_ANSWER, PromptTemplate};
pub use session::{DocumentSession, LoadedDocument};
