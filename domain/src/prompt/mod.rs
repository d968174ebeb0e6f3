//! Prompt domain
//!
//! The configurable template used to ask questions about a document.

mod template;

pub use template::{DOCUMENT_CHAR_LIMIT, FALLBACK_ANSWER, PromptTemplate};
