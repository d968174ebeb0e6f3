//! Document text value object

use crate::util::truncate_chars;
use serde::{Deserialize, Serialize};

/// Characters shown in the front-end preview.
pub const PREVIEW_CHAR_LIMIT: usize = 1000;

/// Marker appended to a preview when the text was cut.
pub const PREVIEW_MARKER: &str = "...";

/// Normalized plain text extracted from a document.
///
/// Stored in full; truncation for prompting or preview happens at use time.
/// May be empty when the page had no extractable text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentText {
    content: String,
}

impl DocumentText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in characters (not bytes)
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// First `limit` characters, cut without regard to word boundaries.
    pub fn prompt_excerpt(&self, limit: usize) -> &str {
        truncate_chars(&self.content, limit)
    }

    /// Preview for display: first `limit` characters plus [`PREVIEW_MARKER`]
    /// when the text is longer.
    pub fn preview(&self, limit: usize) -> String {
        let head = truncate_chars(&self.content, limit);
        if head.len() < self.content.len() {
            format!("{}{}", head, PREVIEW_MARKER)
        } else {
            head.to_string()
        }
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

impl std::fmt::Display for DocumentText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
