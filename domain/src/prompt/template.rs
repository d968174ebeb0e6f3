//! Prompt template for document-grounded question answering

use serde::{Deserialize, Serialize};

/// Sentence the model must reply with when the document lacks the answer.
pub const FALLBACK_ANSWER: &str = "I don't have enough information to answer this question.";

/// Characters of document text embedded in a prompt.
pub const DOCUMENT_CHAR_LIMIT: usize = 4000;

const DEFAULT_SYSTEM: &str =
    "You are a helpful assistant that answers questions based on document content.";

const DEFAULT_TEMPLATE: &str = r#"Document content:
{document}

Question: {question}

Please answer the question based only on the information provided in the document.
If the answer is not in the document, say "{fallback}""#;

/// Named prompt configuration.
///
/// `template` may reference `{document}`, `{question}` and `{fallback}`.
/// Rendering is a single pass over the template, so placeholder-like text
/// inside the document or question is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTemplate {
    /// System instruction framing the assistant
    pub system: String,
    /// User prompt template
    pub template: String,
    /// Verbatim fallback sentence
    pub fallback: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            system: DEFAULT_SYSTEM.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            fallback: FALLBACK_ANSWER.to_string(),
        }
    }
}

impl PromptTemplate {
    /// System prompt sent ahead of the user prompt
    pub fn system_prompt(&self) -> &str {
        &self.system
    }

    /// Render the user prompt from an already-truncated document excerpt.
    pub fn render(&self, document: &str, question: &str) -> String {
        let mut prompt =
            String::with_capacity(self.template.len() + document.len() + question.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            prompt.push_str(&rest[..start]);
            let tail = &rest[start..];
            let Some(end) = tail.find('}') else {
                prompt.push_str(tail);
                return prompt;
            };

            match &tail[1..end] {
                "document" => prompt.push_str(document),
                "question" => prompt.push_str(question),
                "fallback" => prompt.push_str(&self.fallback),
                _ => prompt.push_str(&tail[..=end]),
            }
            rest = &tail[end + 1..];
        }

        prompt.push_str(rest);
        prompt
    }
}
