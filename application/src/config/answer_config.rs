//! Answer configuration - the named settings for question answering.
//!
//! [`AnswerConfig`] groups everything the Answerer sends besides the
//! document and question: which model, how many output tokens and which
//! prompt template. Callers vary these without touching the use case.

use docqa_domain::{Model, PromptTemplate};
use serde::{Deserialize, Serialize};

/// Output token cap for a single answer.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Completion settings for [`AnswerQuestionUseCase`](crate::use_cases::answer_question::AnswerQuestionUseCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Model identifier sent with every request.
    pub model: Model,
    /// Maximum tokens the model may generate.
    pub max_tokens: u32,
    /// System instruction and user prompt template.
    pub prompt: PromptTemplate,
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            prompt: PromptTemplate::default(),
        }
    }
}

impl AnswerConfig {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnswerConfig::default();
        assert_eq!(config.model.as_str(), "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.prompt, PromptTemplate::default());
    }

    #[test]
    fn test_builder() {
        let config = AnswerConfig::default()
            .with_model(Model::Gpt4oMini)
            .with_max_tokens(200);
        assert_eq!(config.model, Model::Gpt4oMini);
        assert_eq!(config.max_tokens, 200);
    }
}
