//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod completion;
mod logging;
mod output;
mod repl;

pub use completion::FileCompletionConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use docqa_application::AnswerConfig;
use docqa_domain::PromptTemplate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("completion.model cannot be empty")]
    EmptyModelName,

    #[error("completion.max_tokens cannot be 0")]
    ZeroMaxTokens,

    #[error("completion.base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("prompt.template must contain {{document}} and {{question}}")]
    MissingPlaceholder,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion service settings
    pub completion: FileCompletionConfig,
    /// Prompt wording (uses domain type)
    pub prompt: PromptTemplate,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.completion.model.as_str().trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if self.completion.max_tokens == 0 {
            return Err(ConfigValidationError::ZeroMaxTokens);
        }

        if let Some(base_url) = &self.completion.base_url
            && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
        {
            return Err(ConfigValidationError::InvalidBaseUrl(base_url.clone()));
        }

        // A template without these would send the model nothing to answer from
        if !self.prompt.template.contains("{document}") || !self.prompt.template.contains("{question}")
        {
            return Err(ConfigValidationError::MissingPlaceholder);
        }

        Ok(())
    }

    /// Settings handed to the answer use case
    pub fn answer_config(&self) -> AnswerConfig {
        AnswerConfig::default()
            .with_model(self.completion.model.clone())
            .with_max_tokens(self.completion.max_tokens)
            .with_prompt(self.prompt.clone())
    }
}
