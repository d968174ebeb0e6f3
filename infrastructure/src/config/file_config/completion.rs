//! Completion service configuration from TOML (`[completion]` section)

use docqa_application::DEFAULT_MAX_TOKENS;
use docqa_domain::Model;
use serde::{Deserialize, Serialize};

/// Raw completion configuration from TOML
///
/// Holds no credential: the API key is only read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompletionConfig {
    /// Model identifier (known or custom)
    pub model: Model,
    /// Output token cap per answer
    pub max_tokens: u32,
    /// API root of an OpenAI-compatible service
    pub base_url: Option<String>,
}

impl Default for FileCompletionConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            base_url: None,
        }
    }
}
