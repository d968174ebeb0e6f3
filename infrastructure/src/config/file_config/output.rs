//! Output configuration from TOML (`[output]` section)

use docqa_domain::PREVIEW_CHAR_LIMIT;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Characters shown by `/preview` and after a fetch
    pub preview_chars: usize,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            preview_chars: PREVIEW_CHAR_LIMIT,
        }
    }
}
