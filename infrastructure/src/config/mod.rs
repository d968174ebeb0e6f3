//! Configuration file loading for docqa
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./docqa.toml` or `./.docqa.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/docqa/config.toml`
//! 4. Fallback: `~/.config/docqa/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCompletionConfig, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
