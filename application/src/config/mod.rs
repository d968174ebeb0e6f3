//! Application-level configuration.
//!
//! - [`AnswerConfig`] - model, output token cap and prompt template for the Answerer

pub mod answer_config;

pub use answer_config::{AnswerConfig, DEFAULT_MAX_TOKENS};
