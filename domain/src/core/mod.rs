//! Core domain concepts shared across the QA flow.
//!
//! - [`question::Question`] - a non-blank question about the document
//! - [`answer::Answer`] - the completion service's reply
//! - [`credential::ApiKey`] - opaque secret for the completion service
//! - [`model::Model`] - chat-completion model identifier
//! - [`error::QaError`] - user-facing error taxonomy

pub mod answer;
pub mod credential;
pub mod error;
pub mod model;
pub mod question;
