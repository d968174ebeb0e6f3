//! Port for structured session transcripts.
//!
//! `tracing` carries diagnostic messages for humans. This port instead
//! records what happened in a session (documents fetched, questions asked,
//! answers received, failures) as machine-readable events, typically one
//! JSON object per line. The API key is never part of a payload.

use serde_json::Value;

/// A structured transcript event.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "document_fetched", "question_answered").
    pub event_type: &'static str,
    /// Event-specific fields.
    pub payload: Value,
}

impl ConversationEvent {
    /// Create an event. The adapter adds the timestamp when writing.
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for writing transcript events.
///
/// `log` is synchronous and infallible: a broken transcript must never
/// interrupt a fetch or an answer.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when transcripts are disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
