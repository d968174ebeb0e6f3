//! Progress notification port
//!
//! Defines the interface for reporting progress while a blocking step
//! (document fetch or answer generation) is in flight.

/// The two long-running steps of the QA flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Answer,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Fetch => "fetch",
            Stage::Answer => "answer",
        }
    }
}

/// Callback for progress updates during a QA step
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts. `detail` is the URL or model name.
    fn on_stage_start(&self, stage: Stage, detail: &str);

    /// Called when a stage finishes, successfully or not
    fn on_stage_complete(&self, stage: Stage, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _detail: &str) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
