//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while the review pipeline runs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Pipeline started for a repository identifier
    Started { repo: String },

    /// README retrieved
    FetchComplete { bytes: usize, duration: Duration },

    /// README could not be retrieved; the run aborts
    FetchFailed { error: String },

    /// Analysis stage about to run
    StageStarted { stage: String },

    /// Analysis stage finished; `preview` is the human-readable output
    StageComplete {
        stage: String,
        preview: Vec<String>,
        duration: Duration,
    },

    /// Human answered a checkpoint
    CheckpointResolved { stage: String, decision: String },

    /// Run stopped before producing a report
    Aborted { reason: String },

    /// Report synthesized and persisted
    Completed {
        saved_files: usize,
        total_time: Duration,
    },
}

/// Trait for handling progress events during a review run
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
