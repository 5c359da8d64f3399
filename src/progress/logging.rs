//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { repo } => {
                info!(repo = %repo, "Starting review");
            }
            ProgressEvent::FetchComplete { bytes, duration } => {
                info!(
                    bytes,
                    duration_ms = duration.as_millis() as u64,
                    "README fetched"
                );
            }
            ProgressEvent::FetchFailed { error } => {
                warn!(error = %error, "README fetch failed");
            }
            ProgressEvent::StageStarted { stage } => {
                info!(stage = %stage, "Starting stage");
            }
            ProgressEvent::StageComplete {
                stage, duration, ..
            } => {
                debug!(
                    stage = %stage,
                    duration_ms = duration.as_millis() as u64,
                    "Stage complete"
                );
            }
            ProgressEvent::CheckpointResolved { stage, decision } => {
                info!(stage = %stage, decision = %decision, "Checkpoint resolved");
            }
            ProgressEvent::Aborted { reason } => {
                warn!(reason = %reason, "Review aborted");
            }
            ProgressEvent::Completed {
                saved_files,
                total_time,
            } => {
                info!(
                    saved_files,
                    total_time_ms = total_time.as_millis() as u64,
                    "Review complete"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_logging_handler_handles_all_events() {
        let handler = LoggingHandler;
        let events = vec![
            ProgressEvent::Started {
                repo: "acme/widget".to_string(),
            },
            ProgressEvent::FetchComplete {
                bytes: 42,
                duration: Duration::from_millis(5),
            },
            ProgressEvent::FetchFailed {
                error: "boom".to_string(),
            },
            ProgressEvent::StageStarted {
                stage: "Repo Analyzer".to_string(),
            },
            ProgressEvent::StageComplete {
                stage: "Repo Analyzer".to_string(),
                preview: vec!["line".to_string()],
                duration: Duration::from_millis(1),
            },
            ProgressEvent::CheckpointResolved {
                stage: "Repo Analyzer".to_string(),
                decision: "proceed".to_string(),
            },
            ProgressEvent::Aborted {
                reason: "stopped".to_string(),
            },
            ProgressEvent::Completed {
                saved_files: 2,
                total_time: Duration::from_millis(10),
            },
        ];

        for event in &events {
            handler.on_progress(event);
        }
    }
}
