use super::checkpoint::{CheckpointDecision, DecisionProvider};
use super::document::Document;
use super::phase_trait::ReviewPhase;
use super::phases::{default_phases, synthesize};
use super::state::{SharedState, StateValue};
use crate::fetch::{call_with_retry_when, FetchError, ReadmeFetcher, RepoId, RetryPolicy};
use crate::output::{OutputSink, RunArtifacts};
use crate::progress::{NoOpHandler, ProgressEvent, ProgressHandler};
use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Why a run ended without a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    FetchFailed(String),
    StoppedByUser { stage: &'static str },
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::FetchFailed(error) => {
                write!(f, "No README found or failed to fetch: {}", error)
            }
            AbortReason::StoppedByUser { stage } => {
                write!(f, "Pipeline stopped by user after {}", stage)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompletedRun {
    pub report: String,
    pub state: SharedState,
    pub saved_files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum PipelineOutcome {
    Completed(CompletedRun),
    Aborted(AbortReason),
}

impl PipelineOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, PipelineOutcome::Completed(_))
    }

    pub fn report(&self) -> Option<&str> {
        match self {
            PipelineOutcome::Completed(run) => Some(&run.report),
            PipelineOutcome::Aborted(_) => None,
        }
    }

    pub fn abort_reason(&self) -> Option<&AbortReason> {
        match self {
            PipelineOutcome::Aborted(reason) => Some(reason),
            PipelineOutcome::Completed(_) => None,
        }
    }
}

/// Sequences fetch, the analysis stages with their checkpoints, and the
/// final synthesis. Owns the shared state for the duration of a run.
pub struct PipelineOrchestrator {
    fetcher: Arc<dyn ReadmeFetcher>,
    decisions: Box<dyn DecisionProvider>,
    sink: Arc<dyn OutputSink>,
    retry_policy: RetryPolicy,
    phases: Vec<Box<dyn ReviewPhase>>,
    progress_handler: Arc<dyn ProgressHandler>,
}

impl PipelineOrchestrator {
    pub fn new(
        fetcher: Arc<dyn ReadmeFetcher>,
        decisions: Box<dyn DecisionProvider>,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            fetcher,
            decisions,
            sink,
            retry_policy: RetryPolicy::default(),
            phases: default_phases(),
            progress_handler: Arc::new(NoOpHandler),
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn with_phases(mut self, phases: Vec<Box<dyn ReviewPhase>>) -> Self {
        self.phases = phases;
        self
    }

    pub fn with_progress_handler(mut self, handler: Arc<dyn ProgressHandler>) -> Self {
        self.progress_handler = handler;
        self
    }

    fn emit(&self, event: ProgressEvent) {
        self.progress_handler.on_progress(&event);
    }

    fn fetch(&self, identifier: &str) -> Result<String, FetchError> {
        let repo = RepoId::parse(identifier)?;
        debug!(repo = %repo, "Resolved repository");

        let readme = call_with_retry_when(
            &self.retry_policy,
            || self.fetcher.fetch(&repo),
            FetchError::is_retryable,
        )?;

        if readme.trim().is_empty() {
            return Err(FetchError::EmptyReadme {
                owner: repo.owner,
                repo: repo.repo,
            });
        }
        Ok(readme)
    }

    fn abort(&self, reason: AbortReason) -> PipelineOutcome {
        info!("{}", reason);
        self.emit(ProgressEvent::Aborted {
            reason: reason.to_string(),
        });
        PipelineOutcome::Aborted(reason)
    }

    /// Runs the pipeline for `identifier`.
    ///
    /// Fetch failures and user aborts are normal outcomes. An error is
    /// returned only when a checkpoint cannot be read or the artifacts cannot
    /// be persisted.
    pub fn run(&mut self, identifier: &str) -> Result<PipelineOutcome> {
        let start = Instant::now();
        info!("Starting review for: {}", identifier);
        self.emit(ProgressEvent::Started {
            repo: identifier.to_string(),
        });

        let fetch_start = Instant::now();
        let mut document = match self.fetch(identifier) {
            Ok(text) => {
                self.emit(ProgressEvent::FetchComplete {
                    bytes: text.len(),
                    duration: fetch_start.elapsed(),
                });
                Document::fetched(text)
            }
            Err(e) => {
                self.emit(ProgressEvent::FetchFailed {
                    error: e.to_string(),
                });
                return Ok(self.abort(AbortReason::FetchFailed(e.to_string())));
            }
        };

        let mut state = SharedState::new();
        let interactive = self.decisions.is_interactive();

        for phase in &self.phases {
            let stage = phase.name();
            self.emit(ProgressEvent::StageStarted {
                stage: stage.to_string(),
            });

            debug!(stage, origin = ?document.origin(), "Running stage");
            let stage_start = Instant::now();
            let output = phase.execute(&document);
            let preview = phase.preview(&output);
            state.set(phase.key(), output);

            self.emit(ProgressEvent::StageComplete {
                stage: stage.to_string(),
                preview,
                duration: stage_start.elapsed(),
            });

            if !interactive {
                debug!(stage, "Non-interactive mode: continuing");
                continue;
            }

            let checkpoint = phase.checkpoint();
            let decision = self
                .decisions
                .decide(&checkpoint)
                .with_context(|| format!("Failed to read decision after {}", stage))?;

            self.emit(ProgressEvent::CheckpointResolved {
                stage: stage.to_string(),
                decision: decision.label().to_string(),
            });

            match decision {
                CheckpointDecision::Proceed => {}
                CheckpointDecision::Abort => {
                    return Ok(self.abort(AbortReason::StoppedByUser { stage }));
                }
                CheckpointDecision::ProceedWithEdit(text) => {
                    if text.trim().is_empty() {
                        debug!(stage, "Empty edit, keeping current document");
                        continue;
                    }
                    info!(stage, chars = text.chars().count(), "Using edited text");
                    phase.apply_edit(&mut state, &text);
                    state.set(phase.edit_key(), StateValue::Flag(true));
                    document = Document::edited(text, stage);
                }
            }
        }

        info!("Synthesizing final report");
        let report = synthesize(&state);
        let state_json = state
            .to_json_pretty()
            .context("Failed to serialize shared state")?;
        let artifacts = RunArtifacts::new(state_json, report.clone());
        let saved_files = self
            .sink
            .persist(&artifacts)
            .context("Failed to persist run artifacts")?;

        self.emit(ProgressEvent::Completed {
            saved_files: saved_files.len(),
            total_time: start.elapsed(),
        });

        Ok(PipelineOutcome::Completed(CompletedRun {
            report,
            state,
            saved_files,
        }))
    }
}
