//! Command handler for a review run
//!
//! Exit codes: 0 when the run finishes (including a human stopping it at a
//! checkpoint), 1 on configuration errors, fetch failures, or when the
//! artifacts could not be written.

use super::commands::CliArgs;
use super::console::ConsoleProgress;
use super::output::{OutputFormat, OutputFormatter, RunSummary};
use super::prompt::ConsolePrompt;
use crate::config::ReviewerConfig;
use crate::fetch::HttpReadmeFetcher;
use crate::output::DirectorySink;
use crate::pipeline::{AbortReason, AutoApprove, DecisionProvider, PipelineOrchestrator};
use crate::progress::{LoggingHandler, ProgressHandler};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Applies command-line overrides on top of the environment configuration.
pub fn apply_overrides(args: &CliArgs, mut config: ReviewerConfig) -> ReviewerConfig {
    if let Some(timeout) = args.timeout {
        debug!("Timeout overridden to {}s", timeout);
        config.timeout_secs = timeout;
    }
    if let Some(dir) = &args.output_dir {
        debug!("Output directory overridden to {}", dir.display());
        config.output_dir = dir.clone();
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    }
    config
}

/// Machine-readable formats keep stdout for the summary only, so the
/// reviewer-facing console moves to stderr, or away entirely when no one is
/// answering prompts.
fn console_progress(interactive: bool, format: OutputFormat) -> Arc<dyn ProgressHandler> {
    match (format, interactive) {
        (OutputFormat::Human, _) => Arc::new(ConsoleProgress::new()),
        (_, true) => Arc::new(ConsoleProgress::stderr()),
        (_, false) => Arc::new(LoggingHandler),
    }
}

pub fn handle_review(args: &CliArgs, config: ReviewerConfig) -> i32 {
    let config = apply_overrides(args, config);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("\nPlease check your environment variables and command-line arguments.");
        return 1;
    }
    debug!("{}", config);

    let fetcher = match HttpReadmeFetcher::new(config.timeout()) {
        Ok(f) => f.with_token(config.github_token.clone()),
        Err(e) => {
            error!("Failed to initialize HTTP client: {}", e);
            return 1;
        }
    };

    let format: OutputFormat = args.format.into();
    let interactive = !args.no_interactive;

    let decisions: Box<dyn DecisionProvider> = match (interactive, format) {
        (false, _) => {
            info!("Non-interactive mode: all checkpoints auto-approved");
            Box::new(AutoApprove)
        }
        (true, OutputFormat::Human) => Box::new(ConsolePrompt::stdio()),
        (true, _) => Box::new(ConsolePrompt::stdin_stderr()),
    };

    let progress: Arc<dyn ProgressHandler> = console_progress(interactive, format);

    let mut orchestrator = PipelineOrchestrator::new(
        Arc::new(fetcher),
        decisions,
        Arc::new(DirectorySink::new(config.output_dir.clone())),
    )
    .with_retry_policy(config.retry_policy())
    .with_progress_handler(progress);

    let outcome = match orchestrator.run(&args.repo) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Review failed: {:#}", e);
            return 1;
        }
    };

    let summary = RunSummary::from_outcome(&args.repo, &outcome);
    match OutputFormatter::new(format).format(&summary) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            error!("Failed to format output: {}", e);
            return 1;
        }
    }

    match outcome.abort_reason() {
        Some(AbortReason::FetchFailed(_)) => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn base_config() -> ReviewerConfig {
        ReviewerConfig {
            timeout_secs: 10,
            output_dir: PathBuf::from("outputs"),
            retry_attempts: 3,
            retry_delay_ms: 1000,
            log_level: "info".to_string(),
            github_token: None,
        }
    }

    #[test]
    fn test_overrides_applied() {
        let args = CliArgs::parse_from([
            "readme-review",
            "--repo",
            "a/b",
            "--timeout",
            "42",
            "-o",
            "reports",
            "--log-level",
            "DEBUG",
        ]);
        let config = apply_overrides(&args, base_config());
        assert_eq!(config.timeout_secs, 42);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let args = CliArgs::parse_from(["readme-review", "--repo", "a/b"]);
        assert_eq!(apply_overrides(&args, base_config()), base_config());
    }

    #[test]
    fn test_invalid_timeout_exits_with_error() {
        let args = CliArgs::parse_from([
            "readme-review",
            "--repo",
            "a/b",
            "--no-interactive",
            "--timeout",
            "0",
        ]);
        assert_eq!(handle_review(&args, base_config()), 1);
    }

    #[test]
    fn test_invalid_identifier_exits_with_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("out");
        let args = CliArgs::parse_from([
            "readme-review",
            "--repo",
            "not-a-repo",
            "--no-interactive",
            "--format",
            "json",
        ]);
        let mut config = base_config();
        config.output_dir = out.clone();
        assert_eq!(handle_review(&args, config), 1);
        assert!(!out.exists());
    }
}
