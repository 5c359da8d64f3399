//! Final summary formatting
//!
//! Human output mirrors what the reviewer sees on the console. JSON and YAML
//! carry the same fields for scripting.
//!
//! # Example
//!
//! ```ignore
//! use readme_review::cli::output::{OutputFormat, OutputFormatter, RunSummary};
//!
//! let summary = RunSummary::from_outcome("acme/widget", &outcome);
//! let output = OutputFormatter::new(OutputFormat::Json).format(&summary)?;
//! println!("{}", output);
//! ```

use crate::pipeline::PipelineOutcome;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    Aborted,
}

/// What a run produced, independent of output format
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub repo: String,
    pub status: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    pub saved_files: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_reason: Option<String>,
}

impl RunSummary {
    pub fn from_outcome(repo: &str, outcome: &PipelineOutcome) -> Self {
        match outcome {
            PipelineOutcome::Completed(run) => Self {
                repo: repo.to_string(),
                status: RunStatus::Completed,
                report: Some(run.report.clone()),
                saved_files: run.saved_files.clone(),
                abort_reason: None,
            },
            PipelineOutcome::Aborted(reason) => Self {
                repo: repo.to_string(),
                status: RunStatus::Aborted,
                report: None,
                saved_files: Vec::new(),
                abort_reason: Some(reason.to_string()),
            },
        }
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(summary)
                .context("Failed to serialize run summary to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(summary).context("Failed to serialize run summary to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(summary)),
        }
    }

    fn format_human(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        match (&summary.report, &summary.abort_reason) {
            (Some(report), _) => {
                output.push_str("\n--- Final Report ---\n\n");
                output.push_str(report);
                output.push('\n');

                if !summary.saved_files.is_empty() {
                    output.push_str("\nSaved:\n");
                    for path in &summary.saved_files {
                        output.push_str(&format!("  {}\n", path.display()));
                    }
                }
            }
            (None, Some(reason)) => {
                output.push_str(reason);
                output.push('\n');
            }
            (None, None) => output.push_str("No report produced.\n"),
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{AbortReason, CompletedRun, SharedState};

    fn completed() -> PipelineOutcome {
        PipelineOutcome::Completed(CompletedRun {
            report: "Final Report\nREADME length: 3 words.".to_string(),
            state: SharedState::new(),
            saved_files: vec![PathBuf::from("outputs/report_1.txt")],
        })
    }

    fn aborted() -> PipelineOutcome {
        PipelineOutcome::Aborted(AbortReason::StoppedByUser {
            stage: "Repo Analyzer",
        })
    }

    #[test]
    fn test_human_completed() {
        let summary = RunSummary::from_outcome("acme/widget", &completed());
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&summary)
            .unwrap();
        assert!(output.starts_with("\n--- Final Report ---\n\nFinal Report\n"));
        assert!(output.contains("Saved:\n  outputs/report_1.txt\n"));
    }

    #[test]
    fn test_human_aborted() {
        let summary = RunSummary::from_outcome("acme/widget", &aborted());
        let output = OutputFormatter::new(OutputFormat::Human)
            .format(&summary)
            .unwrap();
        assert_eq!(output, "Pipeline stopped by user after Repo Analyzer\n");
    }

    #[test]
    fn test_json_fields() {
        let summary = RunSummary::from_outcome("acme/widget", &aborted());
        let output = OutputFormatter::new(OutputFormat::Json)
            .format(&summary)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "aborted");
        assert_eq!(value["repo"], "acme/widget");
        assert!(value.get("report").is_none());
        assert_eq!(
            value["abort_reason"],
            "Pipeline stopped by user after Repo Analyzer"
        );
    }

    #[test]
    fn test_yaml_completed() {
        let summary = RunSummary::from_outcome("acme/widget", &completed());
        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format(&summary)
            .unwrap();
        assert!(output.contains("status: completed"));
        assert!(output.contains("outputs/report_1.txt"));
    }
}
