use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

pub const RECOMMENDATIONS_HEADER: &str = "Recommendations (auto-generated)";

/// Everything a completed run leaves behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArtifacts {
    /// Unix timestamp (seconds) used to name the files
    pub timestamp: i64,
    /// Pretty-printed JSON snapshot of the shared state
    pub state_json: String,
    pub report: String,
}

impl RunArtifacts {
    pub fn new(state_json: String, report: String) -> Self {
        Self {
            timestamp: Utc::now().timestamp(),
            state_json,
            report,
        }
    }

    pub fn recommendations_text(&self) -> String {
        format!("{}\n\n{}", RECOMMENDATIONS_HEADER, self.state_json)
    }
}

/// Destination for run artifacts
pub trait OutputSink: Send + Sync {
    /// Stores the artifacts and returns where they went.
    fn persist(&self, artifacts: &RunArtifacts) -> Result<Vec<PathBuf>>;
}

/// Writes `recommendations_<ts>.txt` and `report_<ts>.txt` into a directory,
/// creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl OutputSink for DirectorySink {
    fn persist(&self, artifacts: &RunArtifacts) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create output directory {}", self.dir.display())
        })?;
        debug!(dir = %self.dir.display(), "Output directory ready");

        let recommendations = self
            .dir
            .join(format!("recommendations_{}.txt", artifacts.timestamp));
        let report = self.dir.join(format!("report_{}.txt", artifacts.timestamp));

        fs::write(&recommendations, artifacts.recommendations_text())
            .with_context(|| format!("Failed to write {}", recommendations.display()))?;
        fs::write(&report, &artifacts.report)
            .with_context(|| format!("Failed to write {}", report.display()))?;

        info!(
            recommendations = %recommendations.display(),
            report = %report.display(),
            "Saved run artifacts"
        );
        Ok(vec![recommendations, report])
    }
}

/// In-memory sink; clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    runs: Arc<Mutex<Vec<RunArtifacts>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> Vec<RunArtifacts> {
        self.runs.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.runs().is_empty()
    }
}

impl OutputSink for MemorySink {
    fn persist(&self, artifacts: &RunArtifacts) -> Result<Vec<PathBuf>> {
        let mut runs = self
            .runs
            .lock()
            .map_err(|_| anyhow::anyhow!("Memory sink lock poisoned"))?;
        runs.push(artifacts.clone());
        Ok(vec![
            PathBuf::from(format!("memory://recommendations_{}.txt", artifacts.timestamp)),
            PathBuf::from(format!("memory://report_{}.txt", artifacts.timestamp)),
        ])
    }
}
