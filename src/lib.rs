//! readme-review - human-in-the-loop README reviewer
//!
//! Fetches a GitHub repository's README and runs three deterministic analysis
//! stages over it, pausing after each so a human can continue, stop, or
//! replace the text the next stage sees. The final report and the raw stage
//! outputs are written to a timestamped pair of files.
//!
//! # Pipeline
//!
//! 1. **Fetch**: contents API, then raw `main`/`master` fallbacks, with retry
//! 2. **Repo Analyzer**: word count, standard section detection, suggestions
//! 3. **Tag Recommender**: stopword-filtered keyword frequency
//! 4. **Content Improver**: title and intro suggestions
//! 5. **Reviewer**: report synthesis from the shared state
//!
//! # Example
//!
//! ```no_run
//! use readme_review::{
//!     AutoApprove, DirectorySink, HttpReadmeFetcher, PipelineOrchestrator, ReviewerConfig,
//! };
//! use std::sync::Arc;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ReviewerConfig::load();
//! let fetcher = HttpReadmeFetcher::new(config.timeout())?;
//! let mut orchestrator = PipelineOrchestrator::new(
//!     Arc::new(fetcher),
//!     Box::new(AutoApprove),
//!     Arc::new(DirectorySink::new(config.output_dir.clone())),
//! )
//! .with_retry_policy(config.retry_policy());
//!
//! let outcome = orchestrator.run("https://github.com/acme/widget")?;
//! if let Some(report) = outcome.report() {
//!     println!("{}", report);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod util;

pub use config::{ConfigError, ReviewerConfig};
pub use fetch::{FetchEndpoints, FetchError, HttpReadmeFetcher, ReadmeFetcher, RepoId, RetryPolicy};
pub use output::{DirectorySink, MemorySink, OutputSink, RunArtifacts};
pub use pipeline::{
    AbortReason, AutoApprove, CheckpointDecision, CompletedRun, DecisionProvider,
    PipelineOrchestrator, PipelineOutcome, ScriptedDecisions, SharedState, StateKey,
};
pub use progress::{LoggingHandler, NoOpHandler, ProgressEvent, ProgressHandler};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name, also used in the HTTP User-Agent
pub const NAME: &str = env!("CARGO_PKG_NAME");
