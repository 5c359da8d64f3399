//! Configuration management for readme-review
//!
//! Settings are loaded from environment variables (after a `.env` file in the
//! working directory, if any) with sensible defaults. Command-line flags
//! override individual fields afterwards.
//!
//! # Environment Variables
//!
//! - `README_REVIEW_TIMEOUT`: HTTP timeout in seconds - default: "10"
//! - `README_REVIEW_OUTPUT_DIR`: Directory for run artifacts - default: "outputs"
//! - `README_REVIEW_RETRY_ATTEMPTS`: Fetch attempts before giving up - default: "3"
//! - `README_REVIEW_RETRY_DELAY_MS`: Base retry delay in milliseconds - default: "1000"
//! - `README_REVIEW_LOG_LEVEL`: Logging level - default: "info"
//! - `GITHUB_TOKEN`: Optional token sent to the GitHub contents API
//!
//! # Example
//!
//! ```no_run
//! use readme_review::ReviewerConfig;
//!
//! let config = ReviewerConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use crate::fetch::RetryPolicy;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_OUTPUT_DIR: &str = "outputs";
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 1000;
const DEFAULT_LOG_LEVEL: &str = "info";

const MAX_TIMEOUT_SECS: u64 = 600;
const MAX_RETRY_ATTEMPTS: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerConfig {
    /// HTTP timeout for each fetch request, in seconds
    pub timeout_secs: u64,

    /// Where run artifacts are written
    pub output_dir: PathBuf,

    pub retry_attempts: u32,

    /// Base delay for exponential backoff, in milliseconds
    pub retry_delay_ms: u64,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    pub github_token: Option<String>,
}

impl Default for ReviewerConfig {
    /// Loads from `README_REVIEW_*` environment variables, falling back to defaults.
    fn default() -> Self {
        let timeout_secs = env::var("README_REVIEW_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let output_dir = env::var("README_REVIEW_OUTPUT_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let retry_attempts = env::var("README_REVIEW_RETRY_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_RETRY_ATTEMPTS);

        let retry_delay_ms = env::var("README_REVIEW_RETRY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_DELAY_MS);

        let log_level = env::var("README_REVIEW_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let github_token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            timeout_secs,
            output_dir,
            retry_attempts,
            retry_delay_ms,
            log_level,
            github_token,
        }
    }
}

impl ReviewerConfig {
    /// Loads `.env` (if present) and then reads the environment.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Timeout must be at least 1 second".to_string(),
            ));
        }
        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::ValidationFailed(
                "Timeout cannot exceed 10 minutes".to_string(),
            ));
        }

        if self.retry_attempts == 0 || self.retry_attempts > MAX_RETRY_ATTEMPTS {
            return Err(ConfigError::ValidationFailed(format!(
                "Retry attempts must be between 1 and {}",
                MAX_RETRY_ATTEMPTS
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_attempts,
            Duration::from_millis(self.retry_delay_ms),
        )
    }
}

impl fmt::Display for ReviewerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "readme-review Configuration:")?;
        writeln!(f, "  Timeout: {}s", self.timeout_secs)?;
        writeln!(f, "  Output Dir: {}", self.output_dir.display())?;
        writeln!(
            f,
            "  Retry: {} attempt(s), base delay {}ms",
            self.retry_attempts, self.retry_delay_ms
        )?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(
            f,
            "  GitHub Token: {}",
            if self.github_token.is_some() {
                "set"
            } else {
                "not set"
            }
        )?;
        Ok(())
    }
}
