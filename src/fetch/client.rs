//! Blocking HTTP README fetcher
//!
//! Tries the contents API first (asking for the raw media type), then the raw
//! content host on `main` and `master`. The first non-empty body wins.

use super::error::FetchError;
use super::repo::RepoId;
use crate::{NAME, VERSION};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use std::time::Duration;
use tracing::{debug, info, warn};

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";
const RAW_ACCEPT: &str = "application/vnd.github.v3.raw";
const FALLBACK_BRANCHES: [&str; 2] = ["main", "master"];

/// Source of README text for a repository
pub trait ReadmeFetcher: Send + Sync {
    fn fetch(&self, repo: &RepoId) -> Result<String, FetchError>;
}

/// Base URLs for the primary API and the raw-content fallbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchEndpoints {
    pub api_base: String,
    pub raw_base: String,
}

impl Default for FetchEndpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            raw_base: DEFAULT_RAW_BASE.to_string(),
        }
    }
}

impl FetchEndpoints {
    pub fn api_url(&self, repo: &RepoId) -> String {
        format!(
            "{}/repos/{}/{}/readme",
            self.api_base.trim_end_matches('/'),
            repo.owner,
            repo.repo
        )
    }

    /// Fallback URLs in the order they are tried.
    pub fn raw_urls(&self, repo: &RepoId) -> Vec<String> {
        FALLBACK_BRANCHES
            .iter()
            .map(|branch| {
                format!(
                    "{}/{}/{}/{}/README.md",
                    self.raw_base.trim_end_matches('/'),
                    repo.owner,
                    repo.repo,
                    branch
                )
            })
            .collect()
    }
}

pub struct HttpReadmeFetcher {
    http_client: Client,
    endpoints: FetchEndpoints,
    token: Option<String>,
}

impl HttpReadmeFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Self::with_endpoints(timeout, FetchEndpoints::default())
    }

    pub fn with_endpoints(timeout: Duration, endpoints: FetchEndpoints) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http_client,
            endpoints,
            token: None,
        })
    }

    /// Sends `Authorization: Bearer <token>` to the contents API.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    fn get(&self, url: &str, raw_accept: bool) -> Result<String, FetchError> {
        let mut request = self
            .http_client
            .get(url)
            .header(USER_AGENT, format!("{}/{}", NAME, VERSION));

        if raw_accept {
            request = request.header(ACCEPT, RAW_ACCEPT);
            if let Some(token) = &self.token {
                request = request.header(AUTHORIZATION, format!("Bearer {}", token));
            }
        }

        let response = request.send().map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: format!("failed to read body: {}", e),
        })?;

        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_string(),
            });
        }

        Ok(body)
    }
}

impl ReadmeFetcher for HttpReadmeFetcher {
    fn fetch(&self, repo: &RepoId) -> Result<String, FetchError> {
        let mut candidates = vec![(self.endpoints.api_url(repo), true)];
        candidates.extend(self.endpoints.raw_urls(repo).into_iter().map(|u| (u, false)));
        let attempted = candidates.len();

        for (url, raw_accept) in candidates {
            debug!(url = %url, "Requesting README");
            match self.get(&url, raw_accept) {
                Ok(body) => {
                    info!(repo = %repo, url = %url, bytes = body.len(), "README fetched");
                    return Ok(body);
                }
                Err(e @ FetchError::Transport { .. }) => {
                    warn!(error = %e, "Transport error, trying next location");
                }
                Err(e) => {
                    debug!(error = %e, "No README at location, trying next");
                }
            }
        }

        Err(FetchError::NotFound {
            owner: repo.owner.clone(),
            repo: repo.repo.clone(),
            attempted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = FetchEndpoints::default();
        let repo = RepoId::new("acme", "widget");
        assert_eq!(
            endpoints.api_url(&repo),
            "https://api.github.com/repos/acme/widget/readme"
        );
        assert_eq!(
            endpoints.raw_urls(&repo),
            vec![
                "https://raw.githubusercontent.com/acme/widget/main/README.md".to_string(),
                "https://raw.githubusercontent.com/acme/widget/master/README.md".to_string(),
            ]
        );
    }

    #[test]
    fn test_custom_base_trailing_slash() {
        let endpoints = FetchEndpoints {
            api_base: "http://127.0.0.1:9000/".to_string(),
            raw_base: "http://127.0.0.1:9001/".to_string(),
        };
        let repo = RepoId::new("a", "b");
        assert_eq!(endpoints.api_url(&repo), "http://127.0.0.1:9000/repos/a/b/readme");
        assert_eq!(
            endpoints.raw_urls(&repo)[0],
            "http://127.0.0.1:9001/a/b/main/README.md"
        );
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let fetcher = HttpReadmeFetcher::new(Duration::from_secs(1))
            .unwrap()
            .with_token(Some("  ".to_string()));
        assert!(fetcher.token.is_none());
    }

    #[test]
    fn test_unreachable_host_reports_not_found() {
        // Port 9 (discard) on localhost is closed in test environments.
        let endpoints = FetchEndpoints {
            api_base: "http://127.0.0.1:9".to_string(),
            raw_base: "http://127.0.0.1:9".to_string(),
        };
        let fetcher =
            HttpReadmeFetcher::with_endpoints(Duration::from_millis(500), endpoints).unwrap();
        let err = fetcher.fetch(&RepoId::new("acme", "widget")).unwrap_err();
        assert!(matches!(err, FetchError::NotFound { attempted: 3, .. }));
    }
}
