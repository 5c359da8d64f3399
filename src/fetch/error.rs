use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Cannot extract owner/repo from identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} returned an empty body")]
    EmptyBody { url: String },

    #[error("README for {owner}/{repo} is empty")]
    EmptyReadme { owner: String, repo: String },

    #[error("No README found for {owner}/{repo} (tried {attempted} location(s))")]
    NotFound {
        owner: String,
        repo: String,
        attempted: usize,
    },
}

impl FetchError {
    /// A malformed identifier will fail the same way on every attempt.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, FetchError::InvalidIdentifier(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_is_permanent() {
        assert!(!FetchError::InvalidIdentifier("nope".to_string()).is_retryable());
    }

    #[test]
    fn test_network_failures_are_retryable() {
        let transport = FetchError::Transport {
            url: "https://example.com".to_string(),
            message: "connection refused".to_string(),
        };
        let not_found = FetchError::NotFound {
            owner: "acme".to_string(),
            repo: "widget".to_string(),
            attempted: 3,
        };
        assert!(transport.is_retryable());
        assert!(not_found.is_retryable());
    }

    #[test]
    fn test_empty_readme_display() {
        let err = FetchError::EmptyReadme {
            owner: "acme".to_string(),
            repo: "widget".to_string(),
        };
        assert_eq!(err.to_string(), "README for acme/widget is empty");
    }

    #[test]
    fn test_status_display_includes_code() {
        let err = FetchError::Status {
            url: "https://api.github.com/repos/a/b/readme".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Request to https://api.github.com/repos/a/b/readme returned HTTP 404"
        );
    }
}
