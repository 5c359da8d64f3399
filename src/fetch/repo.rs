use super::error::FetchError;
use std::fmt;

/// Owner/repository pair extracted from a URL-like identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses `https://github.com/owner/repo`, `owner/repo` and
    /// `git@github.com:owner/repo.git`. The last two path segments win.
    pub fn parse(identifier: &str) -> Result<Self, FetchError> {
        let trimmed = identifier.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split(['/', ':']).collect();

        if segments.len() < 2 {
            return Err(FetchError::InvalidIdentifier(identifier.to_string()));
        }

        let owner = segments[segments.len() - 2].trim();
        let repo = segments[segments.len() - 1].trim();
        let repo = repo.strip_suffix(".git").unwrap_or(repo);

        // GitHub owners never contain dots, so a host name here means the
        // identifier stopped short of the repository segment.
        if owner.is_empty() || repo.is_empty() || owner.contains('.') {
            return Err(FetchError::InvalidIdentifier(identifier.to_string()));
        }

        Ok(Self::new(owner, repo))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
