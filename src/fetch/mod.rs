//! README retrieval
//!
//! The fetcher resolves a repository identifier to an owner/repo pair, asks the
//! GitHub contents API for the raw README, and falls back to the raw-content
//! host on the conventional default branches. Retrying is layered on top by
//! [`retry::call_with_retry`], never inside the fetcher itself.

pub mod client;
pub mod error;
pub mod repo;
pub mod retry;

pub use client::{FetchEndpoints, HttpReadmeFetcher, ReadmeFetcher};
pub use error::FetchError;
pub use repo::RepoId;
pub use retry::{call_with_retry, call_with_retry_when, RetryPolicy};
