//! Error types shared across the crate.
//!
//! Every failure is surfaced verbatim to the caller as a tagged variant; nothing
//! here retries or recovers. The UI shows one current error at a time.

use thiserror::Error;

/// Rejections produced by [`crate::validate::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid email format: {0}")]
    InvalidEmailFormat(String),
}

/// Failures of the persisted cache slot.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache contents: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failures of the remote user resource.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Outcomes of user-store operations.
///
/// `Create`/`Update`/`Delete` carry the cache failure that aborted the
/// operation; the in-memory collection is rolled back before they are returned.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("email already exists: {0}")]
    DuplicateEmail(String),
    #[error("no user with id {0}")]
    NotFound(u64),
    #[error("failed to load users: {0}")]
    Load(#[source] RemoteError),
    #[error("failed to add user: {0}")]
    Create(#[source] CacheError),
    #[error("failed to update user: {0}")]
    Update(#[source] CacheError),
    #[error("failed to delete user: {0}")]
    Delete(#[source] CacheError),
}
