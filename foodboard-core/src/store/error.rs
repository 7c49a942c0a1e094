//! Remote store error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by a [`FoodStore`](super::FoodStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection, body or decoding failure
    #[error("request to remote store failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The store answered with a non-success status
    #[error("remote store returned {status} for {method} {url}")]
    Status {
        method: &'static str,
        url: String,
        status: StatusCode,
    },
}

impl StoreError {
    /// HTTP status of the failed call, when the store answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            StoreError::Transport(e) => e.status(),
            StoreError::Status { status, .. } => Some(*status),
        }
    }
}
