//! Sync error types.

use thiserror::Error;

use crate::models::FoodId;
use crate::store::StoreError;

/// Errors that can occur during synchronizer operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The remote store call failed and the policy did not recover it
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The requested food is not in the local collection
    #[error("Food not found: {0}")]
    NotFound(FoodId),
}
