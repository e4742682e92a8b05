//! Lookup ports for the tracks and categories a done log refers to.

use crate::donelog::domain::{Category, CategoryId, Track, TrackId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reference lookups.
pub type ReferenceLookupResult<T> = Result<T, ReferenceLookupError>;

/// Track lookup contract.
#[async_trait]
pub trait TrackRepository: Send + Sync {
    /// Finds a track by identifier, whether active or not.
    ///
    /// Returns `None` when the track does not exist.
    async fn find_active_by_id(&self, id: &TrackId) -> ReferenceLookupResult<Option<Track>>;
}

/// Category lookup contract.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Finds a category by identifier, whether active or not.
    ///
    /// Returns `None` when the category does not exist.
    async fn find_active_by_id(&self, id: &CategoryId)
    -> ReferenceLookupResult<Option<Category>>;
}

/// Errors returned by track and category lookups.
#[derive(Debug, Clone, Error)]
pub enum ReferenceLookupError {
    /// The lookup could not be completed.
    #[error("reference lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReferenceLookupError {
    /// Wraps a lookup failure.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
