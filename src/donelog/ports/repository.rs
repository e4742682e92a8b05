//! Repository port for done-log persistence.

use crate::donelog::domain::{DoneLog, DoneLogId, RawDoneLog};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for done-log repository operations.
pub type DoneLogRepositoryResult<T> = Result<T, DoneLogRepositoryError>;

/// Done-log persistence contract.
#[async_trait]
pub trait DoneLogRepository: Send + Sync {
    /// Inserts the done log, or overwrites every stored field when a record
    /// with the same identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogRepositoryError::Persistence`] when the write fails.
    async fn save(&self, log: &DoneLog) -> DoneLogRepositoryResult<()>;

    /// Returns the stored primitives for a done log.
    ///
    /// Returns `None` when no record has the identifier. The snapshot is not
    /// validated; callers rehydrate it.
    async fn find_by_id(&self, id: &DoneLogId) -> DoneLogRepositoryResult<Option<RawDoneLog>>;

    /// Removes a done log. Removing an absent record succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogRepositoryError::Persistence`] when the delete fails.
    async fn delete(&self, id: &DoneLogId) -> DoneLogRepositoryResult<()>;
}

/// Errors returned by done-log repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DoneLogRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DoneLogRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
