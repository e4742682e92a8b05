//! Identifier generation port.

use crate::donelog::domain::DoneLogId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Source of fresh done-log identifiers.
#[async_trait]
pub trait DoneLogIdGenerator: Send + Sync {
    /// Returns a new, unused done-log identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdGenerationError::Generation`] when no identifier can be
    /// produced.
    async fn new_done_log_id(&self) -> Result<DoneLogId, IdGenerationError>;
}

/// Errors returned by identifier generators.
#[derive(Debug, Clone, Error)]
pub enum IdGenerationError {
    /// The generator failed.
    #[error("identifier generation failed: {0}")]
    Generation(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdGenerationError {
    /// Wraps a generator failure.
    pub fn generation(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Generation(Arc::new(err))
    }
}
