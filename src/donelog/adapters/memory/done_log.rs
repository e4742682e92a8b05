//! In-memory repository for done-log persistence.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::donelog::{
    domain::{DoneLog, DoneLogId, RawDoneLog},
    ports::{DoneLogRepository, DoneLogRepositoryError, DoneLogRepositoryResult},
};

/// Thread-safe in-memory done-log repository.
///
/// Records are held in their primitive stored shape, keyed by identifier
/// string, so that corrupt rows can be seeded with [`Self::insert_raw`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryDoneLogRepository {
    state: Arc<RwLock<HashMap<String, RawDoneLog>>>,
}

impl InMemoryDoneLogRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a primitive record as-is, bypassing validation.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn insert_raw(&self, raw: RawDoneLog) -> DoneLogRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            DoneLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert(raw.id.clone(), raw);
        Ok(())
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn record_count(&self) -> DoneLogRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            DoneLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.len())
    }
}

#[async_trait]
impl DoneLogRepository for InMemoryDoneLogRepository {
    async fn save(&self, log: &DoneLog) -> DoneLogRepositoryResult<()> {
        self.insert_raw(log.to_raw())
    }

    async fn find_by_id(&self, id: &DoneLogId) -> DoneLogRepositoryResult<Option<RawDoneLog>> {
        let state = self.state.read().map_err(|err| {
            DoneLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(id.as_str()).cloned())
    }

    async fn delete(&self, id: &DoneLogId) -> DoneLogRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            DoneLogRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.remove(id.as_str());
        Ok(())
    }
}
