//! In-memory track and category lookups.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::donelog::{
    domain::{Category, CategoryId, Track, TrackId},
    ports::{CategoryRepository, ReferenceLookupError, ReferenceLookupResult, TrackRepository},
};

/// Thread-safe in-memory track store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrackRepository {
    tracks: Arc<RwLock<HashMap<TrackId, Track>>>,
}

impl InMemoryTrackRepository {
    /// Creates an empty track store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a track.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceLookupError::Lookup`] when the store lock is
    /// poisoned.
    pub fn insert(&self, track: Track) -> ReferenceLookupResult<()> {
        let mut tracks = self
            .tracks
            .write()
            .map_err(|err| ReferenceLookupError::lookup(std::io::Error::other(err.to_string())))?;
        tracks.insert(track.id().clone(), track);
        Ok(())
    }
}

#[async_trait]
impl TrackRepository for InMemoryTrackRepository {
    async fn find_active_by_id(&self, id: &TrackId) -> ReferenceLookupResult<Option<Track>> {
        let tracks = self
            .tracks
            .read()
            .map_err(|err| ReferenceLookupError::lookup(std::io::Error::other(err.to_string())))?;
        Ok(tracks.get(id).cloned())
    }
}

/// Thread-safe in-memory category store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
}

impl InMemoryCategoryRepository {
    /// Creates an empty category store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a category.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceLookupError::Lookup`] when the store lock is
    /// poisoned.
    pub fn insert(&self, category: Category) -> ReferenceLookupResult<()> {
        let mut categories = self
            .categories
            .write()
            .map_err(|err| ReferenceLookupError::lookup(std::io::Error::other(err.to_string())))?;
        categories.insert(category.id().clone(), category);
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_active_by_id(
        &self,
        id: &CategoryId,
    ) -> ReferenceLookupResult<Option<Category>> {
        let categories = self
            .categories
            .read()
            .map_err(|err| ReferenceLookupError::lookup(std::io::Error::other(err.to_string())))?;
        Ok(categories.get(id).cloned())
    }
}
