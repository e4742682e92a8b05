//! `PostgreSQL` lookups for tracks and categories.

use super::{
    models::{CategoryRow, TrackRow},
    pool::{DoneLogPgPool, PoolError, run_blocking},
    schema::{categories, tracks},
};
use crate::donelog::{
    domain::{Category, CategoryId, Track, TrackId},
    ports::{CategoryRepository, ReferenceLookupError, ReferenceLookupResult, TrackRepository},
};
use async_trait::async_trait;
use diesel::prelude::*;

impl From<PoolError> for ReferenceLookupError {
    fn from(err: PoolError) -> Self {
        Self::lookup(err)
    }
}

/// `PostgreSQL`-backed track lookup.
#[derive(Debug, Clone)]
pub struct PostgresTrackRepository {
    pool: DoneLogPgPool,
}

impl PostgresTrackRepository {
    /// Creates a new lookup from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DoneLogPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackRepository for PostgresTrackRepository {
    async fn find_active_by_id(&self, id: &TrackId) -> ReferenceLookupResult<Option<Track>> {
        let lookup_id = id.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = tracks::table
                .filter(tracks::id.eq(lookup_id))
                .select(TrackRow::as_select())
                .first::<TrackRow>(connection)
                .optional()
                .map_err(ReferenceLookupError::lookup)?;
            row.map(row_to_track).transpose()
        })
        .await
    }
}

/// `PostgreSQL`-backed category lookup.
#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pool: DoneLogPgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new lookup from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DoneLogPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_active_by_id(
        &self,
        id: &CategoryId,
    ) -> ReferenceLookupResult<Option<Category>> {
        let lookup_id = id.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = categories::table
                .filter(categories::id.eq(lookup_id))
                .select(CategoryRow::as_select())
                .first::<CategoryRow>(connection)
                .optional()
                .map_err(ReferenceLookupError::lookup)?;
            row.map(row_to_category).transpose()
        })
        .await
    }
}

fn row_to_track(row: TrackRow) -> ReferenceLookupResult<Track> {
    let id = TrackId::new(row.id).map_err(ReferenceLookupError::lookup)?;
    let default_category = row
        .default_category_id
        .map(CategoryId::new)
        .transpose()
        .map_err(ReferenceLookupError::lookup)?;
    Ok(Track::new(id, default_category, row.active))
}

fn row_to_category(row: CategoryRow) -> ReferenceLookupResult<Category> {
    let id = CategoryId::new(row.id).map_err(ReferenceLookupError::lookup)?;
    Ok(Category::new(id, row.active))
}
