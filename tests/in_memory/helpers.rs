//! Shared wiring for in-memory done-log integration tests.

use std::sync::Arc;

use donelog::donelog::{
    adapters::{
        UlidIdGenerator,
        memory::{InMemoryCategoryRepository, InMemoryDoneLogRepository, InMemoryTrackRepository},
    },
    domain::{Category, CategoryId, DoneLogId, RawDoneLog, Track, TrackId},
    ports::DoneLogRepository,
    services::{CreateDoneLogHandler, DeleteDoneLogHandler, UpdateDoneLogHandler},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Create handler wired to in-memory adapters.
pub type CreateHandler = CreateDoneLogHandler<
    InMemoryDoneLogRepository,
    InMemoryTrackRepository,
    InMemoryCategoryRepository,
    UlidIdGenerator<DefaultClock>,
>;

/// Update handler wired to in-memory adapters.
pub type UpdateHandler = UpdateDoneLogHandler<InMemoryDoneLogRepository, InMemoryCategoryRepository>;

/// Delete handler wired to in-memory adapters.
pub type DeleteHandler = DeleteDoneLogHandler<InMemoryDoneLogRepository>;

/// All three handlers sharing one set of stores.
pub struct App {
    pub store: Arc<InMemoryDoneLogRepository>,
    pub tracks: Arc<InMemoryTrackRepository>,
    pub categories: Arc<InMemoryCategoryRepository>,
    pub create: CreateHandler,
    pub update: UpdateHandler,
    pub delete: DeleteHandler,
}

impl App {
    /// Adds a track with the given activity flag.
    pub fn add_track(&self, id: &str, active: bool) -> Result<(), eyre::Report> {
        self.tracks
            .insert(Track::new(TrackId::new(id)?, None, active))?;
        Ok(())
    }

    /// Adds a category with the given activity flag.
    pub fn add_category(&self, id: &str, active: bool) -> Result<(), eyre::Report> {
        self.categories
            .insert(Category::new(CategoryId::new(id)?, active))?;
        Ok(())
    }

    /// Returns the stored record for `id`.
    pub async fn stored(&self, id: &DoneLogId) -> Result<Option<RawDoneLog>, eyre::Report> {
        Ok(self.store.find_by_id(id).await?)
    }
}

/// Provides handlers over fresh stores seeded with `daily` (active track),
/// `reading` (active category) and `archived` (inactive category).
#[fixture]
pub fn app() -> App {
    let store = Arc::new(InMemoryDoneLogRepository::new());
    let tracks = Arc::new(InMemoryTrackRepository::new());
    let categories = Arc::new(InMemoryCategoryRepository::new());
    let ids = Arc::new(UlidIdGenerator::new(Arc::new(DefaultClock)));

    let app = App {
        create: CreateDoneLogHandler::new(
            Arc::clone(&store),
            Arc::clone(&tracks),
            Arc::clone(&categories),
            ids,
        ),
        update: UpdateDoneLogHandler::new(Arc::clone(&store), Arc::clone(&categories)),
        delete: DeleteDoneLogHandler::new(Arc::clone(&store)),
        store,
        tracks,
        categories,
    };
    app.add_track("daily", true).expect("seed track");
    app.add_category("reading", true).expect("seed category");
    app.add_category("writing", true).expect("seed category");
    app.add_category("archived", false).expect("seed category");
    app
}
