//! Shared world state for done-log command BDD scenarios.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use donelog::donelog::{
    adapters::{
        UlidIdGenerator,
        memory::{InMemoryCategoryRepository, InMemoryDoneLogRepository, InMemoryTrackRepository},
    },
    domain::{DoneLog, DoneLogId, RawDoneLog},
    ports::{DoneLogRepository, DoneLogRepositoryError, DoneLogRepositoryResult},
    services::{
        CreateDoneLogHandler, DeleteDoneLogHandler, DoneLogCommandError, UpdateDoneLogHandler,
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// In-memory store whose deletes can be switched to fail.
#[derive(Debug, Default)]
pub struct SwitchableDoneLogStore {
    inner: InMemoryDoneLogRepository,
    reject_deletes: AtomicBool,
}

impl SwitchableDoneLogStore {
    /// Makes every later delete fail with a persistence error.
    pub fn reject_deletes(&self) {
        self.reject_deletes.store(true, Ordering::SeqCst);
    }

    /// Number of stored records.
    pub fn record_count(&self) -> DoneLogRepositoryResult<usize> {
        self.inner.record_count()
    }
}

#[async_trait]
impl DoneLogRepository for SwitchableDoneLogStore {
    async fn save(&self, log: &DoneLog) -> DoneLogRepositoryResult<()> {
        self.inner.save(log).await
    }

    async fn find_by_id(&self, id: &DoneLogId) -> DoneLogRepositoryResult<Option<RawDoneLog>> {
        self.inner.find_by_id(id).await
    }

    async fn delete(&self, id: &DoneLogId) -> DoneLogRepositoryResult<()> {
        if self.reject_deletes.load(Ordering::SeqCst) {
            return Err(DoneLogRepositoryError::persistence(std::io::Error::other(
                "delete rejected",
            )));
        }
        self.inner.delete(id).await
    }
}

/// Create handler used by the BDD world.
pub type TestCreateHandler = CreateDoneLogHandler<
    SwitchableDoneLogStore,
    InMemoryTrackRepository,
    InMemoryCategoryRepository,
    UlidIdGenerator<DefaultClock>,
>;

/// Scenario world for done-log command behaviour tests.
pub struct DoneLogWorld {
    pub store: Arc<SwitchableDoneLogStore>,
    pub tracks: Arc<InMemoryTrackRepository>,
    pub categories: Arc<InMemoryCategoryRepository>,
    pub create: TestCreateHandler,
    pub update: UpdateDoneLogHandler<SwitchableDoneLogStore, InMemoryCategoryRepository>,
    pub delete: DeleteDoneLogHandler<SwitchableDoneLogStore>,
    pub existing_id: Option<DoneLogId>,
    pub created_id: Option<DoneLogId>,
    pub last_outcome: Option<Result<(), DoneLogCommandError>>,
}

impl DoneLogWorld {
    /// Creates a world with empty stores.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(SwitchableDoneLogStore::default());
        let tracks = Arc::new(InMemoryTrackRepository::new());
        let categories = Arc::new(InMemoryCategoryRepository::new());
        let ids = Arc::new(UlidIdGenerator::new(Arc::new(DefaultClock)));

        Self {
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
            existing_id: None,
            created_id: None,
            last_outcome: None,
        }
    }
}

impl Default for DoneLogWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DoneLogWorld {
    DoneLogWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
