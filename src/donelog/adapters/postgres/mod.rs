//! `PostgreSQL` adapters for done-log persistence and reference lookups.

mod lookup;
mod models;
mod pool;
mod repository;
mod schema;

pub use lookup::{PostgresCategoryRepository, PostgresTrackRepository};
pub use pool::{DoneLogPgPool, PoolError, build_pool, ping};
pub use repository::PostgresDoneLogRepository;
