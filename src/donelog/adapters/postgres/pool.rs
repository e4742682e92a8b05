//! Connection pool construction and blocking-call plumbing.

use crate::config::DatabaseConfig;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, Pool};
use thiserror::Error;

/// `PostgreSQL` connection pool type used by done-log adapters.
pub type DoneLogPgPool = Pool<ConnectionManager<PgConnection>>;

/// Errors raised while building, checking out from, or pinging the pool.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The pool could not be built or a connection could not be checked out.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::PoolError),

    /// A blocking database task panicked or was cancelled.
    #[error("blocking database task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The database rejected a query.
    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),
}

/// Builds a connection pool sized and timed from `config`.
///
/// Building blocks until the pool's initial connections are established.
///
/// # Errors
///
/// Returns [`PoolError::Pool`] when the pool cannot connect within the
/// configured timeout.
pub fn build_pool(config: &DatabaseConfig) -> Result<DoneLogPgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url());
    let pool = Pool::builder()
        .max_size(config.max_connections())
        .connection_timeout(config.connect_timeout())
        .build(manager)?;
    Ok(pool)
}

/// Runs `SELECT 1` on a pooled connection.
///
/// # Errors
///
/// Returns [`PoolError`] when no connection is available or the query fails.
pub async fn ping(pool: &DoneLogPgPool) -> Result<(), PoolError> {
    run_blocking(pool, |connection| {
        diesel::sql_query("SELECT 1").execute(connection)?;
        Ok(())
    })
    .await
}

/// Runs `f` with a pooled connection on the blocking thread pool.
pub(super) async fn run_blocking<F, T, E>(pool: &DoneLogPgPool, f: F) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<PoolError> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(|err| E::from(PoolError::Pool(err)))?;
        f(&mut connection)
    })
    .await
    .map_err(|err| E::from(PoolError::Join(err)))?
}
