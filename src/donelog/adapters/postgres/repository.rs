//! `PostgreSQL` repository implementation for done-log storage.

use super::{
    models::{DoneLogRow, NewDoneLogRow},
    pool::{DoneLogPgPool, PoolError, run_blocking},
    schema::done_logs,
};
use crate::donelog::{
    domain::{DoneLog, DoneLogId, OccurredOn, RawDoneLog},
    ports::{DoneLogRepository, DoneLogRepositoryError, DoneLogRepositoryResult},
};
use async_trait::async_trait;
use diesel::dsl::now;
use diesel::prelude::*;
use diesel::upsert::excluded;

/// `PostgreSQL`-backed done-log repository.
#[derive(Debug, Clone)]
pub struct PostgresDoneLogRepository {
    pool: DoneLogPgPool,
}

impl PostgresDoneLogRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DoneLogPgPool) -> Self {
        Self { pool }
    }
}

impl From<PoolError> for DoneLogRepositoryError {
    fn from(err: PoolError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl DoneLogRepository for PostgresDoneLogRepository {
    async fn save(&self, log: &DoneLog) -> DoneLogRepositoryResult<()> {
        let row = to_new_row(log);
        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(done_logs::table)
                .values(&row)
                .on_conflict(done_logs::id)
                .do_update()
                .set((
                    done_logs::title.eq(excluded(done_logs::title)),
                    done_logs::track_id.eq(excluded(done_logs::track_id)),
                    done_logs::category_id.eq(excluded(done_logs::category_id)),
                    done_logs::count.eq(excluded(done_logs::count)),
                    done_logs::occurred_on.eq(excluded(done_logs::occurred_on)),
                    done_logs::updated_at.eq(now),
                ))
                .execute(connection)
                .map_err(DoneLogRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &DoneLogId) -> DoneLogRepositoryResult<Option<RawDoneLog>> {
        let lookup_id = id.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = done_logs::table
                .filter(done_logs::id.eq(lookup_id))
                .select(DoneLogRow::as_select())
                .first::<DoneLogRow>(connection)
                .optional()
                .map_err(DoneLogRepositoryError::persistence)?;
            Ok(row.map(row_to_raw))
        })
        .await
    }

    async fn delete(&self, id: &DoneLogId) -> DoneLogRepositoryResult<()> {
        let delete_id = id.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            diesel::delete(done_logs::table.filter(done_logs::id.eq(delete_id)))
                .execute(connection)
                .map_err(DoneLogRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn to_new_row(log: &DoneLog) -> NewDoneLogRow {
    NewDoneLogRow {
        id: log.id().as_str().to_owned(),
        title: log.title().as_str().to_owned(),
        track_id: log.track_id().as_str().to_owned(),
        category_id: log.category_id().as_str().to_owned(),
        count: log.count().value(),
        occurred_on: log.occurred_on().date(),
    }
}

fn row_to_raw(row: DoneLogRow) -> RawDoneLog {
    let DoneLogRow {
        id,
        title,
        track_id,
        category_id,
        count,
        occurred_on,
    } = row;

    RawDoneLog {
        id,
        title,
        track_id,
        category_id,
        count,
        occurred_on: OccurredOn::from_date(occurred_on).start_of_day_utc(),
    }
}
