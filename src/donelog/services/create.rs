//! Create command for new done-log entries.

use super::{
    context::CommandContext,
    error::{
        CommandValidationError, DoneLogCommandError, DoneLogCommandResult, require,
        require_positive,
    },
};
use crate::donelog::{
    domain::{CategoryId, Count, DoneLog, DoneLogId, OccurredOn, Title, TrackId},
    ports::{CategoryRepository, DoneLogIdGenerator, DoneLogRepository, TrackRepository},
};
use std::sync::Arc;

/// Request payload for creating a done log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDoneLogRequest {
    title: String,
    track_id: String,
    category_id: String,
    count: i32,
    occurred_on: String,
}

impl CreateDoneLogRequest {
    /// Creates a request from primitive input.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        track_id: impl Into<String>,
        category_id: impl Into<String>,
        count: i32,
        occurred_on: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            track_id: track_id.into(),
            category_id: category_id.into(),
            count,
            occurred_on: occurred_on.into(),
        }
    }

    /// Checks that every field is present and the count is positive.
    ///
    /// # Errors
    ///
    /// Returns the first [`CommandValidationError`] in field order.
    pub fn validate(&self) -> Result<(), CommandValidationError> {
        require("title", &self.title)?;
        require("track_id", &self.track_id)?;
        require("category_id", &self.category_id)?;
        require_positive(self.count)?;
        require("occurred_on", &self.occurred_on)
    }
}

/// Handler for [`CreateDoneLogRequest`].
#[derive(Clone)]
pub struct CreateDoneLogHandler<R, T, C, G>
where
    R: DoneLogRepository,
    T: TrackRepository,
    C: CategoryRepository,
    G: DoneLogIdGenerator,
{
    done_logs: Arc<R>,
    tracks: Arc<T>,
    categories: Arc<C>,
    ids: Arc<G>,
}

impl<R, T, C, G> CreateDoneLogHandler<R, T, C, G>
where
    R: DoneLogRepository,
    T: TrackRepository,
    C: CategoryRepository,
    G: DoneLogIdGenerator,
{
    /// Creates a handler over the given collaborators.
    #[must_use]
    pub const fn new(done_logs: Arc<R>, tracks: Arc<T>, categories: Arc<C>, ids: Arc<G>) -> Self {
        Self {
            done_logs,
            tracks,
            categories,
            ids,
        }
    }

    /// Validates the request, checks the track and category are active,
    /// and saves a new done log under a freshly generated identifier.
    ///
    /// Nothing is written unless every check passes; exactly one save is
    /// issued on success.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogCommandError::Validation`] or
    /// [`DoneLogCommandError::Domain`] for bad input,
    /// [`DoneLogCommandError::TrackNotActive`] or
    /// [`DoneLogCommandError::CategoryNotActive`] for a missing or inactive
    /// reference, and the collaborator error for lookup, generation or
    /// persistence failures.
    pub async fn handle(
        &self,
        ctx: &CommandContext,
        request: CreateDoneLogRequest,
    ) -> DoneLogCommandResult<DoneLogId> {
        request.validate()?;

        let title = Title::new(&request.title)?;
        let track_id = TrackId::new(request.track_id)?;
        let category_id = CategoryId::new(request.category_id)?;
        let count = Count::new(request.count)?;
        let occurred_on = OccurredOn::parse(&request.occurred_on)?;

        tracing::debug!(track_id = %track_id, "checking track");
        let track = ctx.run(self.tracks.find_active_by_id(&track_id)).await??;
        if !track.is_some_and(|found| found.is_active()) {
            tracing::warn!(track_id = %track_id, "rejected done log for inactive track");
            return Err(DoneLogCommandError::TrackNotActive(track_id));
        }

        tracing::debug!(category_id = %category_id, "checking category");
        let category = ctx
            .run(self.categories.find_active_by_id(&category_id))
            .await??;
        if !category.is_some_and(|found| found.is_active()) {
            tracing::warn!(category_id = %category_id, "rejected done log for inactive category");
            return Err(DoneLogCommandError::CategoryNotActive(category_id));
        }

        let id = ctx.run(self.ids.new_done_log_id()).await??;
        let log = DoneLog::new(id, title, track_id, category_id, count, occurred_on);

        ctx.run(self.done_logs.save(&log)).await??;
        tracing::info!(
            done_log_id = %log.id(),
            track_id = %log.track_id(),
            occurred_on = %log.occurred_on(),
            "created done log"
        );
        Ok(log.id().clone())
    }
}
