//! Update command for existing done-log entries.

use super::{
    context::CommandContext,
    error::{
        CommandValidationError, DoneLogCommandError, DoneLogCommandResult, require,
        require_positive,
    },
};
use crate::donelog::{
    domain::{CategoryId, Count, DoneLog, DoneLogId, OccurredOn, Title},
    ports::{CategoryRepository, DoneLogRepository},
};
use std::sync::Arc;

/// Request payload for updating a done log.
///
/// The track of a done log is fixed at creation and cannot be changed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDoneLogRequest {
    id: String,
    title: String,
    category_id: String,
    count: i32,
    occurred_on: String,
}

impl UpdateDoneLogRequest {
    /// Creates a request from primitive input.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category_id: impl Into<String>,
        count: i32,
        occurred_on: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
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
        require("id", &self.id)?;
        require("title", &self.title)?;
        require("category_id", &self.category_id)?;
        require_positive(self.count)?;
        require("occurred_on", &self.occurred_on)
    }
}

/// Handler for [`UpdateDoneLogRequest`].
#[derive(Clone)]
pub struct UpdateDoneLogHandler<R, C>
where
    R: DoneLogRepository,
    C: CategoryRepository,
{
    done_logs: Arc<R>,
    categories: Arc<C>,
}

impl<R, C> UpdateDoneLogHandler<R, C>
where
    R: DoneLogRepository,
    C: CategoryRepository,
{
    /// Creates a handler over the given collaborators.
    #[must_use]
    pub const fn new(done_logs: Arc<R>, categories: Arc<C>) -> Self {
        Self {
            done_logs,
            categories,
        }
    }

    /// Replaces the title, category, count and date of a stored done log.
    ///
    /// The stored record is rehydrated first, so a record that no longer
    /// validates is reported as corrupt before the new category is checked.
    /// The new title and count are validated last, after the category and
    /// date. The stored track is always kept.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogCommandError::Validation`] or
    /// [`DoneLogCommandError::Domain`] for bad input,
    /// [`DoneLogCommandError::NotFound`] when no record exists,
    /// [`DoneLogCommandError::DataCorruption`] when the stored record fails
    /// validation, [`DoneLogCommandError::CategoryNotActive`] for a missing or
    /// inactive category, and the collaborator error for lookup or
    /// persistence failures.
    pub async fn handle(
        &self,
        ctx: &CommandContext,
        request: UpdateDoneLogRequest,
    ) -> DoneLogCommandResult<()> {
        request.validate()?;

        let id = DoneLogId::new(request.id)?;
        let category_id = CategoryId::new(request.category_id)?;

        let raw = ctx
            .run(self.done_logs.find_by_id(&id))
            .await??
            .ok_or_else(|| DoneLogCommandError::NotFound(id.clone()))?;
        let mut log = DoneLog::rehydrate(raw).map_err(|source| {
            tracing::warn!(done_log_id = %id, error = %source, "stored done log failed validation");
            DoneLogCommandError::DataCorruption {
                id: id.clone(),
                source,
            }
        })?;

        tracing::debug!(category_id = %category_id, "checking category");
        let category = ctx
            .run(self.categories.find_active_by_id(&category_id))
            .await??;
        if !category.is_some_and(|found| found.is_active()) {
            tracing::warn!(category_id = %category_id, "rejected update for inactive category");
            return Err(DoneLogCommandError::CategoryNotActive(category_id));
        }

        let occurred_on = OccurredOn::parse(&request.occurred_on)?;
        let title = Title::new(&request.title)?;
        let count = Count::new(request.count)?;
        log.update(title, category_id, count, occurred_on);

        ctx.run(self.done_logs.save(&log)).await??;
        tracing::info!(done_log_id = %log.id(), "updated done log");
        Ok(())
    }
}
