//! Delete command for done-log entries.

use super::{
    context::CommandContext,
    error::{CommandValidationError, DoneLogCommandResult, require},
};
use crate::donelog::{domain::DoneLogId, ports::DoneLogRepository};
use std::sync::Arc;

/// Request payload for deleting a done log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDoneLogRequest {
    id: String,
}

impl DeleteDoneLogRequest {
    /// Creates a request for the given identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Checks that the identifier is present.
    ///
    /// # Errors
    ///
    /// Returns [`CommandValidationError::MissingField`] for an empty
    /// identifier.
    pub fn validate(&self) -> Result<(), CommandValidationError> {
        require("id", &self.id)
    }
}

/// Handler for [`DeleteDoneLogRequest`].
#[derive(Clone)]
pub struct DeleteDoneLogHandler<R>
where
    R: DoneLogRepository,
{
    done_logs: Arc<R>,
}

impl<R> DeleteDoneLogHandler<R>
where
    R: DoneLogRepository,
{
    /// Creates a handler over the given repository.
    #[must_use]
    pub const fn new(done_logs: Arc<R>) -> Self {
        Self { done_logs }
    }

    /// Deletes the done log. Deleting an absent record succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`super::DoneLogCommandError::Validation`] or
    /// [`super::DoneLogCommandError::Domain`] for a bad identifier and the
    /// repository error unchanged when the delete fails.
    pub async fn handle(
        &self,
        ctx: &CommandContext,
        request: DeleteDoneLogRequest,
    ) -> DoneLogCommandResult<()> {
        request.validate()?;
        let id = DoneLogId::new(request.id)?;

        ctx.run(self.done_logs.delete(&id)).await??;
        tracing::info!(done_log_id = %id, "deleted done log");
        Ok(())
    }
}
