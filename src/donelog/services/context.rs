//! Cancellation and deadline carrier for command handlers.

use super::error::{DoneLogCommandError, DoneLogCommandResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Per-call context threaded through every collaborator call of a handler.
///
/// A handler stops at the first collaborator call that is still pending when
/// the token is cancelled or the deadline passes.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl CommandContext {
    /// Creates a context that is never cancelled and has no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context cancelled together with `token`.
    #[must_use]
    pub const fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancellation: token,
            deadline: None,
        }
    }

    /// Sets an absolute deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets a deadline `timeout` from now.
    ///
    /// A timeout too large to represent as an instant leaves the context
    /// without a deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    /// Returns the cancellation token.
    #[must_use]
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drives `operation` unless cancellation or the deadline comes first.
    ///
    /// Cancellation is checked before the deadline, and both before the
    /// operation is polled.
    pub(crate) async fn run<F>(&self, operation: F) -> DoneLogCommandResult<F::Output>
    where
        F: Future,
    {
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancellation.cancelled() => Err(DoneLogCommandError::Cancelled),
            () = deadline => Err(DoneLogCommandError::DeadlineExceeded),
            output = operation => Ok(output),
        }
    }
}
