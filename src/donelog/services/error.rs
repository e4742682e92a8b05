//! Error taxonomy shared by the done-log command handlers.

use crate::donelog::{
    domain::{CategoryId, DoneLogDomainError, DoneLogId, TrackId},
    ports::{DoneLogRepositoryError, IdGenerationError, ReferenceLookupError},
};
use thiserror::Error;

/// Shape errors raised before any value object is built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandValidationError {
    /// A required string field is empty.
    #[error("{field} is required")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },

    /// The count is zero or negative.
    #[error("count must be > 0, got {0}")]
    NonPositiveCount(i32),
}

/// Errors returned by done-log command handlers.
#[derive(Debug, Error)]
pub enum DoneLogCommandError {
    /// The command is missing a field or has a non-positive count.
    #[error("invalid command: {0}")]
    Validation(#[from] CommandValidationError),

    /// An input field failed value object validation.
    #[error(transparent)]
    Domain(#[from] DoneLogDomainError),

    /// A track or category lookup failed.
    #[error(transparent)]
    Lookup(#[from] ReferenceLookupError),

    /// The referenced track is missing or inactive.
    #[error("track {0} is not active")]
    TrackNotActive(TrackId),

    /// The referenced category is missing or inactive.
    #[error("category {0} is not active")]
    CategoryNotActive(CategoryId),

    /// No done log exists with the identifier.
    #[error("done log {0} not found")]
    NotFound(DoneLogId),

    /// A stored done log no longer passes validation.
    #[error("stored done log {id} is corrupt: {source}")]
    DataCorruption {
        /// Identifier used for the lookup.
        id: DoneLogId,
        /// Validation failure raised during rehydration.
        #[source]
        source: DoneLogDomainError,
    },

    /// No identifier could be generated.
    #[error(transparent)]
    Generation(#[from] IdGenerationError),

    /// The done-log repository failed.
    #[error(transparent)]
    Repository(#[from] DoneLogRepositoryError),

    /// The caller cancelled the command.
    #[error("command cancelled")]
    Cancelled,

    /// The command ran past its deadline.
    #[error("command deadline exceeded")]
    DeadlineExceeded,
}

/// Result type for done-log command handlers.
pub type DoneLogCommandResult<T> = Result<T, DoneLogCommandError>;

/// Returns an error naming `field` when `value` is empty.
pub(super) const fn require(
    field: &'static str,
    value: &str,
) -> Result<(), CommandValidationError> {
    if value.is_empty() {
        return Err(CommandValidationError::MissingField { field });
    }
    Ok(())
}

/// Returns an error when `count` is not positive.
pub(super) const fn require_positive(count: i32) -> Result<(), CommandValidationError> {
    if count <= 0 {
        return Err(CommandValidationError::NonPositiveCount(count));
    }
    Ok(())
}
