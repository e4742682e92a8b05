//! Error types for done-log value object validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing done-log domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DoneLogDomainError {
    /// The done-log identifier is empty.
    #[error("done log id must not be empty")]
    EmptyDoneLogId,

    /// The done-log identifier is not a 26-character Crockford base32 value.
    #[error("invalid done log id '{0}', expected 26 characters of [0-9A-HJKMNP-TV-Z]")]
    InvalidDoneLogId(String),

    /// The title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The title contains a line break.
    #[error("title must not contain line breaks")]
    TitleContainsLineBreak,

    /// The title exceeds the maximum number of characters.
    #[error("title must be at most {max} characters, got {length}")]
    TitleTooLong {
        /// Number of characters after trimming.
        length: usize,
        /// Maximum permitted number of characters.
        max: usize,
    },

    /// The track identifier is empty.
    #[error("track id must not be empty")]
    EmptyTrackId,

    /// The track identifier is not a lowercase slug.
    #[error("invalid track id '{0}', expected [a-z][a-z0-9_-]*")]
    InvalidTrackId(String),

    /// The category identifier is empty.
    #[error("category id must not be empty")]
    EmptyCategoryId,

    /// The category identifier is not a lowercase slug.
    #[error("invalid category id '{0}', expected [a-z][a-z0-9_-]*")]
    InvalidCategoryId(String),

    /// The count is below the permitted minimum.
    #[error("count must be >= {minimum}, got {value}")]
    CountBelowMinimum {
        /// Rejected value.
        value: i32,
        /// Smallest permitted value.
        minimum: i32,
    },

    /// A derived count is negative.
    #[error("count must be >= 0, got {0}")]
    NegativeCount(i32),

    /// Count arithmetic overflowed the storage range.
    #[error("count arithmetic overflowed")]
    CountOverflow,

    /// The date is not in strict `YYYY-MM-DD` form or is not a real date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    /// A period ends before it starts.
    #[error("period end {end} must be on or after start {start}")]
    InvalidPeriod {
        /// Period start date.
        start: NaiveDate,
        /// Period end date.
        end: NaiveDate,
    },
}
