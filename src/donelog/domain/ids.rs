//! Identifier types for done logs and the aggregates they reference.

use super::DoneLogDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of characters in a done-log identifier.
pub const DONE_LOG_ID_LENGTH: usize = 26;

/// Returns `true` for characters of the Crockford base32 alphabet
/// (`0-9` and uppercase letters except `I`, `L`, `O` and `U`).
const fn is_crockford_char(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='H' | 'J' | 'K' | 'M' | 'N' | 'P'..='T' | 'V'..='Z')
}

/// Maximum length of a track or category slug.
pub const SLUG_MAX_LENGTH: usize = 64;

/// Returns `true` when the value matches `^[a-z][a-z0-9_-]*$` and fits in
/// [`SLUG_MAX_LENGTH`] characters.
fn is_slug(value: &str) -> bool {
    let mut chars = value.chars();
    value.len() <= SLUG_MAX_LENGTH
        && chars.next().is_some_and(|first| first.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Sortable identifier of a done-log entry.
///
/// The value is exactly 26 characters drawn from the Crockford base32
/// alphabet, the textual shape of a ULID. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DoneLogId(String);

impl DoneLogId {
    /// Creates a validated done-log identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::EmptyDoneLogId`] for an empty value or
    /// [`DoneLogDomainError::InvalidDoneLogId`] when the value is not 26
    /// Crockford base32 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, DoneLogDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(DoneLogDomainError::EmptyDoneLogId);
        }

        let is_valid =
            raw.chars().count() == DONE_LOG_ID_LENGTH && raw.chars().all(is_crockford_char);
        if !is_valid {
            return Err(DoneLogDomainError::InvalidDoneLogId(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DoneLogId {
    type Error = DoneLogDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DoneLogId> for String {
    fn from(id: DoneLogId) -> Self {
        id.0
    }
}

impl AsRef<str> for DoneLogId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DoneLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slug identifier of a track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrackId(String);

impl TrackId {
    /// Creates a validated track identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::EmptyTrackId`] for an empty value or
    /// [`DoneLogDomainError::InvalidTrackId`] when the value is not a
    /// lowercase slug of at most [`SLUG_MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, DoneLogDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(DoneLogDomainError::EmptyTrackId);
        }
        if !is_slug(&raw) {
            return Err(DoneLogDomainError::InvalidTrackId(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TrackId {
    type Error = DoneLogDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TrackId> for String {
    fn from(id: TrackId) -> Self {
        id.0
    }
}

impl AsRef<str> for TrackId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slug identifier of a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a validated category identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::EmptyCategoryId`] for an empty value or
    /// [`DoneLogDomainError::InvalidCategoryId`] when the value is not a
    /// lowercase slug of at most [`SLUG_MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, DoneLogDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(DoneLogDomainError::EmptyCategoryId);
        }
        if !is_slug(&raw) {
            return Err(DoneLogDomainError::InvalidCategoryId(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryId {
    type Error = DoneLogDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
