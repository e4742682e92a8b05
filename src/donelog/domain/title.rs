//! Validated done-log title.

use super::DoneLogDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text title of a done-log entry.
///
/// Titles are trimmed, hold between 1 and [`Title::MAX_LENGTH`] Unicode
/// code points, and never contain a line break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Maximum number of characters in a title.
    pub const MAX_LENGTH: usize = 120;

    /// Creates a validated title from untrimmed input.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::EmptyTitle`] when nothing remains after
    /// trimming, [`DoneLogDomainError::TitleContainsLineBreak`] when the
    /// trimmed value spans lines, or [`DoneLogDomainError::TitleTooLong`] when
    /// it exceeds [`Title::MAX_LENGTH`] characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, DoneLogDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DoneLogDomainError::EmptyTitle);
        }
        if trimmed.contains(['\n', '\r']) {
            return Err(DoneLogDomainError::TitleContainsLineBreak);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DoneLogDomainError::TitleTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = DoneLogDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
