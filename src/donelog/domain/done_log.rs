//! Done-log aggregate root and its persisted primitive shape.

use super::{CategoryId, Count, DoneLogDomainError, DoneLogId, OccurredOn, Title, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Done-log aggregate root.
///
/// Every field is a validated value object. The identifier and track are
/// fixed at construction; the remaining fields change together through
/// [`DoneLog::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoneLog {
    id: DoneLogId,
    title: Title,
    track_id: TrackId,
    category_id: CategoryId,
    count: Count,
    occurred_on: OccurredOn,
}

/// Primitive field snapshot handed back by storage.
///
/// Nothing in this shape is trusted; [`DoneLog::rehydrate`] re-validates
/// every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDoneLog {
    /// Stored identifier.
    pub id: String,
    /// Stored title.
    pub title: String,
    /// Stored track identifier.
    pub track_id: String,
    /// Stored category identifier.
    pub category_id: String,
    /// Stored count.
    pub count: i32,
    /// Stored occurrence timestamp; only its date is kept on rehydration.
    pub occurred_on: DateTime<Utc>,
}

impl DoneLog {
    /// Creates a done log from validated parts.
    #[must_use]
    pub const fn new(
        id: DoneLogId,
        title: Title,
        track_id: TrackId,
        category_id: CategoryId,
        count: Count,
        occurred_on: OccurredOn,
    ) -> Self {
        Self {
            id,
            title,
            track_id,
            category_id,
            count,
            occurred_on,
        }
    }

    /// Rebuilds a done log from stored primitives, validating every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`DoneLogDomainError`] raised while validating the
    /// fields in declaration order.
    pub fn rehydrate(raw: RawDoneLog) -> Result<Self, DoneLogDomainError> {
        let RawDoneLog {
            id,
            title,
            track_id,
            category_id,
            count,
            occurred_on,
        } = raw;

        Ok(Self::new(
            DoneLogId::new(id)?,
            Title::new(title)?,
            TrackId::new(track_id)?,
            CategoryId::new(category_id)?,
            Count::new(count)?,
            OccurredOn::from_timestamp(&occurred_on),
        ))
    }

    /// Flattens the aggregate into its stored primitive shape.
    #[must_use]
    pub fn to_raw(&self) -> RawDoneLog {
        RawDoneLog {
            id: self.id.as_str().to_owned(),
            title: self.title.as_str().to_owned(),
            track_id: self.track_id.as_str().to_owned(),
            category_id: self.category_id.as_str().to_owned(),
            count: self.count.value(),
            occurred_on: self.occurred_on.start_of_day_utc(),
        }
    }

    /// Replaces the mutable fields in one step.
    ///
    /// The identifier and track are left untouched. The change is in memory
    /// only until the aggregate is saved.
    pub fn update(
        &mut self,
        title: Title,
        category_id: CategoryId,
        count: Count,
        occurred_on: OccurredOn,
    ) {
        self.title = title;
        self.category_id = category_id;
        self.count = count;
        self.occurred_on = occurred_on;
    }

    /// Returns the done-log identifier.
    #[must_use]
    pub const fn id(&self) -> &DoneLogId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the track identifier.
    #[must_use]
    pub const fn track_id(&self) -> &TrackId {
        &self.track_id
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    /// Returns the count.
    #[must_use]
    pub const fn count(&self) -> Count {
        self.count
    }

    /// Returns the occurrence date.
    #[must_use]
    pub const fn occurred_on(&self) -> OccurredOn {
        self.occurred_on
    }
}
