//! Read-only views of the aggregates a done log refers to.

use super::{CategoryId, TrackId};

/// Track as seen by done-log commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    id: TrackId,
    default_category: Option<CategoryId>,
    active: bool,
}

impl Track {
    /// Creates a track view.
    #[must_use]
    pub const fn new(id: TrackId, default_category: Option<CategoryId>, active: bool) -> Self {
        Self {
            id,
            default_category,
            active,
        }
    }

    /// Returns the track identifier.
    #[must_use]
    pub const fn id(&self) -> &TrackId {
        &self.id
    }

    /// Returns the category suggested for new entries on this track, if any.
    #[must_use]
    pub const fn default_category(&self) -> Option<&CategoryId> {
        self.default_category.as_ref()
    }

    /// Returns `true` when the track accepts new entries.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// Category as seen by done-log commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    active: bool,
}

impl Category {
    /// Creates a category view.
    #[must_use]
    pub const fn new(id: CategoryId, active: bool) -> Self {
        Self { id, active }
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Returns `true` when the category accepts new entries.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}
