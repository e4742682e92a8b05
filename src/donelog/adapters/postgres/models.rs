//! Diesel row models for done-log persistence.

use super::schema::{categories, done_logs, tracks};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for done-log records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = done_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DoneLogRow {
    /// Done-log identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Track slug.
    pub track_id: String,
    /// Category slug.
    pub category_id: String,
    /// Occurrence count.
    pub count: i32,
    /// Occurrence date.
    pub occurred_on: NaiveDate,
}

/// Insert and upsert model for done-log records.
///
/// `created_at` and `updated_at` take their column defaults on insert.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = done_logs)]
pub struct NewDoneLogRow {
    /// Done-log identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Track slug.
    pub track_id: String,
    /// Category slug.
    pub category_id: String,
    /// Occurrence count.
    pub count: i32,
    /// Occurrence date.
    pub occurred_on: NaiveDate,
}

/// Query result row for tracks.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tracks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TrackRow {
    /// Track slug.
    pub id: String,
    /// Default category slug, if any.
    pub default_category_id: Option<String>,
    /// Active flag.
    pub active: bool,
}

/// Query result row for categories.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    /// Category slug.
    pub id: String,
    /// Active flag.
    pub active: bool,
}
