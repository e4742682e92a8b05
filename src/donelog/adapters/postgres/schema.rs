//! Diesel schema for done-log persistence.

diesel::table! {
    /// Done-log entries.
    done_logs (id) {
        /// ULID-shaped identifier.
        #[max_length = 26]
        id -> Varchar,
        /// Trimmed single-line title.
        #[max_length = 120]
        title -> Varchar,
        /// Owning track slug.
        #[max_length = 64]
        track_id -> Varchar,
        /// Category slug.
        #[max_length = 64]
        category_id -> Varchar,
        /// Number of occurrences.
        count -> Int4,
        /// Calendar date of the activity.
        occurred_on -> Date,
        /// Insertion timestamp.
        created_at -> Timestamptz,
        /// Last upsert timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tracks that done logs belong to.
    tracks (id) {
        /// Track slug.
        #[max_length = 64]
        id -> Varchar,
        /// Category suggested for new entries.
        #[max_length = 64]
        default_category_id -> Nullable<Varchar>,
        /// Whether the track accepts new entries.
        active -> Bool,
    }
}

diesel::table! {
    /// Categories that classify done logs.
    categories (id) {
        /// Category slug.
        #[max_length = 64]
        id -> Varchar,
        /// Whether the category accepts new entries.
        active -> Bool,
    }
}
