//! Domain model for done-log tracking.
//!
//! Value objects validate at construction so an invalid instance cannot
//! exist. The [`DoneLog`] aggregate is assembled from them, either fresh or
//! by rehydrating untrusted stored primitives.

mod count;
mod done_log;
mod error;
mod ids;
mod occurred_on;
mod reference;
mod title;

pub use count::{Count, CountTotal};
pub use done_log::{DoneLog, RawDoneLog};
pub use error::DoneLogDomainError;
pub use ids::{CategoryId, DONE_LOG_ID_LENGTH, DoneLogId, SLUG_MAX_LENGTH, TrackId};
pub use occurred_on::{OccurredOn, Period};
pub use reference::{Category, Track};
pub use title::Title;
