//! In-memory adapters for done-log ports.

mod done_log;
mod lookup;

pub use done_log::InMemoryDoneLogRepository;
pub use lookup::{InMemoryCategoryRepository, InMemoryTrackRepository};
