//! Port contracts for done-log commands.
//!
//! Ports define infrastructure-agnostic interfaces used by the command
//! handlers. Lookups return `Ok(None)` for an absent record so that absence
//! stays distinct from a failed lookup.

pub mod id_generator;
pub mod lookup;
pub mod repository;

pub use id_generator::{DoneLogIdGenerator, IdGenerationError};
pub use lookup::{CategoryRepository, ReferenceLookupError, ReferenceLookupResult, TrackRepository};
pub use repository::{DoneLogRepository, DoneLogRepositoryError, DoneLogRepositoryResult};
