//! Adapter implementations for done-log ports.
//!
//! - [`memory`]: thread-safe in-memory storage for tests and local wiring
//! - [`postgres`]: `PostgreSQL` persistence using Diesel ORM
//! - [`UlidIdGenerator`]: clock-driven, time-ordered identifier source

pub mod memory;
pub mod postgres;

pub mod ids;

pub use ids::{ClockBeforeEpoch, UlidIdGenerator};
