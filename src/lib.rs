//! Done log: a record of what was done, how often, and when.
//!
//! This crate validates and persists done-log entries, each recording that an
//! activity on a track, classified by a category, happened a number of times
//! on a given date.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, clock, etc.)
//!
//! # Modules
//!
//! - [`donelog`]: Value objects, the done-log aggregate, and its commands
//! - [`config`]: Environment-backed database settings
//! - [`telemetry`]: Logging set-up for binaries

pub mod config;
pub mod donelog;
pub mod telemetry;
