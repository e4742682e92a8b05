//! Done-log tracking for activities grouped by track and category.
//!
//! A done log records that an activity happened a number of times on a
//! calendar date. Create, update and delete commands validate their input,
//! check the referenced track and category are active, and persist through
//! repository ports. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Command handlers in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
