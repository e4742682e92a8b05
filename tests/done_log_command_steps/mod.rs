//! Step definitions for done-log command scenarios.

pub mod given;
pub mod then;
pub mod world;
