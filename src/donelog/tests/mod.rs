//! Unit tests for the done-log module.
