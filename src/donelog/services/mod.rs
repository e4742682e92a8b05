//! Command handlers for creating, updating and deleting done logs.

mod context;
mod create;
mod delete;
mod error;
mod update;

pub use context::CommandContext;
pub use create::{CreateDoneLogHandler, CreateDoneLogRequest};
pub use delete::{DeleteDoneLogHandler, DeleteDoneLogRequest};
pub use error::{CommandValidationError, DoneLogCommandError, DoneLogCommandResult};
pub use update::{UpdateDoneLogHandler, UpdateDoneLogRequest};
