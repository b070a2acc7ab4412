//! Core domain logic for the to-do list.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{
    default_log_level, init_logging, logging_status, normalize_level, LoggingError,
};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use store::action::TaskAction;
pub use store::observer::SubscriptionId;
pub use store::task_list::TaskList;
pub use store::task_store::{AddTaskError, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
