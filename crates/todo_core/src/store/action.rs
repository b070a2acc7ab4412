//! Dispatchable store operations.
//!
//! Input layers translate user gestures into [`TaskAction`] values and hand
//! them to [`crate::TaskStore::dispatch`]. The enum is serializable so a front
//! end can record a session and replay it against a fresh store.

use crate::model::task::TaskId;
use serde::{Deserialize, Serialize};

/// One store mutation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskAction {
    /// Append a new task; blank text is ignored.
    Add { text: String },
    /// Remove a task; unknown ids are ignored.
    Delete { id: TaskId },
    /// Complete a task; unknown ids are ignored.
    MarkDone { id: TaskId },
}

impl TaskAction {
    pub fn add(text: impl Into<String>) -> Self {
        Self::Add { text: text.into() }
    }

    pub fn delete(id: TaskId) -> Self {
        Self::Delete { id }
    }

    pub fn mark_done(id: TaskId) -> Self {
        Self::MarkDone { id }
    }

    /// Stable event name used in log lines.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "task_add",
            Self::Delete { .. } => "task_delete",
            Self::MarkDone { .. } => "task_mark_done",
        }
    }
}
