//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record rendered by list views.
//! - Own text normalization so every entry path trims the same way.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - `text` is trimmed and non-empty; it is immutable after creation.
//! - `done` only ever moves from `false` to `true`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// Stable identifier for one task inside a store.
///
/// Issued by the store from a monotonically increasing counter; never reused
/// after the task is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw numeric id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// Validation errors for task construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text was empty or whitespace-only after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// Single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    text: String,
    done: bool,
}

impl Task {
    /// Creates a pending task with trimmed text.
    ///
    /// # Errors
    /// - Returns [`TaskValidationError::EmptyText`] when `text` is blank.
    pub fn new(id: TaskId, text: &str) -> Result<Self, TaskValidationError> {
        let text = normalize_text(text).ok_or(TaskValidationError::EmptyText)?;
        Ok(Self {
            id,
            text: text.to_string(),
            done: false,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Marks this task as completed.
    ///
    /// Returns `true` when the flag actually changed.
    pub fn mark_done(&mut self) -> bool {
        let changed = !self.done;
        self.done = true;
        changed
    }
}

/// Trims input text and returns `None` when nothing is left.
pub fn normalize_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
