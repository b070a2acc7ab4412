//! Immutable task list snapshots.
//!
//! # Invariants
//! - Insertion order is preserved.
//! - All task ids inside one snapshot are unique.
//! - A snapshot never changes once built; the store swaps in a new one.

use crate::model::task::{Task, TaskId};
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Read-only, cheaply clonable view of the store contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Arc<[Task]>,
}

impl TaskList {
    /// Creates an empty snapshot.
    pub fn empty() -> Self {
        Self {
            tasks: Arc::from(Vec::new()),
        }
    }

    /// Builds a snapshot from an already-validated task vector.
    ///
    /// Crate-internal: callers outside the store cannot bypass id issuance.
    pub(crate) fn from_vec(tasks: Vec<Task>) -> Self {
        debug_assert!(ids_are_unique(&tasks), "task ids must be unique");
        Self {
            tasks: Arc::from(tasks),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(Task::id).collect()
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_done()).count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.done_count()
    }

    /// Returns whether two snapshots share the same backing allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tasks, &other.tasks)
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for TaskList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tasks.iter())
    }
}

fn ids_are_unique(tasks: &[Task]) -> bool {
    let mut seen = std::collections::HashSet::with_capacity(tasks.len());
    tasks.iter().all(|task| seen.insert(task.id()))
}
