//! Task store: owner of the current task list.
//!
//! # Responsibility
//! - Apply add/delete/mark-done to the owned list.
//! - Publish immutable snapshots to pollers and registered listeners.
//!
//! # Invariants
//! - Every effective change swaps in a fully built new list; no caller can
//!   observe a half-applied operation.
//! - Ids are issued from a counter starting at 1 and never reused.
//! - Operations on absent ids are no-ops: no revision bump, no notification.
//! - Task text never reaches log output.

use crate::model::task::{normalize_text, Task, TaskId, TaskValidationError};
use crate::store::action::TaskAction;
use crate::store::observer::{ObserverRegistry, SubscriptionId};
use crate::store::task_list::TaskList;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIRST_TASK_ID: u64 = 1;

/// Reasons `try_add` refuses input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTaskError {
    /// Text was blank after trimming.
    EmptyText,
    /// The id counter has no fresh value left.
    IdsExhausted,
}

impl Display for AddTaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be blank"),
            Self::IdsExhausted => write!(f, "no task ids left to assign"),
        }
    }
}

impl Error for AddTaskError {}

impl From<TaskValidationError> for AddTaskError {
    fn from(value: TaskValidationError) -> Self {
        match value {
            TaskValidationError::EmptyText => Self::EmptyText,
        }
    }
}

/// Explicitly owned to-do state container.
#[derive(Debug)]
pub struct TaskStore {
    list: TaskList,
    next_id: u64,
    revision: u64,
    observers: ObserverRegistry,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates a store with an empty list.
    pub fn new() -> Self {
        Self {
            list: TaskList::empty(),
            next_id: FIRST_TASK_ID,
            revision: 0,
            observers: ObserverRegistry::new(),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> TaskList {
        self.list.clone()
    }

    /// Number of effective changes applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends a task; blank text is silently ignored.
    pub fn add(&mut self, text: &str) -> TaskList {
        if let Err(err) = self.try_add(text) {
            debug!("event=task_add module=store status=ignored reason={err:?}");
        }
        self.snapshot()
    }

    /// Appends a task and returns its id.
    ///
    /// # Errors
    /// - [`AddTaskError::EmptyText`] when `text` is blank after trimming.
    /// - [`AddTaskError::IdsExhausted`] when the id counter cannot advance.
    pub fn try_add(&mut self, text: &str) -> Result<TaskId, AddTaskError> {
        let text = normalize_text(text).ok_or(AddTaskError::EmptyText)?;
        let raw_id = self.next_id;
        let next_id = raw_id.checked_add(1).ok_or(AddTaskError::IdsExhausted)?;

        let id = TaskId::new(raw_id);
        let task = Task::new(id, text)?;
        let mut tasks = Vec::with_capacity(self.list.len() + 1);
        tasks.extend(self.list.iter().cloned());
        tasks.push(task);

        self.next_id = next_id;
        self.commit(tasks, "task_add", id);
        Ok(id)
    }

    /// Removes the task with `id`; absent ids are ignored.
    pub fn delete(&mut self, id: TaskId) -> TaskList {
        if !self.list.contains(id) {
            debug!("event=task_delete module=store status=ignored reason=absent id={id}");
            return self.snapshot();
        }

        let tasks = self
            .list
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        self.commit(tasks, "task_delete", id);
        self.snapshot()
    }

    /// Marks the task with `id` as done; absent or already-done ids are ignored.
    pub fn mark_done(&mut self, id: TaskId) -> TaskList {
        match self.list.get(id) {
            None => {
                debug!("event=task_mark_done module=store status=ignored reason=absent id={id}");
                return self.snapshot();
            }
            Some(task) if task.is_done() => {
                debug!(
                    "event=task_mark_done module=store status=ignored reason=already_done id={id}"
                );
                return self.snapshot();
            }
            Some(_) => {}
        }

        let tasks = self
            .list
            .iter()
            .map(|task| {
                let mut task = task.clone();
                if task.id() == id {
                    task.mark_done();
                }
                task
            })
            .collect();
        self.commit(tasks, "task_mark_done", id);
        self.snapshot()
    }

    /// Applies one action and returns the resulting snapshot.
    pub fn dispatch(&mut self, action: TaskAction) -> TaskList {
        debug!("event=dispatch module=store action={}", action.event_name());
        match action {
            TaskAction::Add { text } => self.add(&text),
            TaskAction::Delete { id } => self.delete(id),
            TaskAction::MarkDone { id } => self.mark_done(id),
        }
    }

    /// Registers a listener called with every new snapshot.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TaskList) + 'static,
    {
        let id = self.observers.subscribe(Box::new(listener));
        debug!("event=subscribe module=store status=ok subscription={id}");
        id
    }

    /// Removes a listener; returns `false` when it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.unsubscribe(id);
        debug!("event=unsubscribe module=store subscription={id} removed={removed}");
        removed
    }

    fn commit(&mut self, tasks: Vec<Task>, event: &str, id: TaskId) {
        self.list = TaskList::from_vec(tasks);
        self.revision += 1;
        debug!(
            "event={event} module=store status=ok id={id} revision={} len={}",
            self.revision,
            self.list.len()
        );
        self.observers.notify(&self.list);
    }

    #[cfg(test)]
    fn with_next_id(next_id: u64) -> Self {
        Self {
            next_id,
            ..Self::new()
        }
    }
}
