//! Snapshot listener registry.
//!
//! # Invariants
//! - Listeners run synchronously, in registration order.
//! - Subscription ids are never reused within one registry.

use crate::store::task_list::TaskList;
use std::fmt::{Display, Formatter};

/// Callback invoked with the new snapshot after every effective change.
pub type Listener = Box<dyn FnMut(&TaskList)>;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Ordered set of listeners.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener and returns its handle.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, listener));
        id
    }

    /// Removes one listener.
    ///
    /// Returns `false` when the id is unknown or was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invokes every listener with `snapshot`.
    pub fn notify(&mut self, snapshot: &TaskList) {
        for (_, listener) in &mut self.listeners {
            listener(snapshot);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
