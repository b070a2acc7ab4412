//! Client-side state container for the to-do list.
//!
//! # Responsibility
//! - Own the ordered task list for one session.
//! - Expose add/delete/mark-done as total operations.
//! - Let renderers either poll snapshots or register listeners.
//!
//! # Invariants
//! - There is no global store; callers own and pass the instance.
//! - Snapshots are immutable; mutation always produces a new list.

pub mod action;
pub mod observer;
pub mod task_list;
pub mod task_store;
