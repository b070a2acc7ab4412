//! Domain model for to-do records.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and front ends.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion removes the record; there are no tombstones.

pub mod task;
