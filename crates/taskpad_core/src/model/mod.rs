//! Domain model for the single-screen task list.
//!
//! # Responsibility
//! - Define the canonical task-list shape and its label invariants.
//! - Define the removal-confirmation state machine.
//!
//! # Invariants
//! - A task label is its own stable identifier; no surrogate IDs exist.
//! - All mutation paths go through `TaskList` so label normalization and
//!   uniqueness cannot be bypassed.

pub mod removal_gate;
pub mod task_list;
