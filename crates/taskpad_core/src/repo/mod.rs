//! Persistence adapters for the task snapshot.
//!
//! # Responsibility
//! - Define the snapshot load/save contract used by the session service.
//! - Keep SQL and wire-format details out of business orchestration.
//!
//! # Invariants
//! - Saves always write the entire current list, never a delta.
//! - Load distinguishes a missing snapshot from an empty one.

pub mod snapshot_repo;
