//! Core domain logic for Taskpad, a single-screen to-do list.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::removal_gate::RemovalGate;
pub use model::task_list::{normalize_label, AddOutcome, TaskList, MAX_LABEL_CHARS};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotLoad, SnapshotRepository, SqliteSnapshotRepository,
    TASKS_SLOT_KEY,
};
pub use service::task_service::TaskService;
pub use store::{open_store, open_store_in_memory, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
