//! Task session service.
//!
//! # Responsibility
//! - Own the in-memory task list, the removal gate and the snapshot
//!   repository for one UI session.
//! - Apply the silent-degradation persistence policy: read failures
//!   start an empty session, write failures never touch memory.
//!
//! # Invariants
//! - After startup the in-memory list is the sole source of truth; the
//!   store is only ever written, never re-read.
//! - Every successful mutation triggers a full-snapshot save.
//! - `remove` is unreachable except through a confirmed gate resolution.

use crate::model::removal_gate::RemovalGate;
use crate::model::task_list::{AddOutcome, TaskList};
use crate::repo::snapshot_repo::{SnapshotLoad, SnapshotRepository};
use log::{info, warn};

/// One UI session over the task list.
///
/// All operations are synchronous and processed one at a time; the
/// caller's event loop provides the single logical thread of execution.
pub struct TaskService<R: SnapshotRepository> {
    repo: R,
    list: TaskList,
    gate: RemovalGate,
}

impl<R: SnapshotRepository> TaskService<R> {
    /// Opens a session, performing the one startup load.
    ///
    /// A missing snapshot (first run) and a failed read both start the
    /// session with an empty list; the failure is logged, never
    /// surfaced, and never blocks startup.
    pub fn open(repo: R) -> Self {
        let list = match repo.load() {
            Ok(SnapshotLoad::Found(list)) => {
                info!(
                    "event=session_open module=service status=ok tasks={}",
                    list.len()
                );
                list
            }
            Ok(SnapshotLoad::Missing) => {
                info!("event=session_open module=service status=ok tasks=0 first_run=true");
                TaskList::new()
            }
            Err(err) => {
                warn!("event=session_open module=service status=load_failed error={err}");
                TaskList::new()
            }
        };

        Self {
            repo,
            list,
            gate: RemovalGate::Idle,
        }
    }

    /// Adds a task and persists the new snapshot.
    ///
    /// Empty and duplicate input are no-ops reported as outcomes, not
    /// errors; the list and the store are untouched for them.
    pub fn add_task(&mut self, raw: &str) -> AddOutcome {
        let outcome = self.list.add(raw);
        if outcome == AddOutcome::Added {
            self.persist();
        }
        outcome
    }

    /// Registers a remove intent for `label`, awaiting confirmation.
    ///
    /// The list is not altered here under any circumstances.
    pub fn request_removal(&mut self, label: &str) {
        self.gate.request(label);
    }

    /// Confirms the pending removal, if any.
    ///
    /// Returns whether a task was actually removed. Confirming with no
    /// pending intent, or for a label no longer present, changes
    /// nothing.
    pub fn confirm_removal(&mut self) -> bool {
        let label = match self.gate.confirm() {
            Some(label) => label,
            None => return false,
        };

        let removed = self.list.remove(&label);
        if removed {
            self.persist();
        }
        removed
    }

    /// Cancels the pending removal, if any. The list is unchanged.
    pub fn cancel_removal(&mut self) {
        self.gate.cancel();
    }

    /// Current labels in render order.
    pub fn tasks(&self) -> &[String] {
        self.list.labels()
    }

    /// Label awaiting removal confirmation, if any.
    pub fn pending_removal(&self) -> Option<&str> {
        self.gate.pending()
    }

    /// Consumes the session and hands back its repository.
    ///
    /// The in-memory list is dropped; the store keeps the last
    /// successfully saved snapshot.
    pub fn into_repo(self) -> R {
        self.repo
    }

    // Best-effort full-snapshot write: failures are logged and dropped,
    // the next successful save carries the full current state anyway.
    fn persist(&self) {
        if let Err(err) = self.repo.save(&self.list) {
            warn!(
                "event=snapshot_save module=service status=error tasks={} error={err}",
                self.list.len()
            );
        }
    }
}
