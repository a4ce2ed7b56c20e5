//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task-list session to Dart via FRB.
//! - Keep error semantics simple for the UI: rejected input is a
//!   non-error outcome, only session-level failures set `ok=false`.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One task session exists per process; task calls are serialized on
//!   it, matching the single-threaded UI event model.
//! - Task calls are async on the Dart side, so the startup load and
//!   every post-mutation save run off the UI thread.

use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use taskpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, open_store,
    ping as ping_inner, AddOutcome, SqliteSnapshotRepository, TaskService,
};

const SESSION_DB_FILE_NAME: &str = "taskpad.sqlite3";
static SESSION_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static SESSION: OnceLock<Mutex<Option<TaskService<SqliteSnapshotRepository>>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path for rolling log files.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; conflicting
///   reconfiguration returns an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task-list state envelope returned by every task call.
///
/// `ok=false` only for session-level failures (store open, lock); the
/// list silently ignores empty and duplicate additions by design, and
/// those still return `ok=true` with a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    /// Whether the session processed the call.
    pub ok: bool,
    /// Current task labels in render order.
    pub tasks: Vec<String>,
    /// Label awaiting removal confirmation, if any (drives the dialog).
    pub pending_removal: Option<String>,
    /// Human-readable outcome message for diagnostics/UI.
    pub message: String,
}

impl TaskListResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            tasks: Vec::new(),
            pending_removal: None,
            message: message.into(),
        }
    }
}

/// Returns the current task list for rendering.
///
/// The first task call in a process opens the session and performs the
/// one startup load from the snapshot store.
pub fn task_list() -> TaskListResponse {
    with_session(|session| snapshot_response(session, "Task list."))
}

/// Adds a task from the input field.
///
/// Trims and caps the label; empty and duplicate input are silently
/// ignored (the UI clears the field and dismisses the keyboard either
/// way). Persists the full snapshot on success, best-effort.
pub fn task_add(label: String) -> TaskListResponse {
    with_session(|session| {
        let message = match session.add_task(&label) {
            AddOutcome::Added => "Task added.",
            AddOutcome::EmptyLabel => "Empty task ignored.",
            AddOutcome::Duplicate => "Duplicate task ignored.",
        };
        snapshot_response(session, message)
    })
}

/// Registers a remove intent; the UI shows the confirmation dialog.
///
/// The list is never altered by this call.
pub fn task_request_remove(label: String) -> TaskListResponse {
    with_session(|session| {
        session.request_removal(&label);
        snapshot_response(session, "Removal pending confirmation.")
    })
}

/// Resolves the confirmation dialog with Ok.
pub fn task_confirm_remove() -> TaskListResponse {
    with_session(|session| {
        let message = if session.confirm_removal() {
            "Task removed."
        } else {
            "Nothing to remove."
        };
        snapshot_response(session, message)
    })
}

/// Resolves the confirmation dialog with Cancel. The list is unchanged.
pub fn task_cancel_remove() -> TaskListResponse {
    with_session(|session| {
        session.cancel_removal();
        snapshot_response(session, "Removal cancelled.")
    })
}

fn snapshot_response(
    session: &TaskService<SqliteSnapshotRepository>,
    message: &str,
) -> TaskListResponse {
    TaskListResponse {
        ok: true,
        tasks: session.tasks().to_vec(),
        pending_removal: session.pending_removal().map(str::to_owned),
        message: message.to_string(),
    }
}

fn with_session(
    f: impl FnOnce(&mut TaskService<SqliteSnapshotRepository>) -> TaskListResponse,
) -> TaskListResponse {
    let cell = SESSION.get_or_init(|| Mutex::new(None));
    let mut guard = match cell.lock() {
        Ok(guard) => guard,
        Err(_) => {
            warn!("event=task_session module=ffi status=error error=lock_poisoned");
            return TaskListResponse::failure("task session lock poisoned");
        }
    };

    if guard.is_none() {
        let conn = match open_store(resolve_session_db_path()) {
            Ok(conn) => conn,
            Err(err) => {
                warn!("event=task_session module=ffi status=error error={err}");
                return TaskListResponse::failure(format!("store open failed: {err}"));
            }
        };
        *guard = Some(TaskService::open(SqliteSnapshotRepository::new(conn)));
    }

    match guard.as_mut() {
        Some(session) => f(session),
        None => TaskListResponse::failure("task session unavailable"),
    }
}

fn resolve_session_db_path() -> PathBuf {
    SESSION_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("TASKPAD_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(SESSION_DB_FILE_NAME)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, task_add, task_cancel_remove, task_confirm_remove,
        task_list, task_request_remove,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_label(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        format!("{prefix}-{}-{nanos}", std::process::id())
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn task_add_appends_and_silently_ignores_duplicates() {
        let label = unique_label("add");

        let first = task_add(label.clone());
        assert!(first.ok, "{}", first.message);
        assert!(first.tasks.contains(&label));

        let second = task_add(label.clone());
        assert!(second.ok, "{}", second.message);
        let occurrences = second.tasks.iter().filter(|task| **task == label).count();
        assert_eq!(occurrences, 1);

        let listed = task_list();
        assert!(listed.ok);
        assert!(listed.tasks.contains(&label));
    }

    #[test]
    fn task_add_ignores_whitespace_input() {
        let response = task_add("   ".to_string());
        assert!(response.ok, "{}", response.message);
        assert!(response.tasks.iter().all(|task| !task.trim().is_empty()));
    }

    // The removal gate is process-global session state, so the whole
    // dialog flow lives in one test to avoid interleaving.
    #[test]
    fn removal_flow_confirms_and_cancels() {
        let keep = unique_label("keep");
        let doomed = unique_label("doomed");
        task_add(keep.clone());
        task_add(doomed.clone());

        let pending = task_request_remove(doomed.clone());
        assert!(pending.ok, "{}", pending.message);
        assert_eq!(pending.pending_removal.as_deref(), Some(doomed.as_str()));
        assert!(pending.tasks.contains(&doomed));

        let confirmed = task_confirm_remove();
        assert!(confirmed.ok);
        assert!(!confirmed.tasks.contains(&doomed));
        assert_eq!(confirmed.pending_removal, None);

        let cancelled = {
            task_request_remove(keep.clone());
            task_cancel_remove()
        };
        assert!(cancelled.ok);
        assert!(cancelled.tasks.contains(&keep));
        assert_eq!(cancelled.pending_removal, None);
    }
}
