//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load the persisted task snapshot once per session start.
//! - Replace the slot value wholesale on every save.
//!
//! # Invariants
//! - The wire format is a flat JSON array of strings under the fixed
//!   slot key `tasks`; no schema version, no migration path.
//! - A stored value that fails to parse as a string array is reported as
//!   missing, never as an error ("first run" semantics win over data
//!   archaeology).

use crate::model::task_list::TaskList;
use crate::store::StoreError;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot key holding the task snapshot.
pub const TASKS_SLOT_KEY: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence-layer failure for snapshot operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    /// Snapshot could not be serialized for writing.
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "snapshot encoding failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(StoreError::Sqlite(value))
    }
}

/// Tagged load outcome: "first run" is explicit, not inferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotLoad {
    /// A snapshot was present and parsed.
    Found(TaskList),
    /// No snapshot stored yet (or the stored value was unusable).
    Missing,
}

/// Load/save contract for the persisted task snapshot.
pub trait SnapshotRepository {
    fn load(&self) -> RepoResult<SnapshotLoad>;
    fn save(&self, list: &TaskList) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over the `slots` table.
///
/// Owns its connection: the repository lives for the whole UI session
/// and is the only reader/writer of the slot after startup.
pub struct SqliteSnapshotRepository {
    conn: Connection,
}

impl SqliteSnapshotRepository {
    /// Wraps a bootstrapped store connection (see `store::open_store`).
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository {
    fn load(&self) -> RepoResult<SnapshotLoad> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [TASKS_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let text = match stored {
            Some(text) => text,
            None => return Ok(SnapshotLoad::Missing),
        };

        match serde_json::from_str::<Vec<String>>(&text) {
            Ok(labels) => Ok(SnapshotLoad::Found(TaskList::from_labels(labels))),
            Err(err) => {
                warn!(
                    "event=snapshot_load module=repo status=unparseable key={TASKS_SLOT_KEY} error={err}"
                );
                Ok(SnapshotLoad::Missing)
            }
        }
    }

    fn save(&self, list: &TaskList) -> RepoResult<()> {
        let encoded = serde_json::to_string(list).map_err(RepoError::Encode)?;

        self.conn.execute(
            "INSERT INTO slots (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![TASKS_SLOT_KEY, encoded],
        )?;

        Ok(())
    }
}
