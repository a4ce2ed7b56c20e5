//! Connection bootstrap for the snapshot store.
//!
//! # Invariants
//! - Returned connections have all migrations applied.
//! - Returned connections have a busy timeout configured.

use super::migrations::apply_migrations;
use super::StoreResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens the store at `path` and applies pending migrations.
///
/// # Side effects
/// - Emits `store_open` log events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StoreResult<Connection> {
    let started_at = Instant::now();
    let conn = Connection::open(path).map_err(|err| {
        log_open_failed("file", started_at, &err.to_string());
        err
    })?;
    bootstrap(conn, "file", started_at)
}

/// Opens an in-memory store and applies pending migrations.
///
/// Used by tests and by diagnostics; carries the same bootstrap
/// guarantees as [`open_store`].
pub fn open_store_in_memory() -> StoreResult<Connection> {
    let started_at = Instant::now();
    let conn = Connection::open_in_memory().map_err(|err| {
        log_open_failed("memory", started_at, &err.to_string());
        err
    })?;
    bootstrap(conn, "memory", started_at)
}

fn bootstrap(mut conn: Connection, mode: &str, started_at: Instant) -> StoreResult<Connection> {
    let result = conn
        .busy_timeout(Duration::from_secs(5))
        .map_err(Into::into)
        .and_then(|()| apply_migrations(&mut conn));

    match result {
        Ok(()) => {
            info!(
                "event=store_open module=store status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            log_open_failed(mode, started_at, &err.to_string());
            Err(err)
        }
    }
}

fn log_open_failed(mode: &str, started_at: Instant, err: &str) {
    error!(
        "event=store_open module=store status=error mode={mode} duration_ms={} error={err}",
        started_at.elapsed().as_millis()
    );
}
