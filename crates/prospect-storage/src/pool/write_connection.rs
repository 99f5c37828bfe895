//! The single write connection. All writes are serialized through it.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use prospect_core::errors::{ProspectResult, StorageError};

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A write connection behind a blocking mutex.
///
/// Storage calls are synchronous and short, so callers on the async runtime
/// hold the lock only for the duration of one statement batch.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path) -> ProspectResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> ProspectResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and run `f` with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> ProspectResult<T>
    where
        F: FnOnce(&Connection) -> ProspectResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| StorageError::LockPoisoned {
            details: format!("write connection: {e}"),
        })?;
        f(&guard)
    }
}
