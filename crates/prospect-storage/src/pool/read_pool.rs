//! Round-robin pool of read-only connections. WAL keeps readers off the
//! writer's lock.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use prospect_core::errors::{ProspectResult, StorageError};

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// Upper bound on read connections.
pub const MAX_POOL_SIZE: usize = 8;

pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl ReadPool {
    /// Open `pool_size` read-only connections (clamped to 1..=8). The database
    /// must already exist.
    pub fn open(path: &Path, pool_size: usize) -> ProspectResult<Self> {
        let size = pool_size.clamp(1, MAX_POOL_SIZE);
        let connections = (0..size)
            .map(|_| -> ProspectResult<Mutex<Connection>> {
                let conn = Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .map_err(|e| to_storage_err(e.to_string()))?;
                apply_read_pragmas(&conn)?;
                Ok(Mutex::new(conn))
            })
            .collect::<ProspectResult<Vec<_>>>()?;
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    /// Run `f` on the next connection in rotation.
    pub fn with_conn<F, T>(&self, f: F) -> ProspectResult<T>
    where
        F: FnOnce(&Connection) -> ProspectResult<T>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx]
            .lock()
            .map_err(|e| StorageError::LockPoisoned {
                details: format!("read connection {idx}: {e}"),
            })?;
        f(&guard)
    }

    pub fn size(&self) -> usize {
        self.connections.len()
    }
}
