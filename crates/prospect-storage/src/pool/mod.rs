//! Connection pool managing read/write connections.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// The single write connection and, for file-backed databases, a pool of
/// read connections.
///
/// In-memory databases have no read pool: every in-memory connection is its
/// own database, so reads go through the writer.
pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    pub fn file_backed(writer: WriteConnection, readers: ReadPool, path: &Path) -> Self {
        Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        }
    }

    pub fn in_memory(writer: WriteConnection) -> Self {
        Self {
            writer,
            readers: None,
            db_path: None,
        }
    }
}
