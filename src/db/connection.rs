use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::errors::StockroomError;

/// One process-lifetime connection behind a mutex. Every statement runs in
/// autocommit mode; no transaction is ever held across command handlers.
pub struct Database {
    pub(crate) conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn new(path: &Path) -> Result<Self, StockroomError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)
            .map_err(|e| StockroomError::Database(format!("Failed to open database: {}", e)))?;

        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|e| StockroomError::Database(format!("Failed to set pragmas: {}", e)))?;

        tracing::debug!(path = %path.display(), "opened inventory database");

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.ensure_schema()?;
        Ok(db)
    }

    pub fn in_memory() -> Result<Self, StockroomError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StockroomError::Database(format!("Failed to open in-memory db: {}", e)))?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Creates the `users` and `products` tables if absent. Runs on every
    /// open; idempotent.
    pub fn ensure_schema(&self) -> Result<(), StockroomError> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(super::schema::CREATE_TABLES)
            .map_err(|e| StockroomError::Database(format!("Failed to create tables: {}", e)))?;
        Ok(())
    }

    /// Platform default location for the database file, e.g.
    /// `~/.local/share/stockroom/stockroom.db` on Linux.
    pub fn default_path() -> Result<PathBuf, StockroomError> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            StockroomError::Internal("Cannot determine the platform data directory".into())
        })?;
        Ok(data_dir.join("stockroom").join("stockroom.db"))
    }
}
