use chrono::Utc;

use super::Database;
use crate::errors::StockroomError;
use crate::models::UserAccount;

impl Database {
    /// Inserts a new credential row. The insert is a single atomic statement:
    /// it either fully succeeds or leaves no row behind. A UNIQUE violation
    /// on the username surfaces as `DuplicateUsername`.
    pub fn register_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<i64, StockroomError> {
        let conn = self.conn.lock().unwrap();
        let result = conn.execute(
            "INSERT INTO users (username, password, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![username, password_hash, Utc::now().to_rfc3339()],
        );

        match result {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StockroomError::DuplicateUsername(username.to_string()))
            }
            Err(e) => Err(StockroomError::Database(format!("Insert failed: {}", e))),
        }
    }

    /// Exact-match lookup on (username, digest). Read-only.
    pub fn verify_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, StockroomError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT id FROM users WHERE username = ?1 AND password = ?2")
            .map_err(|e| StockroomError::Database(format!("Query failed: {}", e)))?;

        match stmt.query_row(rusqlite::params![username, password_hash], |row| {
            row.get::<_, i64>(0)
        }) {
            Ok(_) => Ok(true),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(StockroomError::Database(format!("Query error: {}", e))),
        }
    }

    pub fn get_user(&self, username: &str) -> Result<Option<UserAccount>, StockroomError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT id, username, created_at FROM users WHERE username = ?1")
            .map_err(|e| StockroomError::Database(format!("Query failed: {}", e)))?;

        match stmt.query_row(rusqlite::params![username], |row| {
            Ok(UserAccount {
                id: row.get(0)?,
                username: row.get(1)?,
                created_at: row.get(2)?,
            })
        }) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StockroomError::Database(format!("Query error: {}", e))),
        }
    }

    pub fn count_users(&self) -> Result<i64, StockroomError> {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .map_err(|e| StockroomError::Database(format!("Query error: {}", e)))
    }
}
