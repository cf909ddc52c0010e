use thiserror::Error;

#[derive(Debug, Error)]
pub enum StockroomError {
    /// A required field was empty, or a selection was missing/invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No credential row matched the supplied username and password.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// UNIQUE violation on the username column, caught at the store boundary.
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// A declared operation with no working implementation.
    #[error("Not implemented: {0}")]
    Unimplemented(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
