//! Error types for the storage layer.

use sqlx::error::ErrorKind;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
///
/// This is a closed enumeration: the HTTP layer matches it exhaustively
/// to decide status codes and payload shapes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Identifier does not have a valid shape.
    #[error("malformed identifier: {0}")]
    MalformedId(String),

    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(Uuid),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// Insert violated the username uniqueness constraint.
    #[error("username already taken")]
    DuplicateUsername,

    /// Schema constraint rejected the data (NOT NULL, CHECK, foreign key).
    #[error("{0}")]
    Validation(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Classify a database error from an insert/update path into a domain
    /// variant by constraint kind.
    ///
    /// The only unique constraint in the schema is `users.username`, so a
    /// unique violation always means a duplicate username. NOT NULL and
    /// CHECK violations carry the database message through as validation
    /// failures.
    pub(crate) fn classify(err: sqlx::Error) -> StoreError {
        if let sqlx::Error::Database(ref db) = err {
            match db.kind() {
                ErrorKind::UniqueViolation => return StoreError::DuplicateUsername,
                ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::ForeignKeyViolation => {
                    return StoreError::Validation(db.message().to_string());
                }
                _ => {}
            }
        }
        StoreError::Connection(err)
    }
}
