//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are separate from the wire DTOs in notes-server: row
//! metadata (the raw `created` timestamp, the password hash) never
//! reaches a serialized response.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
    /// Owning user's id.
    pub user_id: Uuid,
    pub created: DateTime<Utc>,
}

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
    /// Ordered list of owned note ids. Append-only.
    pub notes: Vec<Uuid>,
    pub created: DateTime<Utc>,
}

/// Input for creating a new note.
///
/// `content` is optional on purpose: required-ness is enforced by the
/// database schema, so an absent field binds SQL NULL and surfaces as a
/// validation error rather than being rejected up front.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub content: Option<String>,
    pub important: bool,
    pub user_id: Uuid,
}

impl NewNote {
    pub fn new(content: Option<String>, important: bool, user_id: Uuid) -> Self {
        Self {
            content,
            important,
            user_id,
        }
    }
}

/// Input for creating a new user.
///
/// As with [`NewNote`], the required `username` stays optional here and
/// the schema decides.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: Option<String>, name: Option<String>, password_hash: String) -> Self {
        Self {
            username,
            name,
            password_hash,
        }
    }
}
