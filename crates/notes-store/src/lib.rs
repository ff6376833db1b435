//! notes-store: Storage layer for the notes service
//!
//! This crate provides:
//! - PostgreSQL storage for notes and users
//! - Migration management
//! - Type-safe database operations via sqlx
//!
//! # Architecture
//!
//! Plain relational tables behind a connection pool. All schema
//! validation (required fields, non-empty content, username
//! uniqueness) lives in the database; the store surfaces violations as
//! variants of a closed [`StoreError`] enum that the HTTP layer
//! translates exhaustively.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let notes = store.list_notes().await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use store::{Store, StoreConfig, parse_id};
