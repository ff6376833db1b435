//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - REST endpoints for note CRUD and user creation/listing
//! - Password hashing for stored users
//! - Centralized error translation into the API's JSON payload shapes
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request logging (method, path, body)
//! - Request ID generation
//! - CORS handling
//! - HTTP trace spans
//!
//! Handlers are one-to-one translations of HTTP verbs into store
//! calls; schema validation happens in the database, and every failure
//! funnels through [`error::ApiError`] for translation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{config::ServerConfig, routes, state::AppState};
//! use notes_store::{Store, StoreConfig};
//!
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let state = AppState::new(store, ServerConfig::from_env());
//! let app = routes::build_router(state);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crate
pub use notes_store;
