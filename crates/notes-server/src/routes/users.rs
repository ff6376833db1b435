//! User routes.
//!
//! - POST /api/users - Create a user (password hashed before storage)
//! - GET /api/users - List all users

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notes_store::{NewUser, UserRow};

use crate::auth;
use crate::error::ApiResult;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /api/users.
///
/// `username` required-ness is left to the store schema; the password
/// is needed up front because it is hashed before storage.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: String,
}

/// Serialized user.
///
/// Never carries password material: the hash is dropped here, not
/// filtered at serialization time.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ids of the notes this user owns, in creation order.
    pub notes: Vec<Uuid>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            name: row.name,
            notes: row.notes,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/users - Create a user.
///
/// # Response
///
/// - 201 Created: the serialized user
/// - 400 Bad Request: duplicate username, or schema validation
async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let password_hash = auth::hash_password(&request.password)?;

    let new_user = NewUser::new(request.username, request.name, password_hash);
    let user = state.store().insert_user(&new_user).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/users - List all users with their owned note ids.
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.store().list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Build user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/users", get(list_users).post(create_user))
}

// ============================================================================
// Tests
// ============================================================================
