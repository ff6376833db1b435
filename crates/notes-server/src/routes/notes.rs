//! Note CRUD routes.
//!
//! - GET /api/notes - List all notes
//! - GET /api/notes/{id} - Get a single note
//! - POST /api/notes - Create a note for an existing user
//! - PUT /api/notes/{id} - Overwrite a note's content and importance
//! - DELETE /api/notes/{id} - Delete a note

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notes_store::{NewNote, NoteRow, parse_id};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /api/notes.
///
/// `userId` carries the raw string from the client; resolution happens
/// in the handler so a missing, malformed, or unknown value all fail
/// the same way.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
    pub user_id: Option<String>,
}

/// Request body for PUT /api/notes/{id}.
///
/// Both fields are written to the store unconditionally; whatever the
/// body omitted is submitted as NULL and the schema decides.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

/// Serialized note.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
    /// Owning user's id.
    pub user: Uuid,
}

impl From<NoteRow> for NoteResponse {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            important: row.important,
            user: row.user_id,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notes - List all notes.
///
/// No filtering or pagination; notes come back in store order.
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<NoteResponse>>> {
    let notes = state.store().list_notes().await?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// GET /api/notes/{id} - Get a single note.
///
/// # Response
///
/// - 200 OK: the note
/// - 404 Not Found: empty body
/// - 400 Bad Request: malformed id
async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<NoteResponse>> {
    let id = parse_id(&id)?;
    let note = state.store().get_note(id).await?;

    Ok(Json(note.into()))
}

/// POST /api/notes - Create a note owned by an existing user.
///
/// The owner is resolved first: a missing, malformed, or unknown
/// `userId` rejects the request before anything is persisted. The note
/// insert and the owner's list append are separate statements; a
/// failure between the two leaves the note persisted but unlinked.
///
/// # Response
///
/// - 201 Created: the note
/// - 400 Bad Request: bad `userId`, or schema validation
async fn create_note(
    State(state): State<AppState>,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let store = state.store();

    let user_id = request
        .user_id
        .as_deref()
        .and_then(|raw| parse_id(raw).ok());
    let user = match user_id {
        Some(id) => store.get_user(id).await?,
        None => None,
    };
    let Some(user) = user else {
        return Err(ApiError::InvalidUserId);
    };

    let new_note = NewNote::new(request.content, request.important.unwrap_or(false), user.id);
    let note = store.insert_note(&new_note).await?;
    store.append_note(user.id, note.id).await?;

    tracing::info!(note_id = %note.id, user_id = %user.id, "Note created");

    Ok((StatusCode::CREATED, Json(note.into())))
}

/// PUT /api/notes/{id} - Overwrite content and importance.
///
/// # Response
///
/// - 200 OK: the updated note
/// - 404 Not Found: empty body
/// - 400 Bad Request: malformed id, or schema validation
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let store = state.store();

    let id = parse_id(&id)?;
    store.get_note(id).await?;

    let note = store
        .update_note(id, request.content, request.important)
        .await?;

    Ok(Json(note.into()))
}

/// DELETE /api/notes/{id} - Delete a note.
///
/// Unconditional: 204 whether or not a matching note existed. The id
/// stays in the owning user's notes list.
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.store().delete_note(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================
