//! Axum route handlers for the roadmap API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::auth::{bearer_token, AuthUser};
use crate::errors::{AppError, RoadmapError};
use crate::models::mentorship::MentorshipRequestRow;
use crate::render::render_roadmap;
use crate::roadmap::generator::{authenticate, generate_roadmap};
use crate::roadmap::models::{GenerateRoadmapRequest, RoadmapResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SavedRoadmap {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub status: String,
    /// The stored roadmap JSON, or the raw message if it is not JSON.
    pub roadmap: Value,
}

impl From<MentorshipRequestRow> for SavedRoadmap {
    fn from(row: MentorshipRequestRow) -> Self {
        let roadmap =
            serde_json::from_str(&row.message).unwrap_or(Value::String(row.message));
        Self {
            id: row.id,
            created_at: row.created_at,
            status: row.status,
            roadmap,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /functions/v1/generate-career-roadmap
///
/// Auth is checked before the body is looked at; an unauthenticated caller
/// triggers no catalog read and no model call.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<GenerateRoadmapRequest>, JsonRejection>,
) -> Result<Json<Value>, RoadmapError> {
    let user = authenticate(state.auth.as_ref(), bearer_token(&headers)).await?;

    let Json(request) = body.map_err(|e| RoadmapError::InvalidRequest(e.body_text()))?;

    let generation = generate_roadmap(&state, &user, &request).await?;
    Ok(Json(generation.into_value()))
}

/// OPTIONS /functions/v1/generate-career-roadmap
///
/// Empty 200; the CORS layer adds the headers.
pub async fn handle_preflight() {}

/// GET /api/v1/roadmaps
pub async fn handle_list_roadmaps(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<SavedRoadmap>>, AppError> {
    let user = require_user(&state, &headers).await?;
    let rows = state.archive.list_roadmaps(user.id).await?;
    Ok(Json(rows.into_iter().map(SavedRoadmap::from).collect()))
}

/// GET /api/v1/roadmaps/:id/markdown
///
/// A saved roadmap rendered as a markdown document.
pub async fn handle_roadmap_markdown(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = require_user(&state, &headers).await?;
    let row = state
        .archive
        .find_roadmap(user.id, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {id} not found")))?;

    let saved = SavedRoadmap::from(row);
    let view = render_roadmap(&RoadmapResult::from_value_lossy(&saved.roadmap));

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        view.to_markdown(),
    ))
}

async fn require_user(state: &AppState, headers: &HeaderMap) -> Result<AuthUser, AppError> {
    let token = bearer_token(headers).ok_or(AppError::Unauthorized)?;
    state.auth.resolve(token).await?.ok_or(AppError::Unauthorized)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
