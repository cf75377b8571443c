//! Reference data reads: the full course and school catalogs, unpaginated.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::catalog::{CourseRow, SchoolRow};
use crate::state::AppState;

/// GET /api/v1/courses
///
/// All courses ordered by name.
pub async fn handle_list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseRow>>, AppError> {
    Ok(Json(state.catalog.list_courses().await?))
}

/// GET /api/v1/schools
///
/// All schools with their region name, highest rated first.
pub async fn handle_list_schools(
    State(state): State<AppState>,
) -> Result<Json<Vec<SchoolRow>>, AppError> {
    Ok(Json(state.catalog.list_schools().await?))
}
