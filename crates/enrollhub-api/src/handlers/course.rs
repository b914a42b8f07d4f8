//! Course management handlers.

use axum::Json;
use axum::extract::{Path, State};

use enrollhub_core::error::AppError;
use enrollhub_core::types::course::Course;
use enrollhub_core::types::id::CourseId;

use crate::dto::request::CreateCourseRequest;
use crate::dto::response::{ApiResponse, CourseResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/courses
pub async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<Json<ApiResponse<Course>>, ApiError> {
    if req.name.is_empty() || req.name.len() > 255 {
        return Err(AppError::validation("Course name must be 1-255 characters").into());
    }
    // The capacity column is a signed 32-bit integer.
    if req.cap > i32::MAX as u32 {
        return Err(AppError::validation(format!("Capacity must be at most {}", i32::MAX)).into());
    }

    let course = state.course_repo.create(&req.name, req.cap).await?;

    tracing::info!(course_id = %course.course_id, cap = course.cap, "Course created");
    Ok(Json(ApiResponse::ok(course)))
}

/// GET /api/v1/courses/{id}
///
/// Serves the cached metadata plus the live remaining-seat count from the
/// admission layer, resolving the course on first access.
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<CourseId>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    if !state.coordinator.ensure_course_known(id).await {
        return Err(AppError::not_found(format!("Course {id} not found")).into());
    }

    // Both are present once resolution succeeded; entries are never evicted.
    let meta = state
        .coordinator
        .courses()
        .metadata(id)
        .ok_or_else(|| AppError::internal("Resolved course missing metadata"))?;
    let remaining = state
        .coordinator
        .remaining_seats(id)
        .ok_or_else(|| AppError::internal("Resolved course missing seat state"))?;

    Ok(Json(ApiResponse::ok(CourseResponse {
        course_id: meta.course_id,
        name: meta.name,
        teacher_id: meta.teacher_id,
        remaining,
    })))
}
