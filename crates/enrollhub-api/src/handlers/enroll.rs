//! Student enrollment and schedule handlers.
//!
//! These are the only handlers that touch the admission layer's write path;
//! everything concurrent happens inside the coordinator.

use axum::Json;
use axum::extract::{Path, State};

use enrollhub_core::error::AppError;
use enrollhub_core::types::id::StudentId;

use crate::dto::request::EnrollRequest;
use crate::dto::response::{ApiResponse, EnrollResponse, ScheduleResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/students/{id}/courses
///
/// All five outcome codes are reported with HTTP 200: a full course or a
/// duplicate attempt is expected traffic, not a protocol error.
pub async fn enroll(
    State(state): State<AppState>,
    Path(student_id): Path<StudentId>,
    Json(req): Json<EnrollRequest>,
) -> Json<ApiResponse<EnrollResponse>> {
    let outcome = state.coordinator.enroll(student_id, req.course_id).await;
    Json(ApiResponse::ok(EnrollResponse { outcome }))
}

/// GET /api/v1/students/{id}/courses
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(student_id): Path<StudentId>,
) -> Result<Json<ApiResponse<ScheduleResponse>>, ApiError> {
    if !state.coordinator.ensure_student_known(student_id).await {
        return Err(AppError::not_found(format!("Student {student_id} not found")).into());
    }

    let courses = state.coordinator.schedule(student_id).unwrap_or_default();
    Ok(Json(ApiResponse::ok(ScheduleResponse { courses })))
}
