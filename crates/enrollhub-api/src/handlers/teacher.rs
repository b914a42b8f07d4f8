//! Teacher↔course binding handlers.

use axum::Json;
use axum::extract::{Path, State};

use enrollhub_core::error::AppError;
use enrollhub_core::types::id::{CourseId, MemberId, TeacherId};
use enrollhub_core::types::member::MemberRole;

use crate::dto::response::{ApiResponse, TeacherCoursesResponse};
use crate::error::ApiError;
use crate::state::AppState;

async fn require_teacher(state: &AppState, id: TeacherId) -> Result<(), ApiError> {
    let is_teacher = state
        .member_repo
        .exists_with_role(MemberId::new(id.as_u64()), MemberRole::Teacher)
        .await?;
    if !is_teacher {
        return Err(AppError::not_found(format!("Teacher {id} not found")).into());
    }
    Ok(())
}

/// POST /api/v1/teachers/{id}/courses/{course_id}/bind
pub async fn bind_course(
    State(state): State<AppState>,
    Path((teacher_id, course_id)): Path<(TeacherId, CourseId)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    require_teacher(&state, teacher_id).await?;

    if !state.course_repo.exists_by_id(course_id).await? {
        return Err(AppError::not_found(format!("Course {course_id} not found")).into());
    }
    if !state.course_repo.bind_teacher(course_id, teacher_id).await? {
        return Err(AppError::conflict(format!("Course {course_id} is already bound")).into());
    }

    tracing::info!(%teacher_id, %course_id, "Course bound");
    Ok(Json(ApiResponse::ok(())))
}

/// DELETE /api/v1/teachers/{id}/courses/{course_id}/bind
pub async fn unbind_course(
    State(state): State<AppState>,
    Path((teacher_id, course_id)): Path<(TeacherId, CourseId)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    require_teacher(&state, teacher_id).await?;

    if !state.course_repo.exists_by_id(course_id).await? {
        return Err(AppError::not_found(format!("Course {course_id} not found")).into());
    }
    if !state.course_repo.unbind_teacher(course_id).await? {
        return Err(AppError::conflict(format!("Course {course_id} is not bound")).into());
    }

    tracing::info!(%teacher_id, %course_id, "Course unbound");
    Ok(Json(ApiResponse::ok(())))
}

/// GET /api/v1/teachers/{id}/courses
pub async fn list_courses(
    State(state): State<AppState>,
    Path(teacher_id): Path<TeacherId>,
) -> Result<Json<ApiResponse<TeacherCoursesResponse>>, ApiError> {
    require_teacher(&state, teacher_id).await?;

    let courses = state.course_repo.courses_of_teacher(teacher_id).await?;
    Ok(Json(ApiResponse::ok(TeacherCoursesResponse { courses })))
}
