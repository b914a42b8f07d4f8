//! Request DTOs.

use serde::{Deserialize, Serialize};

use enrollhub_core::types::id::CourseId;
use enrollhub_core::types::member::MemberRole;

/// Body for `POST /api/v1/members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    /// Unique login name.
    pub username: String,
    /// Display name.
    pub nickname: String,
    /// Role of the new member.
    pub role: MemberRole,
}

/// Body for `PUT /api/v1/members/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    /// New display name.
    pub nickname: String,
}

/// Body for `POST /api/v1/courses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    /// Unique course name.
    pub name: String,
    /// Total seat capacity.
    pub cap: u32,
}

/// Body for `POST /api/v1/students/{id}/courses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollRequest {
    /// The course to enroll in.
    pub course_id: CourseId,
}
