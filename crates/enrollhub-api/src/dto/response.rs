//! Response DTOs.

use serde::{Deserialize, Serialize};

use enrollhub_core::types::course::CourseMetadata;
use enrollhub_core::types::enrollment::EnrollOutcome;
use enrollhub_core::types::id::{CourseId, TeacherId};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Course detail: cached metadata plus the live seat count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    /// Course ID.
    pub course_id: CourseId,
    /// Course name.
    pub name: String,
    /// Owning teacher, if bound.
    pub teacher_id: Option<TeacherId>,
    /// Seats still available in the admission layer.
    pub remaining: u32,
}

/// Enrollment attempt response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollResponse {
    /// Outcome code of the attempt.
    pub outcome: EnrollOutcome,
}

/// A student's schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Courses the student has chosen.
    pub courses: Vec<CourseMetadata>,
}

/// A teacher's bound courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherCoursesResponse {
    /// Courses bound to the teacher.
    pub courses: Vec<CourseMetadata>,
}
