//! Backing-store trait consumed by the enrollment cache layer.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::course::CourseMetadata;
use crate::types::id::{CourseId, StudentId};

/// Read-only view of the relational store used to resolve entity existence
/// and seed the in-memory admission state.
///
/// The cache layer invokes each method at most once per ID for the lifetime
/// of the process (deduplicated by its single-flight loaders). Errors are
/// treated by callers as "not found": resolution fails open to absence,
/// never to presence.
#[async_trait]
pub trait EnrollmentStore: Send + Sync + 'static {
    /// Whether a member with this ID and the student role exists.
    async fn lookup_student(&self, id: StudentId) -> AppResult<bool>;

    /// Whether a course with this ID exists.
    async fn lookup_course(&self, id: CourseId) -> AppResult<bool>;

    /// Remaining seat capacity of the course as persisted.
    async fn course_capacity(&self, id: CourseId) -> AppResult<u32>;

    /// Name and owning teacher of the course.
    async fn course_metadata(&self, id: CourseId) -> AppResult<CourseMetadata>;
}
