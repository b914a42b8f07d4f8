//! PostgreSQL-backed implementation of the enrollment backing store.

use async_trait::async_trait;

use enrollhub_core::error::AppError;
use enrollhub_core::result::AppResult;
use enrollhub_core::traits::store::EnrollmentStore;
use enrollhub_core::types::course::CourseMetadata;
use enrollhub_core::types::id::{CourseId, MemberId, StudentId};
use enrollhub_core::types::member::MemberRole;

use crate::repositories::course::CourseRepository;
use crate::repositories::member::MemberRepository;

/// Backing store over the member and course repositories.
///
/// The cache layer calls each method at most once per ID; no caching happens
/// here.
#[derive(Debug, Clone)]
pub struct PgEnrollmentStore {
    members: MemberRepository,
    courses: CourseRepository,
}

impl PgEnrollmentStore {
    /// Create a store over the given repositories.
    pub fn new(members: MemberRepository, courses: CourseRepository) -> Self {
        Self { members, courses }
    }
}

#[async_trait]
impl EnrollmentStore for PgEnrollmentStore {
    async fn lookup_student(&self, id: StudentId) -> AppResult<bool> {
        self.members
            .exists_with_role(MemberId::new(id.as_u64()), MemberRole::Student)
            .await
    }

    async fn lookup_course(&self, id: CourseId) -> AppResult<bool> {
        self.courses.exists_by_id(id).await
    }

    async fn course_capacity(&self, id: CourseId) -> AppResult<u32> {
        self.courses
            .remaining_capacity(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course {id} not found")))
    }

    async fn course_metadata(&self, id: CourseId) -> AppResult<CourseMetadata> {
        self.courses
            .metadata(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course {id} not found")))
    }
}
