//! Course entity and metadata types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CourseId, TeacherId};

/// A course row as stored in the backing database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Course {
    /// Primary key.
    pub course_id: CourseId,
    /// Unique course name.
    pub name: String,
    /// Declared total seat capacity.
    pub cap: i32,
    /// Remaining seat capacity as last persisted.
    pub remain_cap: i32,
    /// Owning teacher, if the course has been bound.
    pub teacher_id: Option<TeacherId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Read-through cached course metadata.
///
/// Populated once alongside the course's admission state and served from
/// memory afterwards; never refreshed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMetadata {
    /// The course this record describes.
    pub course_id: CourseId,
    /// Course display name.
    pub name: String,
    /// Owning teacher, if bound at load time.
    pub teacher_id: Option<TeacherId>,
}
