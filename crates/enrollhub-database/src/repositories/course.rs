//! Course repository implementation.

use sqlx::PgPool;

use enrollhub_core::error::{AppError, ErrorKind};
use enrollhub_core::result::AppResult;
use enrollhub_core::types::course::{Course, CourseMetadata};
use enrollhub_core::types::id::{CourseId, TeacherId};

/// Repository for course CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new course repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a course with its full capacity still available.
    pub async fn create(&self, name: &str, cap: u32) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (name, cap, remain_cap) VALUES ($1, $2, $2) RETURNING *",
        )
        .bind(name)
        .bind(cap as i32)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict(format!("Course '{name}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create course", e),
        })
    }

    /// Whether a course with this ID exists.
    pub async fn exists_by_id(&self, id: CourseId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM courses WHERE course_id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check course existence", e)
            })
    }

    /// Remaining seat capacity as persisted, if the course exists.
    pub async fn remaining_capacity(&self, id: CourseId) -> AppResult<Option<u32>> {
        let remain: Option<i32> =
            sqlx::query_scalar("SELECT remain_cap FROM courses WHERE course_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to read course capacity", e)
                })?;

        Ok(remain.map(|r| r.max(0) as u32))
    }

    /// Name and owning teacher, if the course exists.
    pub async fn metadata(&self, id: CourseId) -> AppResult<Option<CourseMetadata>> {
        let row: Option<(CourseId, String, Option<TeacherId>)> = sqlx::query_as(
            "SELECT course_id, name, teacher_id FROM courses WHERE course_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read course metadata", e)
        })?;

        Ok(row.map(|(course_id, name, teacher_id)| CourseMetadata {
            course_id,
            name,
            teacher_id,
        }))
    }

    /// Bind a course to a teacher. Returns `false` if the course does not
    /// exist or is already bound.
    pub async fn bind_teacher(&self, id: CourseId, teacher_id: TeacherId) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE courses SET teacher_id = $2 WHERE course_id = $1 AND teacher_id IS NULL",
        )
        .bind(id)
        .bind(teacher_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to bind course", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Unbind a course from its teacher. Returns `false` if the course does
    /// not exist or was not bound.
    pub async fn unbind_teacher(&self, id: CourseId) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE courses SET teacher_id = NULL WHERE course_id = $1 AND teacher_id IS NOT NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to unbind course", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// All courses bound to a teacher.
    pub async fn courses_of_teacher(&self, teacher_id: TeacherId) -> AppResult<Vec<CourseMetadata>> {
        let rows: Vec<(CourseId, String, Option<TeacherId>)> = sqlx::query_as(
            "SELECT course_id, name, teacher_id FROM courses WHERE teacher_id = $1 ORDER BY course_id",
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list teacher courses", e)
        })?;

        Ok(rows
            .into_iter()
            .map(|(course_id, name, teacher_id)| CourseMetadata {
                course_id,
                name,
                teacher_id,
            })
            .collect())
    }
}
