//! Member repository implementation.

use sqlx::PgPool;

use enrollhub_core::error::{AppError, ErrorKind};
use enrollhub_core::result::AppResult;
use enrollhub_core::types::id::MemberId;
use enrollhub_core::types::member::{Member, MemberRole};
use enrollhub_core::types::pagination::PageRequest;

/// Repository for member CRUD and query operations.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a member and return the persisted row.
    pub async fn create(
        &self,
        username: &str,
        nickname: &str,
        role: MemberRole,
    ) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members (username, nickname, role) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(username)
        .bind(nickname)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict(format!("Username '{username}' is already taken"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create member", e),
        })
    }

    /// Find a member by primary key.
    pub async fn find_by_id(&self, id: MemberId) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE member_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find member by id", e)
            })
    }

    /// Update a member's nickname. Returns the updated row, or `None` if
    /// no member has this ID.
    pub async fn update_nickname(
        &self,
        id: MemberId,
        nickname: &str,
    ) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>(
            "UPDATE members SET nickname = $2 WHERE member_id = $1 RETURNING *",
        )
        .bind(id)
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update member", e))
    }

    /// Delete a member. Returns `false` if no member has this ID.
    pub async fn delete(&self, id: MemberId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM members WHERE member_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    AppError::conflict("Member still owns courses")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete member", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// One page of members, ordered by ID.
    pub async fn list(&self, page: &PageRequest) -> AppResult<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members ORDER BY member_id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list members", e))
    }

    /// Total number of members.
    pub async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count members", e)
            })?;

        Ok(total.max(0) as u64)
    }

    /// Whether a member with this ID and role exists.
    pub async fn exists_with_role(&self, id: MemberId, role: MemberRole) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM members WHERE member_id = $1 AND role = $2)",
        )
        .bind(id)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check member existence", e)
        })
    }
}
