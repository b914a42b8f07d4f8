//! Member management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use enrollhub_core::error::AppError;
use enrollhub_core::types::id::MemberId;
use enrollhub_core::types::member::Member;
use enrollhub_core::types::pagination::{PageRequest, PageResponse};

use crate::dto::request::{CreateMemberRequest, UpdateMemberRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/members
pub async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<Json<ApiResponse<Member>>, ApiError> {
    if req.username.is_empty() || req.username.len() > 255 {
        return Err(AppError::validation("Username must be 1-255 characters").into());
    }
    if req.nickname.is_empty() || req.nickname.len() > 255 {
        return Err(AppError::validation("Nickname must be 1-255 characters").into());
    }

    let member = state
        .member_repo
        .create(&req.username, &req.nickname, req.role)
        .await?;

    tracing::info!(member_id = %member.member_id, role = ?member.role, "Member created");
    Ok(Json(ApiResponse::ok(member)))
}

/// GET /api/v1/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<MemberId>,
) -> Result<Json<ApiResponse<Member>>, ApiError> {
    let member = state
        .member_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Member {id} not found")))?;

    Ok(Json(ApiResponse::ok(member)))
}

/// PUT /api/v1/members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<MemberId>,
    Json(req): Json<UpdateMemberRequest>,
) -> Result<Json<ApiResponse<Member>>, ApiError> {
    if req.nickname.is_empty() || req.nickname.len() > 255 {
        return Err(AppError::validation("Nickname must be 1-255 characters").into());
    }

    let member = state
        .member_repo
        .update_nickname(id, &req.nickname)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Member {id} not found")))?;

    tracing::info!(member_id = %member.member_id, "Member updated");
    Ok(Json(ApiResponse::ok(member)))
}

/// DELETE /api/v1/members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<MemberId>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.member_repo.delete(id).await? {
        return Err(AppError::not_found(format!("Member {id} not found")).into());
    }

    tracing::info!(member_id = %id, "Member deleted");
    Ok(Json(ApiResponse::ok(())))
}

/// GET /api/v1/members
pub async fn list_members(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResponse<Member>>>, ApiError> {
    let page = PageRequest::new(page.page, page.page_size);

    let items = state.member_repo.list(&page).await?;
    let total = state.member_repo.count().await?;

    Ok(Json(ApiResponse::ok(PageResponse::new(
        items,
        page.page,
        page.page_size,
        total,
    ))))
}
