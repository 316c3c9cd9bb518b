use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::comments::validation::validate_comment;
use crate::errors::AppError;
use crate::resume::models::Comment;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentQuery {
    pub comment_id: Option<String>,
}

/// GET /api/resume/:id/comments
pub async fn handle_list_comments(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = state
        .store
        .list_comments(resume_id)
        .await
        .map_err(AppError::storage("Failed to fetch comments"))?;
    Ok(Json(comments))
}

/// POST /api/resume/:id/comments
pub async fn handle_create_comment(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let comment = validate_comment(request.content.as_deref(), request.author.as_deref())?;

    let exists = state
        .store
        .get_resume(resume_id)
        .await
        .map_err(AppError::storage("Failed to create comment"))?
        .is_some();
    if !exists {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }

    let stored = state
        .store
        .create_comment(resume_id, &comment.content, &comment.author)
        .await
        .map_err(AppError::storage("Failed to create comment"))?;
    info!(resume_id = %resume_id, comment_id = %stored.id, "Comment added");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// DELETE /api/resume/:id/comments?commentId=
pub async fn handle_delete_comment(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Query(query): Query<DeleteCommentQuery>,
) -> Result<Json<Value>, AppError> {
    let raw = query
        .comment_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Comment ID is required".to_string()))?;
    let comment_id = Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::Validation(format!("Invalid comment ID '{raw}'")))?;

    let deleted = state
        .store
        .delete_comment(resume_id, comment_id)
        .await
        .map_err(AppError::storage("Failed to delete comment"))?;
    if !deleted {
        return Err(AppError::NotFound("Comment not found".to_string()));
    }
    info!(resume_id = %resume_id, comment_id = %comment_id, "Comment deleted");
    Ok(Json(json!({ "success": true })))
}
