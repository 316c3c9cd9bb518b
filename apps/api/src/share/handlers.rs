use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::PublicResumePage;
use crate::resume::models::Resume;
use crate::share::export::PdfExport;
use crate::share::links::{share_link, ShareLink};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    #[serde(flatten)]
    pub link: ShareLink,
    pub export: PdfExport,
}

async fn find_active(state: &AppState, id: Uuid) -> Result<Resume, AppError> {
    state
        .store
        .get_resume(id)
        .await
        .map_err(AppError::storage("Failed to fetch resume"))?
        .filter(|r| r.is_active)
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
}

/// GET /resume/:id
///
/// Read-only public page. Inactive resumes are not shown.
pub async fn handle_public_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let resume = find_active(&state, id).await?;
    let page = PublicResumePage::from_resume(&resume);
    Ok(Html(page.render()?))
}

/// GET /api/resume/:id/share
pub async fn handle_share(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShareResponse>, AppError> {
    let resume = find_active(&state, id).await?;
    Ok(Json(ShareResponse {
        link: share_link(&state.config.public_base_url, id, &resume.data),
        export: PdfExport::for_resume(&resume.data),
    }))
}
