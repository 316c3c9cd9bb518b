use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::identity::Caller;
use crate::resume::models::{Comment, Resume, ResumeData, ResumeSummary, Version};
use crate::resume::store::{DETAIL_VERSION_LIMIT, UPDATE_VERSION_NOTE};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResumeRequest {
    #[serde(flatten)]
    pub data: ResumeData,
    pub version_note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeDetailResponse {
    #[serde(flatten)]
    pub resume: Resume,
    pub versions: Vec<Version>,
    pub comments: Vec<Comment>,
}

/// GET /api/resume
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<ResumeSummary>>, AppError> {
    let resumes = state
        .store
        .list_resumes(caller.user_id())
        .await
        .map_err(AppError::storage("Failed to fetch resumes"))?;
    Ok(Json(resumes))
}

/// POST /api/resume
pub async fn handle_create_resume(
    State(state): State<AppState>,
    caller: Caller,
    Json(data): Json<ResumeData>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let data = data.normalized();
    let resume = state
        .store
        .create_resume(caller.user_id(), &data)
        .await
        .map_err(AppError::storage("Failed to create resume"))?;
    info!(resume_id = %resume.id, owner = ?caller.user_id(), "Resume created");
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/resume/:id
///
/// Includes the ten most recent versions and every comment, newest first.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let resume = state
        .store
        .get_resume(id)
        .await
        .map_err(AppError::storage("Failed to fetch resume"))?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let versions = state
        .store
        .list_versions(id, Some(DETAIL_VERSION_LIMIT))
        .await
        .map_err(AppError::storage("Failed to fetch resume"))?;
    let comments = state
        .store
        .list_comments(id)
        .await
        .map_err(AppError::storage("Failed to fetch resume"))?;

    Ok(Json(ResumeDetailResponse {
        resume,
        versions,
        comments,
    }))
}

/// PUT /api/resume/:id
///
/// Overwrites the resume and appends one version snapshot.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateResumeRequest>,
) -> Result<Json<Resume>, AppError> {
    let data = request.data.normalized();
    let note = request
        .version_note
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(UPDATE_VERSION_NOTE);

    let resume = state
        .store
        .update_resume(id, &data, note)
        .await
        .map_err(AppError::storage("Failed to update resume"))?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    info!(resume_id = %id, "Resume updated");
    Ok(Json(resume))
}

/// DELETE /api/resume/:id
///
/// Soft delete: the row stays, the active flag is cleared.
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let found = state
        .store
        .deactivate_resume(id)
        .await
        .map_err(AppError::storage("Failed to delete resume"))?;
    if !found {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }
    info!(resume_id = %id, "Resume deactivated");
    Ok(Json(json!({ "success": true })))
}

/// GET /api/resume/:id/versions
pub async fn handle_list_versions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Version>>, AppError> {
    let exists = state
        .store
        .get_resume(id)
        .await
        .map_err(AppError::storage("Failed to fetch versions"))?
        .is_some();
    if !exists {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }

    let versions = state
        .store
        .list_versions(id, None)
        .await
        .map_err(AppError::storage("Failed to fetch versions"))?;
    Ok(Json(versions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::identity::USER_ID_HEADER;
    use crate::routes::build_router;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request},
        Router,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::in_memory(Config::local("http://localhost:8080")))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn create(app: &Router, name: &str) -> Uuid {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/resume",
            Some(json!({ "fullName": name, "phone": "+91 98765 43210" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().parse().unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_persisted_record() {
        let app = app();
        let id = create(&app, "Rajesh Kumar").await;

        let (status, body) = send(&app, Method::GET, &format!("/api/resume/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fullName"], "Rajesh Kumar");
        assert_eq!(body["template"], "professional");
        assert_eq!(body["isActive"], true);
        assert_eq!(body["versions"].as_array().unwrap().len(), 1);
        assert_eq!(body["versions"][0]["note"], "Initial version");
    }

    #[tokio::test]
    async fn test_create_requires_full_name_key() {
        let app = app();
        let (status, _) = send(&app, Method::POST, "/api/resume", Some(json!({ "phone": "1" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_appends_exactly_one_version() {
        let app = app();
        let id = create(&app, "Rajesh").await;

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/resume/{id}"),
            Some(json!({ "fullName": "Rajesh Kumar", "versionNote": "Added surname" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fullName"], "Rajesh Kumar");
        // Fields absent from the body are overwritten, not merged.
        assert!(body["phone"].is_null());

        let (_, versions) = send(&app, Method::GET, &format!("/api/resume/{id}/versions"), None).await;
        let versions = versions.as_array().unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0]["note"], "Added surname");
        assert_eq!(versions[1]["note"], "Initial version");
        assert_eq!(versions[1]["data"]["fullName"], "Rajesh");
    }

    #[tokio::test]
    async fn test_update_without_note_uses_default() {
        let app = app();
        let id = create(&app, "Meera").await;
        send(&app, Method::PUT, &format!("/api/resume/{id}"), Some(json!({ "fullName": "Meera" }))).await;

        let (_, versions) = send(&app, Method::GET, &format!("/api/resume/{id}/versions"), None).await;
        assert_eq!(versions[0]["note"], "Updated resume");
    }

    #[tokio::test]
    async fn test_update_unknown_resume_is_not_found() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/api/resume/{}", Uuid::new_v4()),
            Some(json!({ "fullName": "Ghost" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_hides_resume_from_list() {
        let app = app();
        let kept = create(&app, "Kept").await;
        let gone = create(&app, "Gone").await;

        let (status, body) = send(&app, Method::DELETE, &format!("/api/resume/{gone}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (_, list) = send(&app, Method::GET, "/api/resume", None).await;
        let ids: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        let kept = kept.to_string();
        assert_eq!(ids, vec![kept.as_str()]);

        let (_, detail) = send(&app, Method::GET, &format!("/api/resume/{gone}"), None).await;
        assert_eq!(detail["isActive"], false);
    }

    #[tokio::test]
    async fn test_delete_unknown_resume_is_not_found() {
        let app = app();
        let (status, _) =
            send(&app, Method::DELETE, &format!("/api/resume/{}", Uuid::new_v4()), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_caller() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/resume")
            .header(header::CONTENT_TYPE, "application/json")
            .header(USER_ID_HEADER, "user_a")
            .body(Body::from(json!({ "fullName": "Owned" }).to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        create(&app, "Anonymous draft").await;

        let request = Request::builder()
            .uri("/api/resume")
            .header(USER_ID_HEADER, "user_a")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let list: Value = serde_json::from_slice(&bytes).unwrap();
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["fullName"], "Owned");
        assert_eq!(list[0]["userId"], "user_a");
        assert_eq!(list[0]["_count"]["versions"], 1);
    }
}
