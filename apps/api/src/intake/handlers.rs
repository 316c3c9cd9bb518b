use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::intake::upload::{ingest_files, set_profile_photo, IncomingFile};
use crate::resume::models::{PortfolioItem, ResumeData};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub portfolio: Vec<PortfolioItem>,
    pub photo: Option<String>,
    pub skipped: Vec<String>,
}

fn bad_upload(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid upload: {e}"))
}

/// POST /api/uploads
///
/// `files` fields become portfolio items, a `photo` field becomes the
/// profile photo. Nothing is persisted; the caller merges the result into
/// its draft.
pub async fn handle_upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, AppError> {
    let mut files = Vec::new();
    let mut photo = None;
    let mut skipped = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(bad_upload)? {
        let field_name = field.name().unwrap_or("").to_string();
        let name = field.file_name().unwrap_or("unknown").to_string();
        let mime = field.content_type().unwrap_or("").to_string();
        let bytes = field.bytes().await.map_err(bad_upload)?;
        let file = IncomingFile {
            name,
            mime,
            bytes: bytes.to_vec(),
        };

        match field_name.as_str() {
            "files" => files.push(file),
            "photo" => photo = Some(file),
            _ => {}
        }
    }

    let mut draft = ResumeData::default();
    let report = ingest_files(&mut draft, files);
    skipped.extend(report.skipped);
    if let Some(file) = photo {
        if !set_profile_photo(&mut draft, &file) {
            skipped.push(file.name);
        }
    }

    info!(
        added = report.added.len(),
        photo = draft.photo.is_some(),
        skipped = skipped.len(),
        "Upload processed"
    );
    Ok(Json(UploadResponse {
        portfolio: report.added,
        photo: draft.photo,
        skipped,
    }))
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::routes::build_router;
    use crate::state::AppState;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    const BOUNDARY: &str = "kraftboundary";

    fn part(field: &str, file_name: &str, mime: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {mime}\r\n\r\n{content}\r\n"
        )
    }

    #[tokio::test]
    async fn test_upload_sorts_files() {
        let app = build_router(AppState::in_memory(Config::local("http://localhost:8080")));
        let body = [
            part("files", "wall.jpg", "image/jpeg", "hi"),
            part("files", "notes.txt", "text/plain", "hello"),
            part("photo", "me.png", "image/png", "hi"),
            format!("--{BOUNDARY}--\r\n"),
        ]
        .concat();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/uploads")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["portfolio"].as_array().unwrap().len(), 1);
        assert_eq!(body["portfolio"][0]["type"], "image");
        assert_eq!(body["portfolio"][0]["title"], "wall.jpg");
        assert_eq!(body["portfolio"][0]["url"], "data:image/jpeg;base64,aGk=");
        assert_eq!(body["photo"], "data:image/png;base64,aGk=");
        assert_eq!(body["skipped"][0], "notes.txt");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_multipart() {
        let app = build_router(AppState::in_memory(Config::local("http://localhost:8080")));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/uploads")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
