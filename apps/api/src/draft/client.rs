//! HTTP client for the resume API. Every builder-side call goes through here.
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::identity::USER_ID_HEADER;
use crate::resume::models::{Comment, Resume, ResumeData, ResumeSummary};
use crate::resume::handlers::ResumeDetailResponse;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateBody<'a> {
    #[serde(flatten)]
    data: &'a ResumeData,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_note: Option<&'a str>,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
}

#[derive(Clone)]
pub struct ResumeClient {
    client: Client,
    base_url: String,
    user_id: Option<String>,
}

impl ResumeClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: None,
        })
    }

    /// Sends requests on behalf of `user_id`.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn identify(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.user_id {
            Some(user_id) => request.header(USER_ID_HEADER, user_id),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = self.identify(request).send().await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    pub async fn create(&self, data: &ResumeData) -> Result<Resume, ClientError> {
        debug!("Creating resume");
        self.send(self.client.post(self.url("/api/resume")).json(data))
            .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        data: &ResumeData,
        version_note: Option<&str>,
    ) -> Result<Resume, ClientError> {
        debug!(resume_id = %id, "Updating resume");
        let body = UpdateBody { data, version_note };
        self.send(
            self.client
                .put(self.url(&format!("/api/resume/{id}")))
                .json(&body),
        )
        .await
    }

    pub async fn fetch(&self, id: Uuid) -> Result<ResumeDetailResponse, ClientError> {
        self.send(self.client.get(self.url(&format!("/api/resume/{id}"))))
            .await
    }

    pub async fn list(&self) -> Result<Vec<ResumeSummary>, ClientError> {
        self.send(self.client.get(self.url("/api/resume"))).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let _: serde_json::Value = self
            .send(self.client.delete(self.url(&format!("/api/resume/{id}"))))
            .await?;
        Ok(())
    }

    pub async fn list_comments(&self, id: Uuid) -> Result<Vec<Comment>, ClientError> {
        self.send(self.client.get(self.url(&format!("/api/resume/{id}/comments"))))
            .await
    }

    pub async fn add_comment(
        &self,
        id: Uuid,
        content: &str,
        author: Option<&str>,
    ) -> Result<Comment, ClientError> {
        self.send(
            self.client
                .post(self.url(&format!("/api/resume/{id}/comments")))
                .json(&CommentBody { content, author }),
        )
        .await
    }
}

/// Maps non-2xx responses to [`ClientError::Api`], keeping the server's
/// message when the body has one.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
