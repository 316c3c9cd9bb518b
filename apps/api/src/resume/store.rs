use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::resume::models::{Comment, Resume, ResumeData, ResumeSummary, Version};

pub const INITIAL_VERSION_NOTE: &str = "Initial version";
pub const UPDATE_VERSION_NOTE: &str = "Updated resume";

/// Number of versions embedded in the resume detail response.
pub const DETAIL_VERSION_LIMIT: i64 = 10;

/// Persistence boundary for resumes, their version history and comments.
///
/// `create_resume` and `update_resume` each append one version row in the
/// same unit of work as the resume write. Nothing here ever deletes a
/// version.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Active resumes, most recently updated first. `owner` narrows the
    /// list to one user.
    async fn list_resumes(&self, owner: Option<&str>) -> Result<Vec<ResumeSummary>>;

    async fn create_resume(&self, owner: Option<&str>, data: &ResumeData) -> Result<Resume>;

    /// Looks a resume up regardless of its active flag.
    async fn get_resume(&self, id: Uuid) -> Result<Option<Resume>>;

    /// Returns `None` when no resume has this id.
    async fn update_resume(&self, id: Uuid, data: &ResumeData, note: &str)
        -> Result<Option<Resume>>;

    /// Clears the active flag. Returns `false` when no resume has this id.
    async fn deactivate_resume(&self, id: Uuid) -> Result<bool>;

    /// Newest first, optionally capped.
    async fn list_versions(&self, resume_id: Uuid, limit: Option<i64>) -> Result<Vec<Version>>;

    /// Newest first.
    async fn list_comments(&self, resume_id: Uuid) -> Result<Vec<Comment>>;

    async fn create_comment(&self, resume_id: Uuid, content: &str, author: &str)
        -> Result<Comment>;

    /// Returns `false` when the comment does not exist on this resume.
    async fn delete_comment(&self, resume_id: Uuid, comment_id: Uuid) -> Result<bool>;
}
