use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::resume::models::{Comment, Resume, ResumeCounts, ResumeData, ResumeSummary, Version};
use crate::resume::store::{ResumeStore, INITIAL_VERSION_NOTE};

#[derive(Default)]
struct Tables {
    // Insertion order is kept so equal timestamps still sort deterministically.
    resumes: Vec<Resume>,
    versions: Vec<Version>,
    comments: Vec<Comment>,
}

impl Tables {
    fn push_version(&mut self, resume_id: Uuid, data: &ResumeData, note: &str) {
        self.versions.push(Version {
            id: Uuid::new_v4(),
            resume_id,
            data: data.clone(),
            note: Some(note.to_string()),
            created_at: Utc::now(),
        });
    }
}

/// Process-local store used when no `DATABASE_URL` is configured, and by
/// the handler tests.
#[derive(Default)]
pub struct MemoryResumeStore {
    tables: RwLock<Tables>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn list_resumes(&self, owner: Option<&str>) -> Result<Vec<ResumeSummary>> {
        let tables = self.tables.read().await;
        let mut summaries: Vec<ResumeSummary> = tables
            .resumes
            .iter()
            .rev()
            .filter(|r| r.is_active)
            .filter(|r| owner.map_or(true, |o| r.user_id.as_deref() == Some(o)))
            .map(|r| ResumeSummary {
                resume: r.clone(),
                counts: ResumeCounts {
                    versions: tables.versions.iter().filter(|v| v.resume_id == r.id).count() as i64,
                    comments: tables.comments.iter().filter(|c| c.resume_id == r.id).count() as i64,
                },
            })
            .collect();
        summaries.sort_by(|a, b| b.resume.updated_at.cmp(&a.resume.updated_at));
        Ok(summaries)
    }

    async fn create_resume(&self, owner: Option<&str>, data: &ResumeData) -> Result<Resume> {
        let now = Utc::now();
        let resume = Resume {
            id: Uuid::new_v4(),
            user_id: owner.map(str::to_string),
            data: data.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        tables.push_version(resume.id, data, INITIAL_VERSION_NOTE);
        tables.resumes.push(resume.clone());
        Ok(resume)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<Resume>> {
        let tables = self.tables.read().await;
        Ok(tables.resumes.iter().find(|r| r.id == id).cloned())
    }

    async fn update_resume(
        &self,
        id: Uuid,
        data: &ResumeData,
        note: &str,
    ) -> Result<Option<Resume>> {
        let mut tables = self.tables.write().await;
        let Some(resume) = tables.resumes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        resume.data = data.clone();
        resume.updated_at = Utc::now();
        let updated = resume.clone();

        tables.push_version(id, data, note);
        Ok(Some(updated))
    }

    async fn deactivate_resume(&self, id: Uuid) -> Result<bool> {
        let mut tables = self.tables.write().await;
        match tables.resumes.iter_mut().find(|r| r.id == id) {
            Some(resume) => {
                resume.is_active = false;
                resume.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_versions(&self, resume_id: Uuid, limit: Option<i64>) -> Result<Vec<Version>> {
        let tables = self.tables.read().await;
        let limit = limit.map_or(usize::MAX, |l| l.max(0) as usize);
        Ok(tables
            .versions
            .iter()
            .rev()
            .filter(|v| v.resume_id == resume_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_comments(&self, resume_id: Uuid) -> Result<Vec<Comment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .rev()
            .filter(|c| c.resume_id == resume_id)
            .cloned()
            .collect())
    }

    async fn create_comment(
        &self,
        resume_id: Uuid,
        content: &str,
        author: &str,
    ) -> Result<Comment> {
        let comment = Comment {
            id: Uuid::new_v4(),
            resume_id,
            content: content.to_string(),
            author: Some(author.to_string()),
            created_at: Utc::now(),
        };
        self.tables.write().await.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete_comment(&self, resume_id: Uuid, comment_id: Uuid) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.comments.len();
        tables
            .comments
            .retain(|c| !(c.id == comment_id && c.resume_id == resume_id));
        Ok(tables.comments.len() < before)
    }
}
