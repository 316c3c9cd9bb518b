use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::{CommentRow, ResumeListRow, ResumeRow, VersionRow};
use crate::resume::models::{Comment, Resume, ResumeData, ResumeSummary, Version};
use crate::resume::store::{ResumeStore, INITIAL_VERSION_NOTE};

/// Postgres-backed store. JSON sub-arrays live in JSONB columns.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Serialized JSONB columns for one write.
struct JsonColumns {
    experience: serde_json::Value,
    education: serde_json::Value,
    skills: serde_json::Value,
    languages: serde_json::Value,
    portfolio: serde_json::Value,
    projects: serde_json::Value,
    achievements: serde_json::Value,
    snapshot: serde_json::Value,
}

impl JsonColumns {
    fn from_data(data: &ResumeData) -> Result<Self> {
        Ok(Self {
            experience: serde_json::to_value(&data.experience)?,
            education: serde_json::to_value(&data.education)?,
            skills: serde_json::to_value(&data.skills)?,
            languages: serde_json::to_value(&data.languages)?,
            portfolio: serde_json::to_value(&data.portfolio)?,
            projects: serde_json::to_value(&data.projects)?,
            achievements: serde_json::to_value(&data.achievements)?,
            snapshot: serde_json::to_value(data)?,
        })
    }
}

async fn insert_version(
    conn: &mut sqlx::PgConnection,
    resume_id: Uuid,
    snapshot: &serde_json::Value,
    note: &str,
) -> Result<Uuid> {
    let version_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO resume_versions (id, resume_id, data, note, created_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(version_id)
    .bind(resume_id)
    .bind(snapshot)
    .bind(note)
    .bind(Utc::now())
    .execute(conn)
    .await?;
    Ok(version_id)
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn list_resumes(&self, owner: Option<&str>) -> Result<Vec<ResumeSummary>> {
        let rows = sqlx::query_as::<_, ResumeListRow>(
            r#"
            SELECT r.*,
                   (SELECT COUNT(*) FROM resume_versions v WHERE v.resume_id = r.id) AS version_count,
                   (SELECT COUNT(*) FROM resume_comments c WHERE c.resume_id = r.id) AS comment_count
            FROM resumes r
            WHERE r.is_active AND ($1::TEXT IS NULL OR r.user_id = $1)
            ORDER BY r.updated_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| ResumeSummary::try_from(row).context("Malformed resume row"))
            .collect()
    }

    async fn create_resume(&self, owner: Option<&str>, data: &ResumeData) -> Result<Resume> {
        let columns = JsonColumns::from_data(data)?;
        let id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes
                (id, user_id, full_name, phone, email, location, linkedin, photo, summary,
                 experience, education, skills, languages, portfolio, projects, achievements,
                 template, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, TRUE, $18, $18)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(&data.full_name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.location)
        .bind(&data.linkedin)
        .bind(&data.photo)
        .bind(&data.summary)
        .bind(&columns.experience)
        .bind(&columns.education)
        .bind(&columns.skills)
        .bind(&columns.languages)
        .bind(&columns.portfolio)
        .bind(&columns.projects)
        .bind(&columns.achievements)
        .bind(&data.template)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        insert_version(&mut *tx, id, &columns.snapshot, INITIAL_VERSION_NOTE).await?;
        tx.commit().await?;

        info!("Created resume {id}");
        Ok(row.try_into()?)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<Resume>> {
        let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Resume::try_from).transpose()?)
    }

    async fn update_resume(
        &self,
        id: Uuid,
        data: &ResumeData,
        note: &str,
    ) -> Result<Option<Resume>> {
        let columns = JsonColumns::from_data(data)?;

        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes SET
                full_name = $2, phone = $3, email = $4, location = $5, linkedin = $6,
                photo = $7, summary = $8, experience = $9, education = $10, skills = $11,
                languages = $12, portfolio = $13, projects = $14, achievements = $15,
                template = $16, updated_at = $17
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.full_name)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(&data.location)
        .bind(&data.linkedin)
        .bind(&data.photo)
        .bind(&data.summary)
        .bind(&columns.experience)
        .bind(&columns.education)
        .bind(&columns.skills)
        .bind(&columns.languages)
        .bind(&columns.portfolio)
        .bind(&columns.projects)
        .bind(&columns.achievements)
        .bind(&data.template)
        .bind(Utc::now())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        let version_id = insert_version(&mut *tx, id, &columns.snapshot, note).await?;
        tx.commit().await?;

        info!("Updated resume {id}, appended version {version_id}");
        Ok(Some(row.try_into()?))
    }

    async fn deactivate_resume(&self, id: Uuid) -> Result<bool> {
        let result =
            sqlx::query("UPDATE resumes SET is_active = FALSE, updated_at = $2 WHERE id = $1")
                .bind(id)
                .bind(Utc::now())
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_versions(&self, resume_id: Uuid, limit: Option<i64>) -> Result<Vec<Version>> {
        let rows = sqlx::query_as::<_, VersionRow>(
            "SELECT * FROM resume_versions WHERE resume_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(resume_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| Version::try_from(row).context("Malformed version snapshot"))
            .collect()
    }

    async fn list_comments(&self, resume_id: Uuid) -> Result<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT * FROM resume_comments WHERE resume_id = $1 ORDER BY created_at DESC",
        )
        .bind(resume_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn create_comment(
        &self,
        resume_id: Uuid,
        content: &str,
        author: &str,
    ) -> Result<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO resume_comments (id, resume_id, content, author, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(resume_id)
        .bind(content)
        .bind(author)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn delete_comment(&self, resume_id: Uuid, comment_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM resume_comments WHERE id = $1 AND resume_id = $2")
            .bind(comment_id)
            .bind(resume_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
