use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::resume::models::{Comment, Resume, ResumeCounts, ResumeData, ResumeSummary, Version};

#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub photo: Option<String>,
    pub summary: Option<String>,
    pub experience: Value,
    pub education: Value,
    pub skills: Value,
    pub languages: Value,
    pub portfolio: Value,
    pub projects: Value,
    pub achievements: Value,
    pub template: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ResumeListRow {
    #[sqlx(flatten)]
    pub resume: ResumeRow,
    pub version_count: i64,
    pub comment_count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct VersionRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub data: Value,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub content: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ResumeRow> for Resume {
    type Error = serde_json::Error;

    fn try_from(row: ResumeRow) -> Result<Self, Self::Error> {
        Ok(Resume {
            id: row.id,
            user_id: row.user_id,
            data: ResumeData {
                full_name: row.full_name,
                phone: row.phone,
                email: row.email,
                location: row.location,
                linkedin: row.linkedin,
                photo: row.photo,
                summary: row.summary,
                experience: serde_json::from_value(row.experience)?,
                education: serde_json::from_value(row.education)?,
                skills: serde_json::from_value(row.skills)?,
                languages: serde_json::from_value(row.languages)?,
                portfolio: serde_json::from_value(row.portfolio)?,
                projects: serde_json::from_value(row.projects)?,
                achievements: serde_json::from_value(row.achievements)?,
                template: row.template,
            },
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<ResumeListRow> for ResumeSummary {
    type Error = serde_json::Error;

    fn try_from(row: ResumeListRow) -> Result<Self, Self::Error> {
        Ok(ResumeSummary {
            resume: row.resume.try_into()?,
            counts: ResumeCounts {
                versions: row.version_count,
                comments: row.comment_count,
            },
        })
    }
}

impl TryFrom<VersionRow> for Version {
    type Error = serde_json::Error;

    fn try_from(row: VersionRow) -> Result<Self, Self::Error> {
        Ok(Version {
            id: row.id,
            resume_id: row.resume_id,
            data: serde_json::from_value(row.data)?,
            note: row.note,
            created_at: row.created_at,
        })
    }
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            resume_id: row.resume_id,
            content: row.content,
            author: row.author,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row() -> ResumeRow {
        ResumeRow {
            id: Uuid::new_v4(),
            user_id: Some("user_1".to_string()),
            full_name: "Asha Rao".to_string(),
            phone: None,
            email: Some("asha@example.com".to_string()),
            location: None,
            linkedin: None,
            photo: None,
            summary: None,
            experience: json!([{ "id": "e1", "title": "Cook", "company": "Dhaba" }]),
            education: json!([]),
            skills: json!([{ "id": "s1", "name": "Baking", "level": "expert" }]),
            languages: json!([]),
            portfolio: json!([]),
            projects: json!([]),
            achievements: json!([]),
            template: "professional".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_converts_json_columns() {
        let resume: Resume = row().try_into().unwrap();
        assert_eq!(resume.data.experience[0].company, "Dhaba");
        assert_eq!(resume.data.skills[0].name, "Baking");
    }

    #[test]
    fn test_malformed_json_column_is_an_error() {
        let mut bad = row();
        bad.skills = json!({ "not": "an array" });
        assert!(Resume::try_from(bad).is_err());
    }
}
