use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub const DEFAULT_TEMPLATE: &str = "professional";

/// Generates the string identifier carried by every resume sub-item.
pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

/// Treats `""` and whitespace-only strings as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LanguageProficiency {
    Basic,
    Conversational,
    Fluent,
    Native,
}

impl LanguageProficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageProficiency::Basic => "basic",
            LanguageProficiency::Conversational => "conversational",
            LanguageProficiency::Fluent => "fluent",
            LanguageProficiency::Native => "native",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PortfolioKind {
    Image,
    Video,
    Link,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl Default for Experience {
    fn default() -> Self {
        Self {
            id: new_item_id(),
            title: String::new(),
            company: String::new(),
            location: None,
            start_date: String::new(),
            end_date: None,
            current: false,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub year: String,
    pub grade: Option<String>,
}

impl Default for Education {
    fn default() -> Self {
        Self {
            id: new_item_id(),
            degree: String::new(),
            institution: String::new(),
            location: None,
            year: String::new(),
            grade: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Only set when the user picked one. New entries start at intermediate.
    #[serde(default)]
    pub level: Option<SkillLevel>,
    pub category: Option<String>,
}

impl Skill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            id: new_item_id(),
            name: String::new(),
            level: Some(SkillLevel::Intermediate),
            category: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub proficiency: LanguageProficiency,
}

impl Default for Language {
    fn default() -> Self {
        Self {
            id: new_item_id(),
            name: String::new(),
            proficiency: LanguageProficiency::Conversational,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PortfolioKind,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Default for PortfolioItem {
    fn default() -> Self {
        Self {
            id: new_item_id(),
            kind: PortfolioKind::Link,
            url: String::new(),
            title: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub tech_stack: Option<String>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: new_item_id(),
            title: String::new(),
            description: String::new(),
            start_date: None,
            end_date: None,
            tech_stack: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

impl Default for Achievement {
    fn default() -> Self {
        Self {
            id: new_item_id(),
            title: String::new(),
            description: None,
        }
    }
}

/// The user-editable content of a resume. This is the body of create and
/// update requests, the payload of every version snapshot, and the draft
/// held by the builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub full_name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub photo: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default = "default_template")]
    pub template: String,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: None,
            email: None,
            location: None,
            linkedin: None,
            photo: None,
            summary: None,
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            languages: Vec::new(),
            portfolio: Vec::new(),
            projects: Vec::new(),
            achievements: Vec::new(),
            template: default_template(),
        }
    }
}

impl ResumeData {
    /// Applies the storage rules: blank optional text becomes `None` and a
    /// blank template falls back to [`DEFAULT_TEMPLATE`].
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.phone,
            &mut self.email,
            &mut self.location,
            &mut self.linkedin,
            &mut self.photo,
            &mut self.summary,
        ] {
            if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *field = None;
            }
        }
        if self.template.trim().is_empty() {
            self.template = default_template();
        }
        self
    }

    /// Name used when building download file names.
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() {
            "resume"
        } else {
            name
        }
    }
}

/// A persisted resume as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub data: ResumeData,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResumeCounts {
    pub versions: i64,
    pub comments: i64,
}

/// List entry for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSummary {
    #[serde(flatten)]
    pub resume: Resume,
    #[serde(rename = "_count")]
    pub counts: ResumeCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub data: ResumeData,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub content: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_body_gets_defaults() {
        let data: ResumeData = serde_json::from_value(json!({ "fullName": "Asha" })).unwrap();
        assert_eq!(data.full_name, "Asha");
        assert_eq!(data.template, DEFAULT_TEMPLATE);
        assert!(data.experience.is_empty());
        assert!(data.phone.is_none());
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let data: ResumeData = serde_json::from_value(json!({
            "fullName": "Asha",
            "phone": "",
            "email": "   ",
            "location": "Pune"
        }))
        .unwrap();
        assert!(data.phone.is_none());
        assert!(data.email.is_none());
        assert_eq!(data.location.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_missing_item_ids_are_generated() {
        let data: ResumeData = serde_json::from_value(json!({
            "fullName": "Asha",
            "skills": [{ "name": "Welding" }, { "name": "Driving" }]
        }))
        .unwrap();
        assert_eq!(data.skills.len(), 2);
        assert!(!data.skills[0].id.is_empty());
        assert_ne!(data.skills[0].id, data.skills[1].id);
    }

    #[test]
    fn test_normalized_restores_template() {
        let data = ResumeData {
            template: " ".to_string(),
            summary: Some(String::new()),
            ..ResumeData::default()
        }
        .normalized();
        assert_eq!(data.template, DEFAULT_TEMPLATE);
        assert!(data.summary.is_none());
    }

    #[test]
    fn test_skill_without_level_stays_unleveled() {
        let data: ResumeData = serde_json::from_value(json!({
            "fullName": "Asha",
            "skills": [
                { "id": "s1", "name": "Welding" },
                { "id": "s2", "name": "Driving", "level": "expert" }
            ]
        }))
        .unwrap();
        assert_eq!(data.skills[0].level, None);
        assert_eq!(data.skills[1].level, Some(SkillLevel::Expert));
        assert_eq!(Skill::named("Cooking").level, Some(SkillLevel::Intermediate));
    }

    #[test]
    fn test_portfolio_kind_serializes_as_type() {
        let item = PortfolioItem {
            kind: PortfolioKind::Image,
            url: "data:image/png;base64,AA==".to_string(),
            ..PortfolioItem::default()
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "image");
    }

    #[test]
    fn test_display_name_falls_back() {
        assert_eq!(ResumeData::default().display_name(), "resume");
    }

    #[test]
    fn test_resume_flattens_data_in_camel_case() {
        let resume = Resume {
            id: Uuid::new_v4(),
            user_id: None,
            data: ResumeData {
                full_name: "Asha".to_string(),
                ..ResumeData::default()
            },
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&resume).unwrap();
        assert_eq!(value["fullName"], "Asha");
        assert_eq!(value["isActive"], true);
    }
}
