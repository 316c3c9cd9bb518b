//! Server-side HTML for the public, read-only resume page.

pub mod dates;

use askama::Template;

use crate::render::dates::format_period;
use crate::resume::models::{PortfolioKind, Resume};

pub const SITE_NAME: &str = "ResumeKraft";

pub struct ExperienceView {
    pub title: String,
    pub employer: String,
    pub period: String,
    pub description: String,
}

pub struct EducationView {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub grade: String,
}

pub struct LabelView {
    pub name: String,
    pub detail: String,
}

pub struct PortfolioView {
    pub url: String,
    pub title: String,
    pub is_video: bool,
}

pub struct ProjectView {
    pub title: String,
    pub period: String,
    pub description: String,
    pub tech_stack: String,
}

#[derive(Template)]
#[template(path = "public_resume.html")]
pub struct PublicResumePage {
    pub page_title: String,
    pub meta_description: String,
    pub full_name: String,
    pub photo: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub linkedin: String,
    pub summary: String,
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub skills: Vec<LabelView>,
    pub languages: Vec<LabelView>,
    pub portfolio: Vec<PortfolioView>,
    pub projects: Vec<ProjectView>,
    pub achievements: Vec<LabelView>,
}

fn text(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Keeps web links only. Bare hosts get `https://`; any other scheme
/// (`javascript:`, `data:`) is dropped.
fn web_link(value: &Option<String>) -> String {
    let link = text(value);
    let lower = link.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        link
    } else if link.is_empty() || link.contains(':') {
        String::new()
    } else {
        format!("https://{link}")
    }
}

impl PublicResumePage {
    pub fn from_resume(resume: &Resume) -> Self {
        let data = &resume.data;
        let summary = text(&data.summary);

        PublicResumePage {
            page_title: format!("{} - Resume | {SITE_NAME}", data.full_name),
            meta_description: if summary.is_empty() {
                format!("View {}'s professional resume", data.full_name)
            } else {
                summary.clone()
            },
            full_name: data.full_name.clone(),
            photo: text(&data.photo),
            phone: text(&data.phone),
            email: text(&data.email),
            location: text(&data.location),
            linkedin: web_link(&data.linkedin),
            summary,
            experience: data
                .experience
                .iter()
                .map(|e| ExperienceView {
                    title: e.title.clone(),
                    employer: match e.location.as_deref().filter(|l| !l.trim().is_empty()) {
                        Some(location) => format!("{} • {location}", e.company),
                        None => e.company.clone(),
                    },
                    period: format_period(&e.start_date, e.end_date.as_deref(), e.current),
                    description: text(&e.description),
                })
                .collect(),
            education: data
                .education
                .iter()
                .map(|e| EducationView {
                    degree: e.degree.clone(),
                    institution: e.institution.clone(),
                    year: e.year.clone(),
                    grade: text(&e.grade),
                })
                .collect(),
            skills: data
                .skills
                .iter()
                .filter(|s| !s.name.trim().is_empty())
                .map(|s| LabelView {
                    name: s.name.clone(),
                    detail: s.level.map(|l| l.as_str().to_string()).unwrap_or_default(),
                })
                .collect(),
            languages: data
                .languages
                .iter()
                .filter(|l| !l.name.trim().is_empty())
                .map(|l| LabelView {
                    name: l.name.clone(),
                    detail: l.proficiency.as_str().to_string(),
                })
                .collect(),
            portfolio: data
                .portfolio
                .iter()
                .filter(|p| p.kind != PortfolioKind::Link)
                .map(|p| PortfolioView {
                    url: p.url.clone(),
                    title: p.title.clone().unwrap_or_else(|| "Work sample".to_string()),
                    is_video: p.kind == PortfolioKind::Video,
                })
                .collect(),
            projects: data
                .projects
                .iter()
                .map(|p| ProjectView {
                    title: p.title.clone(),
                    period: format_period(
                        p.start_date.as_deref().unwrap_or_default(),
                        p.end_date.as_deref(),
                        false,
                    ),
                    description: p.description.clone(),
                    tech_stack: text(&p.tech_stack),
                })
                .collect(),
            achievements: data
                .achievements
                .iter()
                .map(|a| LabelView {
                    name: a.title.clone(),
                    detail: text(&a.description),
                })
                .collect(),
        }
    }
}
