//! Builder-side state: the resume being edited, the active input mode and
//! the id it was last saved under.

pub mod client;

use tracing::{error, info};
use uuid::Uuid;

use crate::draft::client::{ClientError, ResumeClient};
use crate::intake::InputMode;
use crate::resume::models::{
    Achievement, Education, Experience, Language, PortfolioItem, Project, ResumeData, Skill,
};

/// Partial update. Each `Some` replaces the matching draft field.
#[derive(Debug, Clone, Default)]
pub struct ResumePatch {
    pub full_name: Option<String>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub linkedin: Option<Option<String>>,
    pub photo: Option<Option<String>>,
    pub summary: Option<Option<String>>,
    pub experience: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<Vec<Skill>>,
    pub languages: Option<Vec<Language>>,
    pub portfolio: Option<Vec<PortfolioItem>>,
    pub projects: Option<Vec<Project>>,
    pub achievements: Option<Vec<Achievement>>,
    pub template: Option<String>,
}

fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl ResumeData {
    pub fn apply(&mut self, patch: ResumePatch) {
        replace(&mut self.full_name, patch.full_name);
        replace(&mut self.phone, patch.phone);
        replace(&mut self.email, patch.email);
        replace(&mut self.location, patch.location);
        replace(&mut self.linkedin, patch.linkedin);
        replace(&mut self.photo, patch.photo);
        replace(&mut self.summary, patch.summary);
        replace(&mut self.experience, patch.experience);
        replace(&mut self.education, patch.education);
        replace(&mut self.skills, patch.skills);
        replace(&mut self.languages, patch.languages);
        replace(&mut self.portfolio, patch.portfolio);
        replace(&mut self.projects, patch.projects);
        replace(&mut self.achievements, patch.achievements);
        replace(&mut self.template, patch.template);
    }
}

pub struct DraftSession {
    client: ResumeClient,
    data: ResumeData,
    mode: InputMode,
    current_id: Option<Uuid>,
    loading: bool,
}

impl DraftSession {
    pub fn new(client: ResumeClient) -> Self {
        Self {
            client,
            data: ResumeData::default(),
            mode: InputMode::default(),
            current_id: None,
            loading: false,
        }
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    pub fn current_id(&self) -> Option<Uuid> {
        self.current_id
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Edits the draft in place. Every input mode funnels through here.
    pub fn update(&mut self, edit: impl FnOnce(&mut ResumeData)) {
        edit(&mut self.data);
    }

    pub fn merge(&mut self, patch: ResumePatch) {
        self.data.apply(patch);
    }

    pub fn reset(&mut self) {
        self.data = ResumeData::default();
        self.current_id = None;
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Creates the resume on first save and updates it afterwards.
    pub async fn save(&mut self) -> Result<Uuid, ClientError> {
        self.loading = true;
        let result = match self.current_id {
            None => self.client.create(&self.data).await,
            Some(id) => self.client.update(id, &self.data, None).await,
        };
        self.loading = false;

        match result {
            Ok(resume) => {
                info!(resume_id = %resume.id, "Draft saved");
                self.current_id = Some(resume.id);
                Ok(resume.id)
            }
            Err(e) => {
                error!("Error saving resume: {e}");
                Err(e)
            }
        }
    }

    /// Replaces the draft with the stored resume.
    pub async fn load(&mut self, id: Uuid) -> Result<(), ClientError> {
        self.loading = true;
        let result = self.client.fetch(id).await;
        self.loading = false;

        match result {
            Ok(detail) => {
                self.data = detail.resume.data;
                self.current_id = Some(id);
                Ok(())
            }
            Err(e) => {
                error!("Error loading resume: {e}");
                Err(e)
            }
        }
    }
}
