//! Conversational input: a fixed sequence of questions, one answer each,
//! with a repeating skill step that ends on [`SKILL_SENTINEL`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::intake::InputMode;
use crate::resume::models::{Experience, ResumeData, Skill};

pub const SKILL_SENTINEL: &str = "done";
pub const SKILL_REPROMPT: &str = "Got it! Add another skill or type \"done\" to continue.";
pub const SWITCH_TO_FORM: &str = "Switch to Form";
pub const PREVIEW_RESUME: &str = "Preview Resume";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatField {
    FullName,
    Phone,
    Email,
    Location,
    Summary,
    ExperienceTitle,
    ExperienceCompany,
    SkillAdd,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Single line; an empty answer is accepted and skips the field.
    Text,
    /// Multi line; an empty answer is ignored.
    TextArea,
    /// Buttons instead of free text.
    Options(&'static [&'static str]),
}

#[derive(Debug)]
pub struct ChatStep {
    pub field: ChatField,
    pub question: &'static str,
    pub placeholder: &'static str,
    pub kind: PromptKind,
}

pub static CHAT_FLOW: [ChatStep; 9] = [
    ChatStep {
        field: ChatField::FullName,
        question: "👋 Namaste! Let's build your resume. What's your full name?",
        placeholder: "e.g., Rajesh Kumar",
        kind: PromptKind::Text,
    },
    ChatStep {
        field: ChatField::Phone,
        question: "📱 Great! What's your phone number?",
        placeholder: "+91 98765 43210",
        kind: PromptKind::Text,
    },
    ChatStep {
        field: ChatField::Email,
        question: "📧 Do you have an email address? (You can skip by pressing Enter)",
        placeholder: "example@email.com",
        kind: PromptKind::Text,
    },
    ChatStep {
        field: ChatField::Location,
        question: "📍 Where are you located?",
        placeholder: "e.g., Mumbai, Maharashtra",
        kind: PromptKind::Text,
    },
    ChatStep {
        field: ChatField::Summary,
        question: "✨ Tell me a bit about yourself. What kind of work do you do?",
        placeholder: "e.g., I am an experienced electrician with 5 years of work...",
        kind: PromptKind::TextArea,
    },
    ChatStep {
        field: ChatField::ExperienceTitle,
        question: "💼 What was your most recent job title?",
        placeholder: "e.g., Electrician, Driver, Cook",
        kind: PromptKind::Text,
    },
    ChatStep {
        field: ChatField::ExperienceCompany,
        question: "🏢 Which company or place did you work at?",
        placeholder: "e.g., ABC Construction",
        kind: PromptKind::Text,
    },
    ChatStep {
        field: ChatField::SkillAdd,
        question: "🛠️ What skills do you have? (Enter one skill at a time, type \"done\" when finished)",
        placeholder: "e.g., Welding, Driving, Cooking",
        kind: PromptKind::Text,
    },
    ChatStep {
        field: ChatField::Complete,
        question: "🎉 Your resume is taking shape! Would you like to add more details using the form, or download your resume now?",
        placeholder: "",
        kind: PromptKind::Options(&[SWITCH_TO_FORM, PREVIEW_RESUME]),
    },
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Nothing changed (blank answer where one is required, or free text on
    /// an options step).
    Ignored,
    /// The answer was applied and the flow moved to this field.
    Advanced(ChatField),
    /// A skill was appended; the skill step repeats.
    SkillAdded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    SwitchMode(InputMode),
    Preview,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    step: usize,
    messages: Vec<ChatMessage>,
    pending_title: String,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl ChatSession {
    /// Starts a conversation with the first question already asked.
    pub fn new() -> Self {
        let mut session = Self {
            step: 0,
            messages: Vec::new(),
            pending_title: String::new(),
        };
        session.push(Sender::Bot, CHAT_FLOW[0].question);
        session
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current_step(&self) -> &'static ChatStep {
        &CHAT_FLOW[self.step]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_complete(&self) -> bool {
        self.current_step().field == ChatField::Complete
    }

    fn push(&mut self, sender: Sender, content: &str) {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4(),
            sender,
            content: content.to_string(),
            timestamp: Utc::now(),
        });
    }

    fn advance(&mut self) -> ChatOutcome {
        if self.step + 1 >= CHAT_FLOW.len() {
            return ChatOutcome::Ignored;
        }
        self.step += 1;
        let next = self.current_step();
        self.push(Sender::Bot, next.question);
        ChatOutcome::Advanced(next.field)
    }

    /// Applies one typed answer to the draft.
    pub fn submit(&mut self, draft: &mut ResumeData, input: &str) -> ChatOutcome {
        let step = self.current_step();
        let value = input.trim();

        match step.kind {
            PromptKind::Options(_) => return ChatOutcome::Ignored,
            PromptKind::TextArea if value.is_empty() => return ChatOutcome::Ignored,
            _ => {}
        }
        if !value.is_empty() {
            self.push(Sender::User, value);
        }

        match step.field {
            ChatField::FullName => draft.full_name = value.to_string(),
            ChatField::Phone => draft.phone = non_blank(value),
            ChatField::Email => draft.email = non_blank(value),
            ChatField::Location => draft.location = non_blank(value),
            ChatField::Summary => draft.summary = non_blank(value),
            ChatField::ExperienceTitle => self.pending_title = value.to_string(),
            ChatField::ExperienceCompany => draft.experience.push(Experience {
                title: std::mem::take(&mut self.pending_title),
                company: value.to_string(),
                ..Experience::default()
            }),
            ChatField::SkillAdd => {
                if value.eq_ignore_ascii_case(SKILL_SENTINEL) {
                    return self.advance();
                }
                if value.is_empty() {
                    return ChatOutcome::Ignored;
                }
                draft.skills.push(Skill::named(value));
                self.push(Sender::Bot, SKILL_REPROMPT);
                return ChatOutcome::SkillAdded;
            }
            ChatField::Complete => return ChatOutcome::Ignored,
        }

        self.advance()
    }

    /// Handles a button press on the final step.
    pub fn choose(&mut self, option: &str) -> Option<ChatAction> {
        let PromptKind::Options(options) = self.current_step().kind else {
            return None;
        };
        if !options.contains(&option) {
            return None;
        }
        self.push(Sender::User, option);
        match option {
            SWITCH_TO_FORM => Some(ChatAction::SwitchMode(InputMode::Form)),
            _ => Some(ChatAction::Preview),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::models::SkillLevel;

    fn answer_all(session: &mut ChatSession, draft: &mut ResumeData, answers: &[&str]) {
        for a in answers {
            session.submit(draft, a);
        }
    }

    #[test]
    fn test_starts_with_first_question() {
        let session = ChatSession::new();
        assert_eq!(session.step_index(), 0);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
        assert_eq!(session.messages()[0].content, CHAT_FLOW[0].question);
    }

    #[test]
    fn test_each_answer_advances_exactly_one_step() {
        let mut session = ChatSession::new();
        let mut draft = ResumeData::default();
        let answers = ["Rajesh Kumar", "+91 98765 43210", "", "Mumbai", "Electrician", "Foreman", "ABC Construction"];
        for (i, answer) in answers.iter().enumerate() {
            let outcome = session.submit(&mut draft, answer);
            assert_eq!(outcome, ChatOutcome::Advanced(CHAT_FLOW[i + 1].field));
            assert_eq!(session.step_index(), i + 1);
        }
        assert_eq!(session.current_step().field, ChatField::SkillAdd);
    }

    #[test]
    fn test_answers_land_in_draft() {
        let mut session = ChatSession::new();
        let mut draft = ResumeData::default();
        answer_all(
            &mut session,
            &mut draft,
            &["Rajesh Kumar", "+91 98765 43210", "", "Mumbai", "I wire houses", "Electrician", "ABC Construction"],
        );
        assert_eq!(draft.full_name, "Rajesh Kumar");
        assert_eq!(draft.phone.as_deref(), Some("+91 98765 43210"));
        assert!(draft.email.is_none());
        assert_eq!(draft.location.as_deref(), Some("Mumbai"));
        assert_eq!(draft.summary.as_deref(), Some("I wire houses"));
        assert_eq!(draft.experience.len(), 1);
        assert_eq!(draft.experience[0].title, "Electrician");
        assert_eq!(draft.experience[0].company, "ABC Construction");
    }

    #[test]
    fn test_skill_step_loops_until_done() {
        let mut session = ChatSession::new();
        let mut draft = ResumeData::default();
        answer_all(&mut session, &mut draft, &["A", "1", "", "X", "About", "Cook", "Dhaba"]);
        let skill_step = session.step_index();

        assert_eq!(session.submit(&mut draft, "Cooking"), ChatOutcome::SkillAdded);
        assert_eq!(session.submit(&mut draft, "Baking"), ChatOutcome::SkillAdded);
        assert_eq!(session.step_index(), skill_step);
        assert_eq!(draft.skills.len(), 2);
        assert_eq!(draft.skills[0].level, Some(SkillLevel::Intermediate));
        assert_eq!(session.messages().last().unwrap().content, SKILL_REPROMPT);

        assert_eq!(
            session.submit(&mut draft, "DONE"),
            ChatOutcome::Advanced(ChatField::Complete)
        );
        assert_eq!(draft.skills.len(), 2);
        assert!(session.is_complete());
    }

    #[test]
    fn test_blank_skill_is_ignored() {
        let mut session = ChatSession::new();
        let mut draft = ResumeData::default();
        answer_all(&mut session, &mut draft, &["A", "1", "", "X", "About", "Cook", "Dhaba"]);
        assert_eq!(session.submit(&mut draft, "   "), ChatOutcome::Ignored);
        assert!(draft.skills.is_empty());
    }

    #[test]
    fn test_blank_summary_does_not_advance() {
        let mut session = ChatSession::new();
        let mut draft = ResumeData::default();
        answer_all(&mut session, &mut draft, &["A", "1", "", "X"]);
        assert_eq!(session.current_step().field, ChatField::Summary);
        assert_eq!(session.submit(&mut draft, ""), ChatOutcome::Ignored);
        assert_eq!(session.current_step().field, ChatField::Summary);
    }

    #[test]
    fn test_completion_options() {
        let mut session = ChatSession::new();
        let mut draft = ResumeData::default();
        answer_all(&mut session, &mut draft, &["A", "1", "", "X", "About", "Cook", "Dhaba", "done"]);

        assert_eq!(session.submit(&mut draft, "anything"), ChatOutcome::Ignored);
        assert_eq!(session.choose("Teleport"), None);
        assert_eq!(
            session.choose(SWITCH_TO_FORM),
            Some(ChatAction::SwitchMode(InputMode::Form))
        );
        assert_eq!(session.choose(PREVIEW_RESUME), Some(ChatAction::Preview));
    }

    #[test]
    fn test_choose_before_completion_is_none() {
        let mut session = ChatSession::new();
        assert_eq!(session.choose(SWITCH_TO_FORM), None);
    }
}
