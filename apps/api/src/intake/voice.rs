//! Speech capture for a handful of single-value fields. The recogniser
//! itself lives on the client; this tracks its events and commits the
//! transcript into the draft.

use serde::Serialize;
use tracing::warn;

use crate::resume::models::ResumeData;

pub const UNSUPPORTED_MESSAGE: &str =
    "Speech recognition is not supported in your browser. Please try Chrome or Edge.";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VoiceField {
    FullName,
    Phone,
    Location,
    Summary,
}

impl VoiceField {
    pub const ALL: [VoiceField; 4] = [
        VoiceField::FullName,
        VoiceField::Phone,
        VoiceField::Location,
        VoiceField::Summary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VoiceField::FullName => "Full Name",
            VoiceField::Phone => "Phone Number",
            VoiceField::Location => "Location",
            VoiceField::Summary => "About Yourself",
        }
    }

    fn apply(&self, draft: &mut ResumeData, value: String) {
        match self {
            VoiceField::FullName => draft.full_name = value,
            VoiceField::Phone => draft.phone = Some(value),
            VoiceField::Location => draft.location = Some(value),
            VoiceField::Summary => draft.summary = Some(value),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecognizerSettings {
    pub continuous: bool,
    pub interim_results: bool,
    pub lang: &'static str,
}

impl Default for RecognizerSettings {
    fn default() -> Self {
        Self {
            continuous: true,
            interim_results: true,
            lang: "en-IN",
        }
    }
}

/// One entry of a recogniser result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechSegment {
    pub transcript: String,
    pub is_final: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Unsupported,
    Idle,
    Listening(VoiceField),
}

#[derive(Debug, Clone)]
pub struct VoiceCapture {
    supported: bool,
    active: Option<VoiceField>,
    listening: bool,
    transcript: String,
    error: Option<String>,
}

impl VoiceCapture {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            active: None,
            listening: false,
            transcript: String::new(),
            error: (!supported).then(|| UNSUPPORTED_MESSAGE.to_string()),
        }
    }

    pub fn settings(&self) -> RecognizerSettings {
        RecognizerSettings::default()
    }

    pub fn state(&self) -> CaptureState {
        match (self.supported, self.listening, self.active) {
            (false, _, _) => CaptureState::Unsupported,
            (true, true, Some(field)) => CaptureState::Listening(field),
            _ => CaptureState::Idle,
        }
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns false when recognition is unavailable.
    pub fn start(&mut self, field: VoiceField) -> bool {
        if !self.supported {
            return false;
        }
        self.active = Some(field);
        self.listening = true;
        self.transcript.clear();
        self.error = None;
        true
    }

    /// Final segments from `result_index` on win over interim ones.
    pub fn on_result(&mut self, results: &[SpeechSegment], result_index: usize) {
        let mut finals = String::new();
        let mut interim = String::new();
        for segment in results.iter().skip(result_index) {
            if segment.is_final {
                finals.push_str(&segment.transcript);
            } else {
                interim.push_str(&segment.transcript);
            }
        }
        self.transcript = if finals.is_empty() { interim } else { finals };
    }

    pub fn on_error(&mut self, code: &str) {
        warn!(code, "Speech recognition error");
        self.error = Some(format!("Error: {code}. Please try again."));
        self.listening = false;
        self.active = None;
    }

    /// The recogniser stopped on its own. The transcript is kept so that a
    /// later [`stop`](Self::stop) can still commit it.
    pub fn on_end(&mut self) {
        self.listening = false;
    }

    /// Commits the trimmed transcript into the active field if there is one.
    /// Returns the field written.
    pub fn stop(&mut self, draft: &mut ResumeData) -> Option<VoiceField> {
        let field = self.active.take();
        self.listening = false;
        let value = self.transcript.trim();
        match field {
            Some(field) if !value.is_empty() => {
                field.apply(draft, value.to_string());
                Some(field)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.listening = false;
        self.active = None;
        self.transcript.clear();
    }
}
