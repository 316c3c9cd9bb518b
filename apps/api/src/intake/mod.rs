//! The four input modes that feed the draft resume.

pub mod chat;
pub mod handlers;
pub mod upload;
pub mod voice;
pub mod wizard;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Form,
    Chat,
    Voice,
    Image,
}

impl InputMode {
    pub const ALL: [InputMode; 4] = [
        InputMode::Form,
        InputMode::Chat,
        InputMode::Voice,
        InputMode::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Form => "form",
            InputMode::Chat => "chat",
            InputMode::Voice => "voice",
            InputMode::Image => "image",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown input mode '{0}'")]
pub struct UnknownInputMode(pub String);

impl FromStr for InputMode {
    type Err = UnknownInputMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownInputMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("chat".parse::<InputMode>().unwrap(), InputMode::Chat);
        assert_eq!(" Voice ".parse::<InputMode>().unwrap(), InputMode::Voice);
        assert!("fax".parse::<InputMode>().is_err());
    }

    #[test]
    fn test_default_is_form() {
        assert_eq!(InputMode::default(), InputMode::Form);
    }
}
