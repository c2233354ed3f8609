use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.role != Role::System
    }
}

/// Reply produced by a reply strategy.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedReply {
    pub content: String,
    /// Mood detected by the local classifier, e.g. "Angry".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_mood: Option<&'static str>,
    pub source: &'static str, // "local" or "remote"
}
