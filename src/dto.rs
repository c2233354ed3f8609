//! Request/response bodies for the chat and mood endpoints.
//!
//! Request validation is expressed with `validator` derives and turned into
//! `AppError::Validation` by [`validate_request`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};
use crate::models::chat::{ChatMessage, GeneratedReply};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Please type something.".into());
        return Err(err);
    }
    Ok(())
}

/// Runs `validator` checks and reports the first failure message.
pub fn validate_request<T: Validate>(req: &T) -> AppResult<()> {
    req.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());
        AppError::Validation(message)
    })
}

// ============================================================================
// Moods
// ============================================================================

/// POST /api/moods
#[derive(Debug, Deserialize, Validate)]
pub struct LogMoodRequest {
    #[validate(custom = "not_blank")]
    #[validate(length(max = 2000, message = "Mood must be under 2000 characters"))]
    pub mood: String,
}

// ============================================================================
// Chat
// ============================================================================

/// POST /api/chat and POST /api/chat/sessions/{id}/messages
#[derive(Debug, Deserialize, Validate)]
pub struct ChatMessageRequest {
    #[validate(custom = "not_blank")]
    #[validate(length(max = 4000, message = "Message must be under 4000 characters"))]
    pub content: String,
}

/// User and assistant turns only; the system prompt is never sent back.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessage>,
}

impl SessionResponse {
    pub fn new(session_id: Uuid, history: Vec<ChatMessage>) -> Self {
        Self {
            session_id,
            messages: history.into_iter().filter(ChatMessage::is_visible).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatTurnResponse {
    pub reply: GeneratedReply,
    #[serde(flatten)]
    pub session: SessionResponse,
}

/// GET /api/info
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub reply_strategy: &'static str,
    pub disclaimer: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_mood_is_rejected() {
        let req = LogMoodRequest { mood: "  \n ".into() };
        match validate_request(&req) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Please type something."),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_long_message_is_rejected() {
        let req = ChatMessageRequest {
            content: "a".repeat(4001),
        };
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn test_valid_message_passes() {
        let req = ChatMessageRequest { content: "I'm nervous".into() };
        assert!(validate_request(&req).is_ok());
        let req = LogMoodRequest { mood: "a".repeat(2000) };
        assert!(validate_request(&req).is_ok());
    }

    #[test]
    fn test_session_response_hides_system_prompt() {
        let resp = SessionResponse::new(
            Uuid::new_v4(),
            vec![ChatMessage::system("prompt"), ChatMessage::user("hi")],
        );
        assert_eq!(resp.messages, vec![ChatMessage::user("hi")]);
    }

    #[test]
    fn test_chat_turn_response_is_flat() {
        let resp = ChatTurnResponse {
            reply: GeneratedReply {
                content: "hello".into(),
                detected_mood: Some("Happy"),
                source: "local",
            },
            session: SessionResponse::new(Uuid::new_v4(), vec![]),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("session_id").is_some());
        assert_eq!(json["reply"]["detected_mood"], "Happy");
    }
}
