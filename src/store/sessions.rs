use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::chat::ChatMessage;

struct ChatSession {
    messages: Vec<ChatMessage>,
    last_active: Instant,
}

/// In-memory conversation histories, one per anonymous chat session.
/// Nothing here is persisted.
#[derive(Clone, Default)]
pub struct ChatSessions {
    sessions: Arc<Mutex<HashMap<Uuid, ChatSession>>>,
}

impl ChatSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, seed: Vec<ChatMessage>) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.lock().await;
        sessions.insert(
            id,
            ChatSession {
                messages: seed,
                last_active: Instant::now(),
            },
        );
        id
    }

    pub async fn history(&self, id: Uuid) -> Option<Vec<ChatMessage>> {
        let sessions = self.sessions.lock().await;
        sessions.get(&id).map(|s| s.messages.clone())
    }

    /// Appends a message and returns the full history including it, plus the
    /// index it was stored at (for `retract`).
    pub async fn push(&self, id: Uuid, message: ChatMessage) -> Option<(Vec<ChatMessage>, usize)> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions.get_mut(&id)?;
        let index = session.messages.len();
        session.messages.push(message);
        session.last_active = Instant::now();
        Some((session.messages.clone(), index))
    }

    /// Removes `message` previously pushed at `index`. Turns appended after it
    /// by other requests are kept. Returns whether anything was removed.
    pub async fn retract(&self, id: Uuid, index: usize, message: &ChatMessage) -> bool {
        let mut sessions = self.sessions.lock().await;
        let Some(session) = sessions.get_mut(&id) else {
            return false;
        };

        let position = if session.messages.get(index) == Some(message) {
            Some(index)
        } else {
            session.messages.iter().rposition(|m| m == message)
        };
        match position {
            Some(i) => {
                session.messages.remove(i);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Removes sessions idle for longer than `ttl`. Returns how many were dropped.
    pub async fn cleanup(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        let now = Instant::now();
        sessions.retain(|_, s| now.duration_since(s.last_active) < ttl);
        before - sessions.len()
    }
}
