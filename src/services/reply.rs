use std::sync::Arc;

use async_trait::async_trait;

use crate::classifier::MoodClassifier;
use crate::config::{Config, ReplyStrategyKind};
use crate::error::{AppError, AppResult};
use crate::models::chat::{ChatMessage, GeneratedReply, Role};
use crate::responses::select_response;
use crate::services::openrouter::OpenRouterClient;

/// Produces the bot's next turn for a conversation whose last message is
/// the user's.
#[async_trait]
pub trait ReplyStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate_reply(&self, conversation: &[ChatMessage]) -> AppResult<GeneratedReply>;
}

fn latest_user_message(conversation: &[ChatMessage]) -> AppResult<&str> {
    conversation
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Please type something.".into()))
}

/// Classifies the latest user message and answers with a canned reply for
/// the detected mood.
pub struct LocalReplyStrategy {
    classifier: Arc<MoodClassifier>,
}

impl LocalReplyStrategy {
    pub fn new(classifier: Arc<MoodClassifier>) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl ReplyStrategy for LocalReplyStrategy {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn generate_reply(&self, conversation: &[ChatMessage]) -> AppResult<GeneratedReply> {
        let input = latest_user_message(conversation)?;
        let category = self.classifier.classify(input);
        let content = select_response(category, &mut rand::thread_rng());

        tracing::debug!(mood = category.display_name(), "Local reply selected");

        Ok(GeneratedReply {
            content: content.to_string(),
            detected_mood: Some(category.display_name()),
            source: "local",
        })
    }
}

/// Forwards the whole conversation to OpenRouter.
pub struct RemoteReplyStrategy {
    client: OpenRouterClient,
}

impl RemoteReplyStrategy {
    pub fn new(client: OpenRouterClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReplyStrategy for RemoteReplyStrategy {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn generate_reply(&self, conversation: &[ChatMessage]) -> AppResult<GeneratedReply> {
        latest_user_message(conversation)?;

        let content = self
            .client
            .complete(conversation)
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        Ok(GeneratedReply {
            content,
            detected_mood: None,
            source: "remote",
        })
    }
}

pub fn build_strategy(
    config: &Config,
    classifier: Arc<MoodClassifier>,
) -> anyhow::Result<Arc<dyn ReplyStrategy>> {
    let strategy: Arc<dyn ReplyStrategy> = match config.reply_strategy {
        ReplyStrategyKind::Local => Arc::new(LocalReplyStrategy::new(classifier)),
        ReplyStrategyKind::Remote => {
            let client = OpenRouterClient::from_config(config)?;
            tracing::info!(model = %client.model(), "Using OpenRouter for chat replies");
            Arc::new(RemoteReplyStrategy::new(client))
        }
    };
    Ok(strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::replies_for;
    use crate::models::mood::{MoodCategory, ReplyCategory};
    use crate::services::openrouter::mock;
    use axum::http::StatusCode;

    fn local() -> LocalReplyStrategy {
        LocalReplyStrategy::new(Arc::new(MoodClassifier::train()))
    }

    #[tokio::test]
    async fn test_local_reply_matches_detected_mood() {
        let conversation = vec![ChatMessage::user("I am furious")];
        let reply = local().generate_reply(&conversation).await.unwrap();

        assert_eq!(reply.source, "local");
        assert_eq!(reply.detected_mood, Some("Angry"));
        let angry = replies_for(ReplyCategory::Mood(MoodCategory::Angry));
        assert!(angry.contains(&reply.content.as_str()));
    }

    #[tokio::test]
    async fn test_local_uses_latest_user_turn() {
        let conversation = vec![
            ChatMessage::user("I am furious"),
            ChatMessage::assistant("Take a breath."),
            ChatMessage::user("Feeling anxious"),
        ];
        let reply = local().generate_reply(&conversation).await.unwrap();
        assert_eq!(reply.detected_mood, Some("Anxious"));
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_classifier() {
        let result = local().generate_reply(&[ChatMessage::user("   ")]).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = local().generate_reply(&[ChatMessage::system("prompt")]).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_remote_reply() {
        let base = mock::echo_server().await;
        let client = OpenRouterClient::new("sk-or-test", "m", &base).unwrap();
        let strategy = RemoteReplyStrategy::new(client);

        let reply = strategy
            .generate_reply(&[ChatMessage::user("hello")])
            .await
            .unwrap();
        assert_eq!(reply.source, "remote");
        assert!(reply.detected_mood.is_none());
        assert_eq!(reply.content, "1 messages, last: hello");
    }

    #[tokio::test]
    async fn test_remote_failure_is_upstream_error() {
        let base = mock::failing_server(StatusCode::UNAUTHORIZED).await;
        let client = OpenRouterClient::new("bad", "m", &base).unwrap();
        let strategy = RemoteReplyStrategy::new(client);

        let result = strategy.generate_reply(&[ChatMessage::user("hello")]).await;
        assert!(matches!(result, Err(AppError::Upstream(_))));
    }

    #[test]
    fn test_build_strategy_follows_config() {
        let classifier = Arc::new(MoodClassifier::train());
        let mut config = Config::for_tests("mood_log.csv".into());
        assert_eq!(build_strategy(&config, classifier.clone()).unwrap().name(), "local");

        config.reply_strategy = ReplyStrategyKind::Remote;
        config.openrouter_api_key = "sk-or-test".into();
        assert_eq!(build_strategy(&config, classifier).unwrap().name(), "remote");
    }
}
