//! OpenRouter chat-completion client (OpenAI-compatible API).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::chat::ChatMessage;

/// Seeds every remote conversation.
pub const SYSTEM_PROMPT: &str = "You are a warm, empathetic, and non-judgmental mental health assistant. \
Your goal is to listen carefully and deeply understand the user's feelings and experiences. \
Respond with thoughtful, personalized, and supportive advice, just like a compassionate psychologist or counselor. \
Provide motivational words, practical mental wellness tips, coping strategies, and encouragement. \
Validate the user's feelings and gently guide them towards self-care and a positive mindset. \
Always be respectful, kind, and patient. \
Do not give medical or diagnostic advice. \
Make the conversation feel safe and supportive.";

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(Clone)]
pub struct OpenRouterClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenRouterClient {
    pub fn new(api_key: &str, model: &str, base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            &config.openrouter_api_key,
            &config.openrouter_model,
            &config.openrouter_base_url,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the ordered conversation and returns the assistant's reply.
    pub async fn complete(&self, history: &[ChatMessage]) -> anyhow::Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages: history,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenRouter API error {}: {}", status, body);
        }

        let completion: CompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("OpenRouter returned no reply"))?;

        tracing::debug!(model = %self.model, turns = history.len(), "OpenRouter completion received");
        Ok(content)
    }
}

/// Throw-away HTTP servers standing in for OpenRouter in tests.
#[cfg(test)]
pub(crate) mod mock {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Replies with how many messages it received and the last one's content.
    pub async fn echo_server() -> String {
        let app = Router::new().route(
            "/chat/completions",
            post(|Json(body): Json<Value>| async move {
                let messages = body["messages"].as_array().cloned().unwrap_or_default();
                let last = messages
                    .last()
                    .and_then(|m| m["content"].as_str())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({
                    "choices": [{
                        "message": {
                            "role": "assistant",
                            "content": format!("{} messages, last: {}", messages.len(), last)
                        }
                    }]
                }))
            }),
        );
        serve(app).await
    }

    pub async fn failing_server(status: StatusCode) -> String {
        let app = Router::new().route(
            "/chat/completions",
            post(move || async move { (status, Json(json!({"error": {"message": "nope"}}))) }),
        );
        serve(app).await
    }
}
