// OpenAI chat-completions implementation.
//
// Sends the two-message prompt to `{base_url}/chat/completions` with a
// bearer token. Model and temperature are fixed; callers only control the
// prompt contents through the Query.
//
// API docs: https://platform.openai.com/docs/api-reference/chat/create

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::Prompt;
use super::traits::CompletionClient;
use crate::config::Config;

/// Model used for every lookup.
pub const MODEL: &str = "gpt-4o";

/// Sampling temperature used for every lookup.
pub const TEMPERATURE: f32 = 0.5;

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// Create a client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("topicmine/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key: config.openai_api_key.trim().to_string(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to call chat completions API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Chat completions API returned {}: {}", status, body);
        }

        let result: ChatResponse = response
            .json()
            .await
            .context("Failed to parse chat completions response")?;

        let content = result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .context("Chat completions response contained no message content")?;

        debug!(reply_len = content.len(), model = MODEL, "Received completion");
        Ok(content)
    }
}

// --- Chat completions request/response types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}
