// Completion client trait — the swap-ready abstraction over the LLM provider.

use anyhow::Result;
use async_trait::async_trait;

use super::prompt::Prompt;

/// Trait for sending a system + user prompt to a chat-completion endpoint.
/// Implementations must be async because providers are HTTP APIs.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the prompt and return the assistant's reply text, untrimmed.
    async fn complete(&self, prompt: &Prompt) -> Result<String>;
}
