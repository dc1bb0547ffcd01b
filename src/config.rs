use std::env;
use std::fmt;

use crate::error::LookupError;

/// OpenAI API base used by every lookup.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Prefix every plausible project API key starts with.
const API_KEY_PREFIX: &str = "sk-proj";

/// Central configuration, loaded once at startup.
///
/// The API key is read once at startup and passed explicitly to whatever
/// needs it. The .env file is loaded automatically via dotenvy.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Base URL of the chat-completion API. Always DEFAULT_OPENAI_BASE_URL
    /// when loaded; only set otherwise by code that builds a Config directly.
    pub openai_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing API key is not an error here: commands like `status` still
    /// work without it. Lookups call `require_openai` before any request.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        })
    }

    /// Build a config around an explicit key, using the default endpoint.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: api_key.into(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }

    /// Superficial shape check on the API key. Passing it says nothing about
    /// whether the key is accepted by the endpoint.
    pub fn api_key_looks_valid(&self) -> bool {
        self.openai_api_key.trim().starts_with(API_KEY_PREFIX)
    }

    /// Check that a plausible API key is configured.
    /// Call this before any operation that talks to the completion endpoint.
    pub fn require_openai(&self) -> Result<(), LookupError> {
        if !self.api_key_looks_valid() {
            return Err(LookupError::InvalidCredential);
        }
        Ok(())
    }

    /// The API key with everything but its prefix hidden, for display.
    pub fn redacted_api_key(&self) -> String {
        let key = self.openai_api_key.trim();
        if key.is_empty() {
            return "(not set)".to_string();
        }
        let visible: String = key.chars().take(API_KEY_PREFIX.len()).collect();
        format!("{visible}****")
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &self.redacted_api_key())
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}
