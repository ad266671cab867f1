use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Value shipped in `.env.example`; treated the same as no key at all
pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Settings for the remote completion endpoint
#[derive(Clone, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Bearer credential for the completion API
    pub api_key: Option<String>,
    /// Base URL, `/chat/completions` is appended
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            max_tokens: 500,
            timeout_secs: 30,
        }
    }
}

impl InterpreterConfig {
    /// Read `OPENAI_API_KEY`, `GOJO_OPENAI_BASE_URL`, `GOJO_OPENAI_MODEL` and
    /// `GOJO_OPENAI_TIMEOUT_SECS`, keeping defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            ..Self::default()
        };
        if let Ok(url) = env::var("GOJO_OPENAI_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(model) = env::var("GOJO_OPENAI_MODEL") {
            config.model = model;
        }
        if let Some(secs) = env::var("GOJO_OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout_secs = secs;
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// A credential is present, non-empty and not the placeholder
    pub fn is_remote_configured(&self) -> bool {
        matches!(
            self.api_key.as_deref(),
            Some(key) if !key.trim().is_empty() && key != PLACEHOLDER_API_KEY
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

// Keeps the key out of debug logs.
impl std::fmt::Debug for InterpreterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpreterConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
