//! Configuration (layered: code > env > `.env` file).

use std::fmt;

use crate::error::AgentError;
use crate::provider::openai::DEFAULT_BASE_URL;
use crate::types::GenerationSettings;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection and generation settings for the completion service.
#[derive(Clone, PartialEq)]
pub struct AgentConfig {
    api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
    pub settings: GenerationSettings,
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("settings", &self.settings)
            .finish()
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentConfig {
    /// Config with no key, the default model, and deterministic sampling.
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            settings: GenerationSettings::builder().temperature(0.0).build(),
        }
    }

    /// Load from environment variables (`OPENAI_API_KEY`, `OPENAI_MODEL`,
    /// `OPENAI_BASE_URL`), reading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::new();
        config.api_key = get("OPENAI_API_KEY");
        if let Some(model) = get("OPENAI_MODEL") {
            config.model = model;
        }
        config.base_url = get("OPENAI_BASE_URL");
        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The API key, or a `Configuration` error when none is configured.
    pub fn api_key(&self) -> Result<&str, AgentError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AgentError::Configuration(
                    "Missing OPENAI_API_KEY: set it in the environment or a .env file".into(),
                )
            })
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key().is_ok()
    }

    /// Base URL requests will go to.
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}
