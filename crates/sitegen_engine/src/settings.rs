use std::fmt;
use std::time::Duration;

pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ANTHROPIC_MODEL: &str = "ANTHROPIC_MODEL";
pub const ANTHROPIC_BASE_URL: &str = "ANTHROPIC_BASE_URL";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";

/// How to reach one text-completion provider.
///
/// Only the connection has a timeout; a slow completion is waited for.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Completion limit; left out of the request when `None`.
    pub max_tokens: Option<u32>,
    pub connect_timeout: Duration,
}

impl ProviderSettings {
    pub fn anthropic() -> Self {
        Self {
            api_key: None,
            model: "claude-3-opus-20240229".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            max_tokens: Some(4000),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn openai() -> Self {
        Self {
            api_key: None,
            model: "gpt-4".to_string(),
            base_url: "https://api.openai.com".to_string(),
            max_tokens: None,
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

// Keeps API keys out of log output.
impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Primary and secondary provider settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub primary: ProviderSettings,
    pub secondary: ProviderSettings,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            primary: ProviderSettings::anthropic(),
            secondary: ProviderSettings::openai(),
        }
    }
}

impl GeneratorSettings {
    /// Read credentials and overrides from the process environment.
    ///
    /// A missing key is not an error here; the provider reports it when called.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut settings = Self::default();

        settings.primary.api_key = var(ANTHROPIC_API_KEY);
        if let Some(model) = var(ANTHROPIC_MODEL) {
            settings.primary.model = model;
        }
        if let Some(url) = var(ANTHROPIC_BASE_URL) {
            settings.primary.base_url = url;
        }

        settings.secondary.api_key = var(OPENAI_API_KEY);
        if let Some(model) = var(OPENAI_MODEL) {
            settings.secondary.model = model;
        }
        if let Some(url) = var(OPENAI_BASE_URL) {
            settings.secondary.base_url = url;
        }

        settings
    }
}
