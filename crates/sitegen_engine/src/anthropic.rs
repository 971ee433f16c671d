use serde::{Deserialize, Serialize};

use crate::provider::{build_client, parse_body, require_api_key, send, ChatMessage, Provider};
use crate::settings::{ProviderSettings, ANTHROPIC_API_KEY};
use crate::types::ProviderError;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

const NAME: &str = "anthropic";
// The Messages API requires a limit.
const DEFAULT_MAX_TOKENS: u32 = 4000;

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Anthropic Messages API.
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    settings: ProviderSettings,
}

impl AnthropicProvider {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        NAME
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ProviderError> {
        let api_key = require_api_key(NAME, &self.settings, ANTHROPIC_API_KEY)?;
        let client = build_client(NAME, &self.settings)?;

        let body = MessagesRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            system,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };
        let request = client
            .post(self.settings.endpoint("v1/messages"))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body);

        let raw = send(NAME, request).await?;
        let payload: MessagesResponse = parse_body(NAME, &raw)?;
        Ok(payload
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect())
    }
}
