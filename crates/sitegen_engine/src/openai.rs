use serde::{Deserialize, Serialize};

use crate::provider::{build_client, parse_body, require_api_key, send, ChatMessage, Provider};
use crate::settings::{ProviderSettings, OPENAI_API_KEY};
use crate::types::{FailureKind, ProviderError};

const NAME: &str = "openai";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI Chat Completions API.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    settings: ProviderSettings,
}

impl OpenAiProvider {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        NAME
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ProviderError> {
        let api_key = require_api_key(NAME, &self.settings, OPENAI_API_KEY)?;
        let client = build_client(NAME, &self.settings)?;

        let body = ChatRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };
        let request = client
            .post(self.settings.endpoint("v1/chat/completions"))
            .bearer_auth(api_key)
            .json(&body);

        let raw = send(NAME, request).await?;
        let payload: ChatResponse = parse_body(NAME, &raw)?;
        let choice = payload.choices.into_iter().next().ok_or_else(|| {
            ProviderError::new(NAME, FailureKind::MalformedResponse, "response has no choices")
        })?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
