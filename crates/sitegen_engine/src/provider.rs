use serde::Serialize;

use crate::settings::ProviderSettings;
use crate::types::{FailureKind, ProviderError};

/// A text-completion service: system instructions and a user prompt in, text out.
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

pub(crate) fn require_api_key<'a>(
    provider: &str,
    settings: &'a ProviderSettings,
    variable: &str,
) -> Result<&'a str, ProviderError> {
    settings.api_key.as_deref().ok_or_else(|| {
        ProviderError::new(
            provider,
            FailureKind::MissingCredentials,
            format!("{variable} is not set"),
        )
    })
}

pub(crate) fn build_client(
    provider: &str,
    settings: &ProviderSettings,
) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .build()
        .map_err(|err| ProviderError::new(provider, FailureKind::Network, err.to_string()))
}

/// Send a prepared request and return the body of a successful response.
pub(crate) async fn send(
    provider: &str,
    request: reqwest::RequestBuilder,
) -> Result<String, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|err| map_reqwest_error(provider, err))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(ProviderError::new(
            provider,
            FailureKind::HttpStatus(status.as_u16()),
            format!("{status}: {}", detail.trim()),
        ));
    }

    response
        .text()
        .await
        .map_err(|err| map_reqwest_error(provider, err))
}

pub(crate) fn parse_body<T: serde::de::DeserializeOwned>(
    provider: &str,
    body: &str,
) -> Result<T, ProviderError> {
    serde_json::from_str(body)
        .map_err(|err| ProviderError::new(provider, FailureKind::MalformedResponse, err.to_string()))
}

fn map_reqwest_error(provider: &str, err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        return ProviderError::new(provider, FailureKind::Timeout, err.to_string());
    }
    ProviderError::new(provider, FailureKind::Network, err.to_string())
}
