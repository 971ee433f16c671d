use engine_logging::{engine_info, engine_warn};

use crate::anthropic::AnthropicProvider;
use crate::openai::OpenAiProvider;
use crate::provider::Provider;
use crate::settings::GeneratorSettings;
use crate::types::{FailureKind, ProviderError};

/// Result of walking the provider list once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated { provider: String, text: String },
    Exhausted { attempts: Vec<ProviderError> },
}

/// Ordered providers, each tried at most once.
///
/// The next provider is only called after the previous one failed. There is
/// no backoff and no second pass over the list.
pub struct FallbackChain {
    providers: Vec<Box<dyn Provider>>,
}

impl FallbackChain {
    pub fn new(primary: Box<dyn Provider>, secondary: Box<dyn Provider>) -> Self {
        Self::from_providers(vec![primary, secondary])
    }

    pub fn from_providers(providers: Vec<Box<dyn Provider>>) -> Self {
        Self { providers }
    }

    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::new(
            Box::new(AnthropicProvider::new(settings.primary.clone())),
            Box::new(OpenAiProvider::new(settings.secondary.clone())),
        )
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub async fn generate(&self, system: &str, prompt: &str) -> GenerationOutcome {
        let mut attempts = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            engine_info!("Requesting completion from {}", provider.name());
            let result = provider.complete(system, prompt).await.and_then(|text| {
                if text.trim().is_empty() {
                    Err(ProviderError::new(
                        provider.name(),
                        FailureKind::EmptyResponse,
                        "provider returned no text",
                    ))
                } else {
                    Ok(text)
                }
            });

            match result {
                Ok(text) => {
                    engine_info!(
                        "{} returned {} bytes after {} failed attempt(s)",
                        provider.name(),
                        text.len(),
                        attempts.len()
                    );
                    return GenerationOutcome::Generated {
                        provider: provider.name().to_string(),
                        text,
                    };
                }
                Err(err) => {
                    engine_warn!("{err}");
                    attempts.push(err);
                }
            }
        }

        GenerationOutcome::Exhausted { attempts }
    }
}
