use engine_logging::{engine_debug, engine_info, engine_warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use sitegen_core::{inspect, sanitize, AppName, GeneratedArtifact, GenerationRequest, Marker};
use thiserror::Error;

use crate::fallback::{FallbackChain, GenerationOutcome};
use crate::settings::GeneratorSettings;
use crate::types::ProviderError;

/// Prefix of every failure message returned by [`Pipeline::run_prompt`].
pub const ERROR_PREFIX: &str = "Error: ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Every provider failed or answered with blank text.
    #[error("Failed to generate website code")]
    ProviderUnavailable { attempts: Vec<ProviderError> },
    /// The sanitized text lacks required markers. The text itself is not kept.
    #[error("Generated code validation failed")]
    ValidationFailed { missing: Vec<Marker> },
}

/// generate → sanitize → validate → tag.
///
/// Holds no state between runs apart from the random source for app names.
pub struct Pipeline {
    chain: FallbackChain,
    rng: Box<dyn RngCore + Send>,
}

impl Pipeline {
    pub fn new(chain: FallbackChain) -> Self {
        Self::with_rng(chain, StdRng::from_entropy())
    }

    pub fn with_rng(chain: FallbackChain, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            chain,
            rng: Box::new(rng),
        }
    }

    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::new(FallbackChain::from_settings(settings))
    }

    pub async fn run(&mut self, prompt: &str) -> Result<GeneratedArtifact, PipelineError> {
        let request = GenerationRequest::new(prompt);
        let app_name = AppName::generate(self.rng.as_mut());
        engine_debug!("Drew app name {app_name}");

        let raw = match self
            .chain
            .generate(request.system_instructions(), &request.user_message())
            .await
        {
            GenerationOutcome::Generated { provider, text } => {
                engine_debug!("Using response from {provider}");
                text
            }
            GenerationOutcome::Exhausted { attempts } => {
                engine_warn!("All {} provider attempts failed", attempts.len());
                return Err(PipelineError::ProviderUnavailable { attempts });
            }
        };

        let document = sanitize(&raw);
        let report = inspect(document.as_str());
        if !report.is_valid() {
            let missing: Vec<String> = report.missing.iter().map(ToString::to_string).collect();
            engine_warn!("Generated document lacks {}", missing.join(", "));
            return Err(PipelineError::ValidationFailed {
                missing: report.missing,
            });
        }

        engine_info!(
            "Generated {app_name} ({} bytes of HTML)",
            document.as_str().len()
        );
        Ok(GeneratedArtifact::new(app_name, document))
    }

    /// String entry point: the rendered artifact, or `Error: ...`.
    pub async fn run_prompt(&mut self, prompt: &str) -> String {
        match self.run(prompt).await {
            Ok(artifact) => artifact.render(),
            Err(err) => format!("{ERROR_PREFIX}{err}"),
        }
    }
}
