//! Sitegen engine: provider IO, fallback, the generation pipeline and the preview server.
mod anthropic;
mod fallback;
mod openai;
mod pipeline;
mod preview;
mod provider;
mod settings;
mod types;

pub use anthropic::{AnthropicProvider, ANTHROPIC_VERSION};
pub use fallback::{FallbackChain, GenerationOutcome};
pub use openai::OpenAiProvider;
pub use pipeline::{Pipeline, PipelineError, ERROR_PREFIX};
pub use preview::{
    preview_router, serve_preview, stage_document, PreviewError, PreviewSettings, StagedPreview,
    PREVIEW_FILENAME,
};
pub use provider::Provider;
pub use settings::{GeneratorSettings, ProviderSettings};
pub use types::{FailureKind, ProviderError};
