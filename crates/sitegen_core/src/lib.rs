//! Sitegen core: pure text pipeline for turning a model response into a tagged HTML document.
mod app_name;
mod artifact;
mod markers;
mod prompt;
mod sanitize;
mod validate;

pub use app_name::{AppName, AppNameError, APP_NAME_LEN};
pub use artifact::{ArtifactError, GeneratedArtifact, APP_NAME_KEY};
pub use markers::Marker;
pub use prompt::{GenerationRequest, SYSTEM_INSTRUCTIONS};
pub use sanitize::{sanitize, SanitizedDocument};
pub use validate::{inspect, validate, ValidationReport};
