use std::fmt;

use thiserror::Error;

use crate::app_name::{AppName, AppNameError};
use crate::sanitize::{sanitize, SanitizedDocument};

pub const APP_NAME_KEY: &str = "APP_NAME";

/// The tagged document handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub app_name: AppName,
    pub document: SanitizedDocument,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("artifact has no blank line after the header")]
    MissingSeparator,
    #[error("artifact header is not of the form APP_NAME='...': {0:?}")]
    MalformedHeader(String),
    #[error("invalid app name: {0}")]
    AppName(#[from] AppNameError),
    #[error("artifact body is not a sanitized document")]
    UnsanitizedBody,
}

impl GeneratedArtifact {
    pub fn new(app_name: AppName, document: SanitizedDocument) -> Self {
        Self { app_name, document }
    }

    pub fn header(&self) -> String {
        format!("{APP_NAME_KEY}='{}'", self.app_name)
    }

    /// `APP_NAME='<name>'`, a blank line, then the document.
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.header(), self.document)
    }

    /// Reverse of [`GeneratedArtifact::render`].
    pub fn parse(text: &str) -> Result<Self, ArtifactError> {
        let (header, body) = text
            .split_once("\n\n")
            .ok_or(ArtifactError::MissingSeparator)?;

        let name = header
            .strip_prefix(APP_NAME_KEY)
            .and_then(|rest| rest.strip_prefix("='"))
            .and_then(|rest| rest.strip_suffix('\''))
            .ok_or_else(|| ArtifactError::MalformedHeader(header.to_string()))?;
        let app_name = AppName::parse(name)?;

        let document = sanitize(body);
        if document.as_str() != body {
            return Err(ArtifactError::UnsanitizedBody);
        }
        Ok(Self { app_name, document })
    }
}

impl fmt::Display for GeneratedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
