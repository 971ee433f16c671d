use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

pub const APP_NAME_LEN: usize = 8;

/// Eight lowercase ASCII letters tagging one generated page.
///
/// Not checked for uniqueness; two runs may draw the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppNameError {
    #[error("app name must be 8 characters, got {0}")]
    Length(usize),
    #[error("app name must only contain lowercase ascii letters: {0:?}")]
    Alphabet(String),
}

impl AppName {
    /// Draw a fresh name from the given random source.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let name = (0..APP_NAME_LEN)
            .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
            .collect();
        Self(name)
    }

    pub fn parse(input: &str) -> Result<Self, AppNameError> {
        let len = input.chars().count();
        if len != APP_NAME_LEN {
            return Err(AppNameError::Length(len));
        }
        if !input.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(AppNameError::Alphabet(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AppName {
    type Err = AppNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
