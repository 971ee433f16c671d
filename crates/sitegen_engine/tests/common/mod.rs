#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use sitegen_engine::{FailureKind, Provider, ProviderError};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

pub const VALID_PAGE: &str =
    "```html\n<!DOCTYPE html><html><head><title>Hi</title></head><body>hello</body></html>\n```";

/// Provider with a canned answer that counts its calls.
pub struct StubProvider {
    name: &'static str,
    reply: Result<String, FailureKind>,
    calls: Arc<AtomicUsize>,
}

impl StubProvider {
    pub fn ok(name: &'static str, text: &str) -> Self {
        Self {
            name,
            reply: Ok(text.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(name: &'static str, kind: FailureKind) -> Self {
        Self {
            name,
            reply: Err(kind),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait::async_trait]
impl Provider for StubProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(kind) => Err(ProviderError::new(self.name, kind.clone(), "stubbed failure")),
        }
    }
}

pub fn count(calls: &Arc<AtomicUsize>) -> usize {
    calls.load(Ordering::SeqCst)
}
