use anyhow::Result;
use async_trait::async_trait;

/// Text produced by a generation backend.
///
/// Every backend returns this one declared shape, so callers never see
/// provider-specific response envelopes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub content: String,
}

impl GeneratedText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Anything that can generate text from a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedText>;
}
