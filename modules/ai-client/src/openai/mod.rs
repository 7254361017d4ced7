mod client;
pub(crate) mod types;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::traits::{GeneratedText, TextGenerator};
use client::OpenAiClient;
use types::{ChatRequest, WireMessage};

const DEFAULT_MAX_TOKENS: u32 = 500;
const DEFAULT_TEMPERATURE: f64 = 0.1;

/// OpenAI-compatible chat-completions generation backend.
#[derive(Clone)]
pub struct OpenAi {
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
    base_url: Option<String>,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> OpenAiClient {
        let client = OpenAiClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAi {
    async fn generate(&self, prompt: &str) -> Result<GeneratedText> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![WireMessage::user(prompt)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self.client().chat(&request).await?;
        let content = response
            .text()
            .ok_or_else(|| anyhow!("No response from OpenAI"))?;
        Ok(GeneratedText::new(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_new_defaults() {
        let ai = OpenAi::new("sk-test", "gpt-4o-mini");
        assert_eq!(ai.model, "gpt-4o-mini");
        assert_eq!(ai.max_tokens, 500);
        assert_eq!(ai.temperature, 0.1);
    }

    #[test]
    fn test_openai_with_base_url() {
        let ai = OpenAi::new("sk-test", "gpt-4o-mini").with_base_url("https://custom.api.com/v1");
        assert_eq!(ai.base_url, Some("https://custom.api.com/v1".to_string()));
    }
}
