mod client;
pub(crate) mod types;

use anyhow::Result;
use async_trait::async_trait;

use crate::traits::{GeneratedText, TextGenerator};
use client::HfClient;
use types::{GenerationParameters, GenerationRequest};

pub const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";

/// Output cap keeps drafts bounded; low temperature keeps them coherent.
const DEFAULT_MAX_NEW_TOKENS: u32 = 500;
const DEFAULT_TEMPERATURE: f64 = 0.1;

/// HuggingFace hosted-inference generation backend.
#[derive(Clone)]
pub struct HuggingFace {
    api_key: String,
    model: String,
    max_new_tokens: u32,
    temperature: f64,
    base_url: Option<String>,
}

impl HuggingFace {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self) -> HfClient {
        let client = HfClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }
}

#[async_trait]
impl TextGenerator for HuggingFace {
    async fn generate(&self, prompt: &str) -> Result<GeneratedText> {
        let request = GenerationRequest {
            inputs: prompt.to_string(),
            parameters: GenerationParameters {
                max_new_tokens: self.max_new_tokens,
                temperature: self.temperature,
                return_full_text: false,
            },
        };

        let content = self.client().text_generation(&self.model, &request).await?;
        Ok(GeneratedText::new(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huggingface_new_defaults() {
        let ai = HuggingFace::new("hf_test", DEFAULT_MODEL);
        assert_eq!(ai.model, "mistralai/Mixtral-8x7B-Instruct-v0.1");
        assert_eq!(ai.max_new_tokens, 500);
        assert_eq!(ai.temperature, 0.1);
        assert!(ai.base_url.is_none());
    }

    #[test]
    fn test_huggingface_builders() {
        let ai = HuggingFace::new("hf_test", "some/model")
            .with_base_url("http://localhost:9002")
            .with_max_new_tokens(64)
            .with_temperature(0.7);
        assert_eq!(ai.base_url, Some("http://localhost:9002".to_string()));
        assert_eq!(ai.max_new_tokens, 64);
        assert_eq!(ai.temperature, 0.7);
    }
}
