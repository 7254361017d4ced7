use anyhow::{anyhow, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use super::types::*;

const HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";

pub(crate) struct HfClient {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
}

impl HfClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            http: reqwest::Client::new(),
            base_url: HF_INFERENCE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    pub async fn text_generation(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<String> {
        let url = format!("{}/{}", self.base_url, model);

        debug!(model, "HuggingFace text generation request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(anyhow!(
                "HuggingFace API error ({}): {}",
                status,
                error_text
            ));
        }

        let chunks: Vec<GenerationChunk> = response.json().await?;
        chunks
            .into_iter()
            .next()
            .map(|c| c.generated_text)
            .ok_or_else(|| anyhow!("Empty response from HuggingFace"))
    }
}
