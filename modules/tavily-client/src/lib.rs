pub mod error;
pub mod types;

pub use error::{Result, TavilyError};
pub use types::{SearchRequest, SearchResponse, SearchResult};

const BASE_URL: &str = "https://api.tavily.com";

pub struct TavilyClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TavilyClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Run one web search, returning at most `max_results` ranked results.
    /// One outbound request per call; no retry, no caching.
    pub async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>> {
        tracing::info!(query, max_results, "Tavily search");

        let request = SearchRequest {
            api_key: self.api_key.clone(),
            query: query.to_string(),
            max_results,
            search_depth: "basic".to_string(),
        };

        let url = format!("{}/search", self.base_url);
        let resp = self.client.post(&url).json(&request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TavilyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let api_resp: SearchResponse = resp.json().await?;
        let results = cap(api_resp.results, max_results);

        tracing::info!(query, count = results.len(), "Tavily search complete");
        Ok(results)
    }
}

/// Tavily honors max_results, but the cap is our contract: enforce it on
/// whatever the service returned.
fn cap(mut results: Vec<SearchResult>, max_results: u32) -> Vec<SearchResult> {
    results.truncate(max_results as usize);
    results
}
