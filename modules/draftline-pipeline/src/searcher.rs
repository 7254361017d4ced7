use anyhow::{Context, Result};
use async_trait::async_trait;
use tavily_client::TavilyClient;

/// A single web search hit. Only `content` feeds the drafting prompt; title
/// and url are carried for display.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
}

/// Web search trait for the research step.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>>;
}

#[async_trait]
impl WebSearcher for TavilyClient {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>> {
        let results = TavilyClient::search(self, query, max_results)
            .await
            .context("Tavily search failed")?;

        Ok(results
            .into_iter()
            .map(|r| SearchResult {
                title: r.title,
                url: r.url,
                content: r.content,
            })
            .collect())
    }
}
