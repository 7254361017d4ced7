//! Fixture implementations for integration testing.
//!
//! Canned and failing stand-ins for the two external services, so pipeline
//! behavior can be exercised without network access:
//!
//! - `FixtureSearcher` — static canned results, honors the result cap
//! - `FailingSearcher` — always errors, for the unrecovered search path
//! - `FixtureGenerator` — static draft text, records received prompts
//! - `FailingGenerator` — always errors, for the stringified-draft path

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use ai_client::{GeneratedText, TextGenerator};

use crate::searcher::{SearchResult, WebSearcher};

// --- FixtureSearcher ---

pub struct FixtureSearcher {
    results: Vec<SearchResult>,
}

impl FixtureSearcher {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    /// Convenience constructor from bare content strings.
    pub fn from_contents(contents: &[&str]) -> Self {
        Self::new(
            contents
                .iter()
                .enumerate()
                .map(|(i, content)| SearchResult {
                    title: format!("Result {}", i + 1),
                    url: format!("https://example.com/{}", i + 1),
                    content: content.to_string(),
                })
                .collect(),
        )
    }
}

#[async_trait]
impl WebSearcher for FixtureSearcher {
    async fn search(&self, _query: &str, max_results: u32) -> Result<Vec<SearchResult>> {
        let mut results = self.results.clone();
        results.truncate(max_results as usize);
        Ok(results)
    }
}

// --- FailingSearcher ---

pub struct FailingSearcher {
    message: String,
}

impl FailingSearcher {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl WebSearcher for FailingSearcher {
    async fn search(&self, _query: &str, _max_results: u32) -> Result<Vec<SearchResult>> {
        Err(anyhow!("{}", self.message))
    }
}

// --- FixtureGenerator ---

pub struct FixtureGenerator {
    response: String,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl FixtureGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// How many times `generate` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompt received on the most recent invocation.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FixtureGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedText> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        Ok(GeneratedText::new(self.response.clone()))
    }
}

// --- FailingGenerator ---

pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedText> {
        Err(anyhow!("{}", self.message))
    }
}
