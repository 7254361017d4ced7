use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use ai_client::TextGenerator;

use crate::searcher::WebSearcher;
use crate::state::PipelineState;

/// Per-item character cap when embedding research data into the drafting
/// prompt. `research_data` itself is never truncated; only the prompt is,
/// so oversized search results cannot blow past the model's input limit.
const PROMPT_ITEM_MAX_CHARS: usize = 2000;

/// The fixed two-step research-then-draft workflow.
///
/// No branching, no retries, no timeouts: the research step runs, then the
/// drafting step, and the populated state is returned. A search failure
/// aborts the run before drafting; a generation failure is absorbed into
/// the draft text and the run still completes.
pub struct Pipeline {
    searcher: Arc<dyn WebSearcher>,
    generator: Arc<dyn TextGenerator>,
    max_results: u32,
}

impl Pipeline {
    pub fn new(
        searcher: Arc<dyn WebSearcher>,
        generator: Arc<dyn TextGenerator>,
        max_results: u32,
    ) -> Self {
        Self {
            searcher,
            generator,
            max_results,
        }
    }

    /// Run both steps for one query and return the populated state.
    pub async fn run(&self, query: impl Into<String>) -> Result<PipelineState> {
        let mut state = PipelineState::new(query);
        self.research(&mut state).await?;
        self.draft(&mut state).await;
        Ok(state)
    }

    /// Research step: search the web and collect result contents.
    async fn research(&self, state: &mut PipelineState) -> Result<()> {
        info!(query = %state.query, max_results = self.max_results, "Research step starting");

        let results = self
            .searcher
            .search(&state.query, self.max_results)
            .await
            .context("Research step failed")?;

        for result in results {
            state.research_data.push(result.content);
        }

        let collected = state.research_data.len();
        state.messages.push(format!(
            "Research Agent: Collected {} items for '{}'",
            collected, state.query
        ));

        info!(query = %state.query, count = collected, "Research step complete");
        Ok(())
    }

    /// Drafting step: ask the model to synthesize the research data.
    /// Generation failures are stringified into the draft; this step never
    /// fails the run.
    async fn draft(&self, state: &mut PipelineState) {
        let prompt = build_prompt(&state.query, &state.research_data);

        let draft = match self.generator.generate(&prompt).await {
            Ok(text) => text.content,
            Err(e) => {
                warn!(query = %state.query, error = %e, "Draft generation failed");
                format!("Error: Failed to generate draft - {e}")
            }
        };

        state.draft = draft;
        state
            .messages
            .push(format!("Drafting Agent: Generated draft for '{}'", state.query));

        info!(query = %state.query, "Drafting step complete");
    }
}

/// Build the drafting prompt from the query and the collected research data.
fn build_prompt(query: &str, research_data: &[String]) -> String {
    let mut prompt = format!(
        "You are an expert writer. Based on the following research data, \
         draft a concise and accurate answer to the query: '{query}'.\n\nResearch Data:\n"
    );

    for (i, item) in research_data.iter().enumerate() {
        let bounded: String = item.chars().take(PROMPT_ITEM_MAX_CHARS).collect();
        let _ = writeln!(prompt, "{}. {}", i + 1, bounded);
    }

    prompt.push_str("\nProvide a clear, structured response.");
    prompt
}
