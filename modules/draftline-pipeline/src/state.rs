/// The single record threaded through the pipeline.
///
/// Constructed fresh per query submission, populated by the two steps in
/// order, read-only once handed back for rendering. Never persisted.
#[derive(Debug, Clone)]
pub struct PipelineState {
    /// Set once at construction, immutable thereafter.
    pub query: String,
    /// Appended to by the research step only.
    pub research_data: Vec<String>,
    /// Written exactly once, by the drafting step.
    pub draft: String,
    /// Append-only progress log; steps add entries, nothing edits or
    /// removes earlier ones.
    pub messages: Vec<String>,
}

impl PipelineState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            research_data: Vec::new(),
            draft: String::new(),
            messages: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = PipelineState::new("what is rust");
        assert_eq!(state.query, "what is rust");
        assert!(state.research_data.is_empty());
        assert!(state.draft.is_empty());
        assert!(state.messages.is_empty());
    }
}
