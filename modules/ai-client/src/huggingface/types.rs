use serde::{Deserialize, Serialize};

/// Request body for the hosted text-generation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    /// When false the API returns only the continuation, not the prompt.
    pub return_full_text: bool,
}

/// The API returns a one-element array per input.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationChunk {
    pub generated_text: String,
}
