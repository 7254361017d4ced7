use std::env;
use std::str::FromStr;

use tracing::info;

/// Which hosted model serves the drafting step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationProvider {
    #[default]
    HuggingFace,
    OpenAi,
}

impl std::fmt::Display for GenerationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationProvider::HuggingFace => write!(f, "huggingface"),
            GenerationProvider::OpenAi => write!(f, "openai"),
        }
    }
}

impl FromStr for GenerationProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" => Ok(GenerationProvider::HuggingFace),
            "openai" => Ok(GenerationProvider::OpenAi),
            other => Err(format!("Unknown generation provider: {other}")),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Search
    pub tavily_api_key: String,
    pub max_search_results: u32,

    // Generation
    pub generation_provider: GenerationProvider,
    pub generation_model: String,
    pub hf_api_key: String,
    pub openai_api_key: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        let generation_provider = env::var("GENERATION_PROVIDER")
            .map(|s| {
                s.parse::<GenerationProvider>()
                    .unwrap_or_else(|e| panic!("{e}"))
            })
            .unwrap_or_default();

        // Only the selected provider's key is required.
        let (hf_api_key, openai_api_key) = match generation_provider {
            GenerationProvider::HuggingFace => (
                required_env("HF_API_KEY"),
                env::var("OPENAI_API_KEY").unwrap_or_default(),
            ),
            GenerationProvider::OpenAi => (
                env::var("HF_API_KEY").unwrap_or_default(),
                required_env("OPENAI_API_KEY"),
            ),
        };

        Self {
            tavily_api_key: required_env("TAVILY_API_KEY"),
            max_search_results: env::var("MAX_SEARCH_RESULTS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .expect("MAX_SEARCH_RESULTS must be a number"),
            generation_provider,
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| ai_client::huggingface::DEFAULT_MODEL.to_string()),
            hf_api_key,
            openai_api_key,
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }

    /// Log the loaded configuration with secrets masked.
    pub fn log_redacted(&self) {
        info!(
            provider = %self.generation_provider,
            model = %self.generation_model,
            max_search_results = self.max_search_results,
            web_host = %self.web_host,
            web_port = self.web_port,
            tavily_api_key = redact(&self.tavily_api_key),
            hf_api_key = redact(&self.hf_api_key),
            openai_api_key = redact(&self.openai_api_key),
            "Config loaded"
        );
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "unset"
    } else {
        "set"
    }
}
