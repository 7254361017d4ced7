use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Form, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ai_client::{HuggingFace, OpenAi, TextGenerator};
use draftline_common::{Config, GenerationProvider};
use draftline_pipeline::Pipeline;
use tavily_client::TavilyClient;

mod templates;
use templates::*;

// --- App State ---

struct AppState {
    pipeline: Pipeline,
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("draftline=info".parse()?))
        .init();

    let config = Config::from_env();
    config.log_redacted();

    let searcher = Arc::new(TavilyClient::new(config.tavily_api_key.clone()));

    let generator: Arc<dyn TextGenerator> = match config.generation_provider {
        GenerationProvider::HuggingFace => Arc::new(HuggingFace::new(
            config.hf_api_key.clone(),
            config.generation_model.clone(),
        )),
        GenerationProvider::OpenAi => Arc::new(OpenAi::new(
            config.openai_api_key.clone(),
            config.generation_model.clone(),
        )),
    };

    let state = Arc::new(AppState {
        pipeline: Pipeline::new(searcher, generator, config.max_search_results),
    });

    let app = Router::new()
        .route("/", get(query_page).post(submit_query))
        .with_state(state)
        // Results are per-submission; never cache them
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Draftline web server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

async fn query_page() -> impl IntoResponse {
    Html(render_query_form(None))
}

#[derive(Deserialize)]
struct QueryForm {
    #[serde(default)]
    query: String,
}

async fn submit_query(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QueryForm>,
) -> impl IntoResponse {
    let query = form.query.trim();

    // Reject empty submissions before the pipeline is ever invoked.
    if query.is_empty() {
        return (
            StatusCode::OK,
            Html(render_query_form(Some("Please enter a query."))),
        );
    }

    match state.pipeline.run(query).await {
        Ok(result) => (StatusCode::OK, Html(render_results(&result))),
        Err(e) => {
            warn!(query, error = %e, "Pipeline run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error(
                    "Research failed; the query could not be answered. Please try again.",
                )),
            )
        }
    }
}
