mod analysis;
mod config;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::evaluator::GeminiEvaluator;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AI Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Upload directory holds one scoped temp file per in-flight request
    std::fs::create_dir_all(&config.upload_dir).with_context(|| {
        format!(
            "failed to create upload directory {}",
            config.upload_dir.display()
        )
    })?;
    info!("Upload directory: {}", config.upload_dir.display());

    // Initialize LLM client and the evaluator built on it
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let evaluator = Arc::new(GeminiEvaluator::new(llm));

    // Build app state
    let state = AppState {
        evaluator,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // external clients (e.g. a hosted UI) may call the API

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
