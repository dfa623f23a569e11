//! BioVenture Nexus web server
//!
//! Run with: cargo run -p bioventure-web

use std::sync::Arc;

use bioventure_config::Config;
use bioventure_llm::{GeminiBackend, GenerationOptions, PlanGenerator};
use bioventure_web::router::build_router;
use bioventure_web::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bioventure=debug,info")),
        )
        .init();

    let config = Config::load()?;
    // Fail fast: without a credential no blueprint can ever be generated.
    let api_key = config.llm.resolve_api_key()?;

    let backend = GeminiBackend::new(api_key, config.llm.model.clone())?
        .with_base_url(config.llm.base_url.clone())
        .with_timeout(config.llm.request_timeout())?;
    let options = GenerationOptions {
        temperature: config.llm.temperature,
        thinking_budget: config.llm.thinking_budget,
        max_output_tokens: config.llm.max_output_tokens,
    };
    let generator = PlanGenerator::new(Arc::new(backend), options);

    let state = AppState::new(generator, config.ui.loading_message_interval());
    let controller = state.controller.clone();
    let app = build_router(state);

    let addr = config.server.socket_addr()?;
    info!(%addr, model = %config.llm.model, "BioVenture Nexus listening");
    info!("Open your browser and navigate to http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    controller.teardown();
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
