// src/main.rs

use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use gabble_backend::api::http::http_router;
use gabble_backend::config::CONFIG;
use gabble_backend::llm::CompletionClient;
use gabble_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let level = CONFIG.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Gabble voice-companion backend");
    info!("Model: {}", CONFIG.model);
    if CONFIG.api_key.is_none() {
        warn!("PERPLEXITY_API_KEY is not set; /chat will return errors until it is configured");
    }

    let llm_client = Arc::new(CompletionClient::from_config()?);
    let app_state = Arc::new(AppState::new(llm_client));

    // The browser client calls this cross-origin; "*" keeps local dev open,
    // a concrete origin locks production down.
    let cors = match CONFIG.cors_origin.as_str() {
        "*" => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        origin => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = http_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("HTTP server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
