//! chat-relay server
//!
//! Serves `POST /api/chat`, forwarding each prompt to Gemini.

use chat_relay::api::{create_router, AppState};
use chat_relay::config::ServerConfig;
use chat_relay::forwarder::PromptForwarder;
use chat_relay::llm::{GeminiService, LoggingService};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    chat_relay::logging::init_json();

    let config = ServerConfig::from_env();
    if !config.gemini.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set; every chat request will fail");
    }

    let llm = Arc::new(LoggingService::new(Arc::new(GeminiService::new(&config.gemini)?)));
    let forwarder = PromptForwarder::new(llm);
    tracing::info!(model = %forwarder.model_id(), "Prompt forwarder ready");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(AppState::new(forwarder))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("chat-relay listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
