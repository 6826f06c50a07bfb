use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use randevu::cli;
use randevu::config::AppConfig;
use randevu::handlers;
use randevu::services::dialogue::DialogueConfig;
use randevu::services::generative::gemini::GeminiProvider;
use randevu::services::nlu::wit::WitClient;
use randevu::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;

    let classifier = WitClient::new(config.wit_token.clone());
    let generative = GeminiProvider::new(config.gemini_api_key.clone(), config.gemini_model.clone());

    let state = Arc::new(AppState {
        dialogue: DialogueConfig::default(),
        classifier: Box::new(classifier),
        generative: Box::new(generative),
        sessions: Mutex::new(HashMap::new()),
        config,
    });

    match std::env::args().nth(1).as_deref() {
        Some("serve") => serve(state).await,
        _ => cli::run(state).await,
    }
}

async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let port = state.config.port;

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
