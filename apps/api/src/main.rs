mod config;
mod errors;
mod extract;
mod llm_client;
mod matching;
mod profiles;
mod routes;
mod screening;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::profiles::store::JsonProfileStore;
use crate::routes::build_router;
use crate::state::{AppState, UploadStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Filter API v{}", env!("CARGO_PKG_VERSION"));

    // AI summaries need both the feature flag and a key.
    let llm = if config.use_ai_summary {
        match &config.anthropic_api_key {
            Some(key) => {
                info!("AI summary client initialized (model: {})", llm_client::MODEL);
                Some(LlmClient::new(key.clone()))
            }
            None => {
                warn!("USE_AI_SUMMARY is on but ANTHROPIC_API_KEY is not set; summaries disabled");
                None
            }
        }
    } else {
        info!("AI summaries disabled by configuration");
        None
    };

    let profiles = Arc::new(JsonProfileStore::load(config.profile_store_path.clone()));
    info!("Job profile store: {}", config.profile_store_path.display());

    let state = AppState {
        config: config.clone(),
        llm,
        profiles,
        uploads: UploadStore::default(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
