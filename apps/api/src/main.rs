mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod rag;
mod retrieval;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::MistralClient;
use crate::retrieval::{ContextRetriever, HttpContextRetriever};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mistral gateway v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = MistralClient::from_config(&config)?;
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize retrieval client, if configured
    let retriever = match &config.retrieval_url {
        Some(url) => {
            let client = HttpContextRetriever::new(
                url.clone(),
                Duration::from_secs(config.mistral_timeout_secs),
            )?;
            info!("Retrieval client initialized ({url})");
            Some(Arc::new(client) as Arc<dyn ContextRetriever>)
        }
        None => {
            warn!("RETRIEVAL_URL not set; /generate/rag/ will return 503");
            None
        }
    };

    let state = AppState {
        generator: Arc::new(llm),
        retriever,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict allowed origins once the frontend host is fixed
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
