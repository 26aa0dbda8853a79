pub mod health;
pub mod home;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/docs/integration-process",
            get(home::integration_process_handler),
        )
        // Generation API
        .route("/generate/", post(handlers::handle_generate))
        .route("/generate", post(handlers::handle_generate))
        .route("/generate/rag/", post(handlers::handle_generate_rag))
        .route("/generate/rag", post(handlers::handle_generate_rag))
        .with_state(state)
}
