use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::integration::{load_integration_document, IntegrationDocument};

pub const WELCOME_MESSAGE: &str = "Bienvenue sur l'API Mistral AI";

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET /
pub async fn home_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE,
    })
}

/// GET /docs/integration-process
///
/// Serves the compliance/certification example document. Read-only.
pub async fn integration_process_handler() -> Result<Json<IntegrationDocument>, AppError> {
    let doc = load_integration_document()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid integration fixture: {e}")))?;
    Ok(Json(doc))
}
