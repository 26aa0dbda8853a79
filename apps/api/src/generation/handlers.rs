//! Axum route handlers for the Generation API.

use async_trait::async_trait;
use axum::{
    extract::{rejection::QueryRejection, FromRequest, Query, Request, State},
    http::header,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::rag::generate_with_rag;
use crate::state::AppState;

pub const DEFAULT_MAX_LENGTH: u32 = 200;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Generation parameters. Accepted in the query string, a JSON body, or both;
/// query values win when both are present.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateParams {
    pub prompt: Option<String>,
    pub max_length: Option<u32>,
}

#[derive(Debug, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub max_length: u32,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub response: String,
}

impl GenerateParams {
    /// Merges query and body parameters and applies the `max_length` default.
    pub fn resolve(self, body: Option<GenerateParams>) -> Result<GenerateRequest, AppError> {
        let body = body.unwrap_or_default();

        let prompt = self
            .prompt
            .or(body.prompt)
            .ok_or_else(|| AppError::Validation("prompt is required".to_string()))?;

        let max_length = self
            .max_length
            .or(body.max_length)
            .unwrap_or(DEFAULT_MAX_LENGTH);

        Ok(GenerateRequest { prompt, max_length })
    }
}

/// Optional JSON body for the generation routes.
///
/// A request without a `Content-Type` header has no body. Anything else must be
/// valid `GenerateParams` JSON; every rejection becomes a validation error.
#[derive(Debug, Default)]
pub struct GenerateBody(pub Option<GenerateParams>);

#[async_trait]
impl<S> FromRequest<S> for GenerateBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            return Ok(Self(None));
        }

        let Json(params) = Json::<GenerateParams>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(Self(Some(params)))
    }
}

/// Maps axum's plain-text query rejection into the JSON error envelope.
fn query_params(
    query: Result<Query<GenerateParams>, QueryRejection>,
) -> Result<GenerateParams, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate/
///
/// Forwards the prompt to the generation provider and returns its output unchanged.
pub async fn handle_generate(
    State(state): State<AppState>,
    query: Result<Query<GenerateParams>, QueryRejection>,
    GenerateBody(body): GenerateBody,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = query_params(query)?.resolve(body)?;

    info!(
        "Generating (prompt_chars={}, max_length={})",
        request.prompt.chars().count(),
        request.max_length
    );

    let response = state
        .generator
        .generate_text(&request.prompt, request.max_length)
        .await?;

    Ok(Json(GenerateResponse { response }))
}

/// POST /generate/rag/
///
/// Retrieves context for the prompt, composes `Context: … Question: …`, then generates.
pub async fn handle_generate_rag(
    State(state): State<AppState>,
    query: Result<Query<GenerateParams>, QueryRejection>,
    GenerateBody(body): GenerateBody,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = query_params(query)?.resolve(body)?;
    let retriever = state
        .retriever
        .as_deref()
        .ok_or(AppError::RetrievalUnavailable)?;

    info!(
        "Generating with retrieval (prompt_chars={}, max_length={})",
        request.prompt.chars().count(),
        request.max_length
    );

    let response = generate_with_rag(
        retriever,
        state.generator.as_ref(),
        &request.prompt,
        request.max_length,
    )
    .await?;

    Ok(Json(GenerateResponse { response }))
}
