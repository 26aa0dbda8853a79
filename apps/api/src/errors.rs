use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::retrieval::RetrievalError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("Retrieval service is not configured")]
    RetrievalUnavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The text generation provider failed".to_string(),
                )
            }
            AppError::Retrieval(e) => {
                tracing::error!("Retrieval error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RETRIEVAL_ERROR",
                    "The context retrieval provider failed".to_string(),
                )
            }
            AppError::RetrievalUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "RETRIEVAL_UNAVAILABLE",
                "Context retrieval is not configured on this server".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Llm(LlmError::EmptyContent), StatusCode::BAD_GATEWAY),
            (
                AppError::Retrieval(RetrievalError::Status {
                    status: 500,
                    body: "boom".into(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (AppError::RetrievalUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (
                AppError::Internal(anyhow::anyhow!("x")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn test_provider_details_are_not_exposed() {
        let err = AppError::Llm(LlmError::Api {
            status: 401,
            message: "invalid key sk-secret".into(),
        });

        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "LLM_ERROR");
        assert!(!body.to_string().contains("sk-secret"));
    }
}
