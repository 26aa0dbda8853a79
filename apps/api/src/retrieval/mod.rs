//! Context retrieval — looks up grounding text for a prompt from an external service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Retrieval service returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// An opaque prompt-to-context lookup.
#[async_trait]
pub trait ContextRetriever: Send + Sync {
    async fn retrieve_context(&self, prompt: &str) -> Result<String, RetrievalError>;
}

#[derive(Debug, Serialize)]
struct RetrievalRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct RetrievalResponse {
    context: String,
}

/// Calls a retrieval service over HTTP: `POST {url}` with `{"query": ...}`,
/// expecting `{"context": ...}` back.
#[derive(Clone)]
pub struct HttpContextRetriever {
    client: Client,
    url: String,
}

impl HttpContextRetriever {
    pub fn new(url: String, timeout: Duration) -> Result<Self, RetrievalError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url,
        })
    }
}

#[async_trait]
impl ContextRetriever for HttpContextRetriever {
    async fn retrieve_context(&self, prompt: &str) -> Result<String, RetrievalError> {
        let response = self
            .client
            .post(&self.url)
            .json(&RetrievalRequest { query: prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let retrieved: RetrievalResponse = response.json().await?;
        debug!("Retrieved context ({} chars)", retrieved.context.chars().count());
        Ok(retrieved.context)
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;
    use crate::test_support::spawn_server;

    async fn retriever_for(router: Router) -> HttpContextRetriever {
        let base = spawn_server(router).await;
        HttpContextRetriever::new(format!("{base}/retrieve"), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_returns_context_for_query() {
        let router = Router::new().route(
            "/retrieve",
            post(|Json(body): Json<Value>| async move {
                let query = body["query"].as_str().unwrap_or_default().to_string();
                Json(json!({"context": format!("docs about {query}")}))
            }),
        );

        let retriever = retriever_for(router).await;
        let context = retriever.retrieve_context("Rust").await.unwrap();
        assert_eq!(context, "docs about Rust");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let router = Router::new().route(
            "/retrieve",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "index offline") }),
        );

        let retriever = retriever_for(router).await;
        let err = retriever.retrieve_context("Rust").await.unwrap_err();
        match err {
            RetrievalError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "index offline");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let router = Router::new().route(
            "/retrieve",
            post(|| async { Json(json!({"documents": []})) }),
        );

        let retriever = retriever_for(router).await;
        let err = retriever.retrieve_context("Rust").await.unwrap_err();
        assert!(matches!(err, RetrievalError::Http(_)));
    }
}
