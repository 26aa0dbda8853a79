//! Fakes and helpers shared by unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;

use crate::llm_client::{LlmError, TextGenerator};
use crate::retrieval::{ContextRetriever, RetrievalError};

/// Records every call. `reply: None` fails each call with `LlmError::EmptyContent`.
#[derive(Default)]
pub struct FakeGenerator {
    reply: Option<String>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate_text(&self, prompt: &str, max_length: u32) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), max_length));
        self.reply.clone().ok_or(LlmError::EmptyContent)
    }
}

/// Records every call. `context: None` fails each call with a 500 status error.
#[derive(Default)]
pub struct FakeRetriever {
    context: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeRetriever {
    pub fn replying(context: &str) -> Self {
        Self {
            context: Some(context.to_string()),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContextRetriever for FakeRetriever {
    async fn retrieve_context(&self, prompt: &str) -> Result<String, RetrievalError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        self.context.clone().ok_or_else(|| RetrievalError::Status {
            status: 500,
            body: "retrieval backend unavailable".to_string(),
        })
    }
}

/// Serves `router` on an ephemeral localhost port and returns its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
