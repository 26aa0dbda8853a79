use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::retrieval::ContextRetriever;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text generation provider. Default: `MistralClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Context lookup for RAG. `None` when `RETRIEVAL_URL` is unset.
    pub retriever: Option<Arc<dyn ContextRetriever>>,
}
