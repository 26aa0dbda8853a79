//! Retrieval-augmented generation: prepend retrieved context to the user's question.

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::retrieval::ContextRetriever;

/// Builds the composed prompt. No escaping or truncation is applied to either part.
pub fn compose_prompt(context: &str, prompt: &str) -> String {
    format!("Context: {context} \n Question: {prompt}")
}

/// Retrieves context for `prompt` once, composes, and generates once.
///
/// A retrieval failure is returned as-is and the generator is not called.
pub async fn generate_with_rag(
    retriever: &dyn ContextRetriever,
    generator: &dyn TextGenerator,
    prompt: &str,
    max_length: u32,
) -> Result<String, AppError> {
    let context = retriever.retrieve_context(prompt).await?;
    let full_prompt = compose_prompt(&context, prompt);
    Ok(generator.generate_text(&full_prompt, max_length).await?)
}
