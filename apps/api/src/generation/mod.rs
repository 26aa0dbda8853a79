//! Generation API: plain and retrieval-augmented text generation.
//! All provider calls go through the `TextGenerator` held in `AppState`.

pub mod handlers;
