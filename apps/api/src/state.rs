use std::path::PathBuf;
use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::parser_client::DocumentParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// LlamaParse in production, a mock in tests.
    pub parser: Arc<dyn DocumentParser>,
    /// Gemini in production, a mock in tests.
    pub llm: Arc<dyn TextGenerator>,
    /// Where uploaded documents are staged while the parser reads them.
    pub temp_dir: PathBuf,
    /// Body limit for document uploads.
    pub max_body_bytes: usize,
}
