use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::GeminiClient;
use crate::resolver::CareerCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: GeminiClient,
    /// Static career tables, built once at startup and never mutated.
    pub catalog: Arc<CareerCatalog>,
}
