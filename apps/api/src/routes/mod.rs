pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::documents::handlers::handle_get_document;
use crate::registration::handlers::handle_pre_registration;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/chat", post(handle_chat))
        .route("/documentos/:id", get(handle_get_document))
        .route("/pre-registro", post(handle_pre_registration))
        .with_state(state)
}
