use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::chat::careers::find_career;
use crate::chat::history::{recent_history, save_message};
use crate::chat::prompts::generate_prompt;
use crate::errors::AppError;
use crate::models::career::DocumentSummary;
use crate::models::chat::ChatMessage;
use crate::resolver::suggest::suggest;
use crate::resolver::{LevelSchedule, Resolution};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub documentos: Option<Vec<DocumentSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horarios: Option<Vec<LevelSchedule>>,
}

/// POST /chat
///
/// Resolves the message against the career catalog and either answers
/// directly (catalog listing, didn't-understand fallback) or enriches the
/// prompt with program data and relays Gemini's reply. Both sides of the
/// exchange are persisted to the session history.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    info!("Mensaje recibido: {}", req.message);

    let session_id = req
        .session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let resolution = state.catalog.resolve(&req.message);

    let carrera_referencia = match &resolution {
        Resolution::Career(nombre) => Some(nombre.clone()),
        _ => None,
    };

    save_message(
        &state.db,
        &session_id,
        &ChatMessage {
            role: "user".to_string(),
            content: req.message.clone(),
            carrera_referencia: carrera_referencia.clone(),
        },
    )
    .await?;

    let history = recent_history(&state.db, &session_id).await?;

    let response = match resolution {
        Resolution::ListCareers => ChatResponse {
            response: format!(
                "¡Estas son las carreras que ofrecemos:\n\n- {}\n\n\
                 ¿Te gustaría que te brinde más información sobre alguna en particular?",
                state.catalog.formatted_careers()
            ),
            session_id: session_id.clone(),
            documentos: None,
            horarios: None,
        },
        Resolution::Unresolved => {
            let sugerencia = suggest(&req.message);
            ChatResponse {
                response: format!(
                    "Lo siento, no entendí completamente tu consulta.{sugerencia}\n\n\
                     Estas son las carreras sobre las que puedo brindarte información:\n- {}\n\n\
                     ¿Sobre cuál te gustaría conocer más?",
                    state.catalog.formatted_careers()
                ),
                session_id: session_id.clone(),
                documentos: None,
                horarios: None,
            }
        }
        Resolution::Career(nombre) => {
            let career = find_career(&state.db, &state.catalog, &nombre).await?;
            let prompt = generate_prompt(&req.message, career.as_ref(), &history);
            debug!("Prompt generado ({} caracteres)", prompt.len());

            let reply = state
                .llm
                .generate(&prompt)
                .await
                .map_err(|e| AppError::Llm(e.to_string()))?;

            ChatResponse {
                response: reply,
                session_id: session_id.clone(),
                documentos: career.as_ref().map(|info| info.documentos.clone()),
                horarios: career.as_ref().map(|info| info.horarios.clone()),
            }
        }
    };

    save_message(
        &state.db,
        &session_id,
        &ChatMessage {
            role: "assistant".to_string(),
            content: response.response.clone(),
            carrera_referencia,
        },
    )
    .await?;

    Ok(Json(response))
}
