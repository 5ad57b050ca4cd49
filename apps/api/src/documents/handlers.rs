use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use sqlx::FromRow;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(FromRow)]
struct DocumentRow {
    nombre: Option<String>,
    contenido: Option<Vec<u8>>,
}

/// GET /documentos/:id
/// Serves the stored PDF straight from the database, inline so the
/// browser renders it.
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let doc: Option<DocumentRow> =
        sqlx::query_as("SELECT nombre, contenido FROM documentos WHERE id = $1 LIMIT 1")
            .bind(id)
            .fetch_optional(&state.db)
            .await?;

    let Some(doc) = doc else {
        return Err(AppError::NotFound(
            "Documento no encontrado o vacío".to_string(),
        ));
    };

    let contenido = doc
        .contenido
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::NotFound("Documento no encontrado o vacío".to_string()))?;

    let nombre = doc.nombre.unwrap_or_else(|| "documento".to_string());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename={nombre}.pdf"),
            ),
        ],
        contenido,
    )
        .into_response())
}
