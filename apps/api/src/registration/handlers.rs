use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::FromRow;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreRegistration {
    pub nombre: String,
    pub cedula: String,
    pub correo: String,
    pub celular: String,
    pub carrera: String,
}

#[derive(Debug, FromRow)]
struct RegisteredRow {
    id: i32,
    fecha_registro: DateTime<Utc>,
    carrera: String,
}

/// POST /pre-registro
///
/// Persists a lead submission. A repeated cédula is not an error: the
/// existing registration is returned with a warning instead.
pub async fn handle_pre_registration(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<PreRegistration>,
) -> Result<Json<Value>, AppError> {
    validate(&req)?;

    let origen = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("desconocido")
        .to_string();

    let inserted: Result<RegisteredRow, sqlx::Error> = sqlx::query_as(
        r#"
        INSERT INTO pre_usuario (
            nombre, cedula, correo, celular, carrera,
            fecha_registro, origen, procesado
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, false)
        RETURNING id, fecha_registro, carrera
        "#,
    )
    .bind(&req.nombre)
    .bind(&req.cedula)
    .bind(&req.correo)
    .bind(&req.celular)
    .bind(&req.carrera)
    .bind(Utc::now())
    .bind(&origen)
    .fetch_one(&state.db)
    .await;

    let row = match inserted {
        Ok(row) => row,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            warn!("Pre-registro duplicado para cédula {}", req.cedula);

            let existing: Option<RegisteredRow> = sqlx::query_as(
                "SELECT id, fecha_registro, carrera FROM pre_usuario WHERE cedula = $1 LIMIT 1",
            )
            .bind(&req.cedula)
            .fetch_optional(&state.db)
            .await?;

            let Some(existing) = existing else {
                return Err(AppError::Validation(
                    "Error al procesar el registro. Por favor intente nuevamente.".to_string(),
                ));
            };

            return Ok(Json(json!({
                "mensaje": "Ya existe un registro con esta cédula",
                "registro": {
                    "id": existing.id,
                    "fecha": existing.fecha_registro.to_rfc3339(),
                    "carrera": existing.carrera,
                },
                "warning": "Se encontró un registro previo con esta cédula",
            })));
        }
        Err(e) => return Err(e.into()),
    };

    info!(
        "Pre-registro {} creado para la carrera {}",
        row.id, row.carrera
    );

    let perfil: Option<(String,)> = sqlx::query_as(
        r#"
        SELECT p.descripcion
        FROM carrera c
        JOIN perfil_profesional p ON c.id_carrera = p.id_carrera
        WHERE LOWER(c.nombre) = LOWER($1)
        LIMIT 1
        "#,
    )
    .bind(&req.carrera)
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(json!({
        "mensaje": "Pre-registro exitoso",
        "registro": {
            "id": row.id,
            "fecha": row.fecha_registro.to_rfc3339(),
            "carrera": row.carrera,
            "perfil_profesional": perfil
                .map(|(descripcion,)| descripcion)
                .unwrap_or_else(|| "No disponible".to_string()),
        },
        "next_steps": "Un asesor se pondrá en contacto contigo pronto",
    })))
}

/// Server-side mirror of the registration form's client rules.
fn validate(req: &PreRegistration) -> Result<(), AppError> {
    if req.nombre.trim().is_empty() {
        return Err(AppError::Validation("Nombre es requerido".to_string()));
    }
    if !is_valid_cedula(&req.cedula) {
        return Err(AppError::Validation(
            "Cédula debe tener 10 dígitos".to_string(),
        ));
    }
    if !is_valid_correo(&req.correo) {
        return Err(AppError::Validation(
            "Correo electrónico no válido".to_string(),
        ));
    }
    if req.carrera.trim().is_empty() {
        return Err(AppError::Validation(
            "Debe seleccionar una carrera".to_string(),
        ));
    }
    Ok(())
}

fn is_valid_cedula(cedula: &str) -> bool {
    cedula.len() == 10 && cedula.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_correo(correo: &str) -> bool {
    let Some((local, domain)) = correo.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cedula_must_be_ten_digits() {
        assert!(is_valid_cedula("0912345678"));
        assert!(!is_valid_cedula("091234567"));
        assert!(!is_valid_cedula("09123456789"));
        assert!(!is_valid_cedula("091234567a"));
        assert!(!is_valid_cedula(""));
    }

    #[test]
    fn test_correo_needs_local_part_and_domain_dot() {
        assert!(is_valid_correo("maria@example.com"));
        assert!(!is_valid_correo("maria.example.com"));
        assert!(!is_valid_correo("maria@"));
        assert!(!is_valid_correo("@example.com"));
        assert!(!is_valid_correo("maria@example."));
        assert!(!is_valid_correo("maria@.com"));
    }

    #[test]
    fn test_validate_rejects_blank_nombre_and_carrera() {
        let mut req = PreRegistration {
            nombre: "María Pérez".to_string(),
            cedula: "0912345678".to_string(),
            correo: "maria@example.com".to_string(),
            celular: "0991234567".to_string(),
            carrera: "Derecho".to_string(),
        };
        assert!(validate(&req).is_ok());

        req.nombre = "  ".to_string();
        assert!(validate(&req).is_err());

        req.nombre = "María Pérez".to_string();
        req.carrera = String::new();
        assert!(validate(&req).is_err());
    }
}
