use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::career::{CareerInfo, CareerRow, DocumentSummary};
use crate::resolver::CareerCatalog;

/// Loads program details, document metadata and schedules for a resolved
/// career name. The name lookup is partial and case-insensitive, matching
/// the looseness of the resolution that produced the name.
pub async fn find_career(
    pool: &PgPool,
    catalog: &CareerCatalog,
    nombre: &str,
) -> Result<Option<CareerInfo>, AppError> {
    let row: Option<CareerRow> = sqlx::query_as(
        r#"
        SELECT c.id_carrera,
               c.nombre,
               c.modalidad,
               c.semestre AS semestres,
               c.inscripción::text AS inscripcion,
               c.pre::text AS pre,
               c.matrícula::text AS matricula,
               c.cuotas_mensuales::text AS cuotas_mensuales,
               p.descripcion
        FROM carrera c
        LEFT JOIN perfil_profesional p ON c.id_carrera = p.id_carrera
        WHERE c.nombre ILIKE $1
        LIMIT 1
        "#,
    )
    .bind(format!("%{nombre}%"))
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let documentos: Vec<DocumentSummary> = sqlx::query_as(
        r#"
        SELECT id, nombre, fecha_upload
        FROM documentos
        WHERE id_carrera = $1
        ORDER BY fecha_upload DESC
        "#,
    )
    .bind(row.id_carrera)
    .fetch_all(pool)
    .await?;

    let horarios = catalog.schedule_for(&row.nombre).to_vec();

    Ok(Some(CareerInfo {
        row,
        documentos,
        horarios,
    }))
}
